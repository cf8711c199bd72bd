//! Prompt construction for persona and synthesis calls

pub mod persona;
pub mod template;

pub use template::PromptTemplate;

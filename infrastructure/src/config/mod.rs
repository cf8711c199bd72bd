//! Configuration loading

pub mod file_config;
pub mod loader;

pub use file_config::{FileConfig, FileCouncilConfig, FileModelsConfig, FileOllamaConfig};
pub use loader::ConfigLoader;

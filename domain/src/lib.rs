//! Domain layer for agent-council
//!
//! Pure types and policy for the four-persona council: persona identity and
//! weighting, conversation state, the protocol step machine, the group-chat
//! lexicon (skip token, closing signals), synthesis report shape, decision
//! aggregation and prompt templates.
//!
//! This crate has no I/O. Everything that talks to a model backend lives
//! behind ports in `council-application`.

pub mod chat;
pub mod core;
pub mod decision;
pub mod persona;
pub mod prompt;
pub mod session;
pub mod synthesis;

// Re-export main types
pub use chat::{contains_closing_signal, context_window, is_skip, CONTEXT_WINDOW_LINES};
pub use core::error::DomainError;
pub use core::problem::Problem;
pub use decision::{DecisionMethod, FinalDecision, WeightEntry};
pub use persona::{PersonaRole, PersonaWeights};
pub use prompt::PromptTemplate;
pub use session::{ChatMessage, ConversationState, ProtocolStep, ResponseSet, Speaker};
pub use synthesis::SynthesisReport;

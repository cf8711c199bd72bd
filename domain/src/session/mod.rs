//! Conversation session state
//!
//! A [`ConversationState`] is created at session start, mutated in place by
//! each orchestration step, and discarded when the session ends. There is no
//! persistence and no cross-session sharing.

pub mod entities;
pub mod message;
pub mod response_set;

pub use entities::{ConversationState, ProtocolStep};
pub use message::{ChatMessage, Speaker};
pub use response_set::ResponseSet;

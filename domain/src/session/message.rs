//! Transcript messages

use crate::persona::PersonaRole;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    /// The human running the session
    User,
    /// One of the four personas
    Persona(PersonaRole),
}

impl Speaker {
    /// Display name used in chat lines ("You" or the persona alias)
    pub fn display_name(&self) -> &'static str {
        match self {
            Speaker::User => "You",
            Speaker::Persona(role) => role.alias(),
        }
    }
}

/// One append-only transcript entry
///
/// Once appended, an entry is never mutated or removed. Transcript order is
/// the user-visible chat order, not completion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a message stamped with the current wall-clock time
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    /// Shorthand for a persona message
    pub fn from_persona(role: PersonaRole, text: impl Into<String>) -> Self {
        Self::new(Speaker::Persona(role), text)
    }

    /// Shorthand for a user message
    pub fn from_user(text: impl Into<String>) -> Self {
        Self::new(Speaker::User, text)
    }

    /// Format as a `Speaker: text` chat line
    pub fn as_chat_line(&self) -> String {
        format!("{}: {}", self.speaker.display_name(), self.text)
    }
}

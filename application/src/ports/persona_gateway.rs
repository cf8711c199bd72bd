//! Persona gateway port
//!
//! Defines how the orchestration core invokes a persona, which is a thin
//! configuration of a remote model call. Each capability must complete or
//! fail within the caller's timeout; the caller contains failures per
//! persona.

use async_trait::async_trait;
use council_domain::PersonaRole;
use thiserror::Error;

/// Errors from a persona's remote call
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("request timed out")]
    Timeout,
}

/// Gateway for persona model calls
///
/// One implementation serves all four roles; the role selects the model and
/// system prompt behind the call.
#[async_trait]
pub trait PersonaGateway: Send + Sync {
    /// Analyze the problem from the role's perspective (broadcast step)
    async fn analyze(&self, role: PersonaRole, problem: &str) -> Result<String, GatewayError>;

    /// Reply to an ongoing group chat.
    ///
    /// `message` is the prompt for this turn, `context` the bounded recent
    /// conversation. A reply of `"SKIP"` (case-insensitive, exact or prefix)
    /// signals abstention; interpreting it is the caller's job.
    async fn chat_response(
        &self,
        role: PersonaRole,
        message: &str,
        context: &str,
    ) -> Result<String, GatewayError>;

    /// React to the other personas' responses
    async fn critique(
        &self,
        role: PersonaRole,
        problem: &str,
        other_responses: &[(String, String)],
    ) -> Result<String, GatewayError>;
}

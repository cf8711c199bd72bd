//! Conversation state and the protocol step machine

use crate::core::error::DomainError;
use crate::core::problem::Problem;
use crate::decision::FinalDecision;
use crate::session::message::ChatMessage;
use crate::session::response_set::ResponseSet;
use crate::synthesis::SynthesisReport;
use serde::{Deserialize, Serialize};

/// The five protocol steps, in order.
///
/// A session's step only ever advances; it never regresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProtocolStep {
    Broadcast,
    ParallelResponses,
    Debate,
    Synthesis,
    Decision,
}

impl ProtocolStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProtocolStep::Broadcast => "Broadcast",
            ProtocolStep::ParallelResponses => "Parallel Responses",
            ProtocolStep::Debate => "Debate",
            ProtocolStep::Synthesis => "Synthesis",
            ProtocolStep::Decision => "Decision",
        }
    }
}

impl std::fmt::Display for ProtocolStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Mutable record of one council session (Entity)
///
/// Created at `Broadcast`, mutated in place by each orchestration step, and
/// discarded when the session ends. Workers never touch this directly; the
/// orchestrator applies all results after each step's concurrent calls have
/// joined.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationState {
    /// Problem statement, set once at session start
    problem: Problem,
    /// Per-persona responses from the broadcast step
    pub responses: ResponseSet,
    /// Append-only chat transcript in user-visible order
    transcript: Vec<ChatMessage>,
    /// Structured synthesis, set at most once
    synthesis: Option<SynthesisReport>,
    /// Final decision, set at most once, after synthesis
    decision: Option<FinalDecision>,
    /// Current protocol step
    step: ProtocolStep,
}

impl ConversationState {
    /// Start a session at the Broadcast step with empty containers
    pub fn new(problem: Problem) -> Self {
        Self {
            problem,
            responses: ResponseSet::new(),
            transcript: Vec::new(),
            synthesis: None,
            decision: None,
            step: ProtocolStep::Broadcast,
        }
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn synthesis(&self) -> Option<&SynthesisReport> {
        self.synthesis.as_ref()
    }

    pub fn decision(&self) -> Option<&FinalDecision> {
        self.decision.as_ref()
    }

    pub fn step(&self) -> ProtocolStep {
        self.step
    }

    /// Append a transcript entry. Entries are never mutated or removed.
    pub fn append_message(&mut self, message: ChatMessage) {
        self.transcript.push(message);
    }

    /// Advance the protocol step. Moving backwards is a domain error.
    pub fn advance_to(&mut self, step: ProtocolStep) -> Result<(), DomainError> {
        if step < self.step {
            return Err(DomainError::StepRegression {
                from: self.step.to_string(),
                to: step.to_string(),
            });
        }
        self.step = step;
        Ok(())
    }

    /// Store the synthesis result. May only happen once per session.
    pub fn set_synthesis(&mut self, report: SynthesisReport) -> Result<(), DomainError> {
        if self.synthesis.is_some() {
            return Err(DomainError::SynthesisAlreadySet);
        }
        self.synthesis = Some(report);
        Ok(())
    }

    /// Store the final decision. May only happen once per session.
    pub fn set_decision(&mut self, decision: FinalDecision) -> Result<(), DomainError> {
        if self.decision.is_some() {
            return Err(DomainError::DecisionAlreadySet);
        }
        self.decision = Some(decision);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::message::Speaker;

    fn state() -> ConversationState {
        ConversationState::new(Problem::new("Should we launch in 8 weeks?").unwrap())
    }

    #[test]
    fn test_new_session_starts_at_broadcast() {
        let state = state();
        assert_eq!(state.step(), ProtocolStep::Broadcast);
        assert!(state.transcript().is_empty());
        assert!(state.responses.is_empty());
        assert!(state.synthesis().is_none());
        assert!(state.decision().is_none());
    }

    #[test]
    fn test_step_advances_forward_only() {
        let mut state = state();
        state.advance_to(ProtocolStep::ParallelResponses).unwrap();
        state.advance_to(ProtocolStep::Synthesis).unwrap();

        let err = state.advance_to(ProtocolStep::Broadcast).unwrap_err();
        assert!(matches!(err, DomainError::StepRegression { .. }));
        assert_eq!(state.step(), ProtocolStep::Synthesis);
    }

    #[test]
    fn test_advance_to_same_step_is_allowed() {
        let mut state = state();
        state.advance_to(ProtocolStep::Debate).unwrap();
        state.advance_to(ProtocolStep::Debate).unwrap();
    }

    #[test]
    fn test_transcript_is_append_only() {
        let mut state = state();
        state.append_message(ChatMessage::new(Speaker::User, "first"));
        let before = state.transcript().len();
        state.append_message(ChatMessage::new(Speaker::User, "second"));

        assert_eq!(state.transcript().len(), before + 1);
        assert_eq!(state.transcript()[0].text, "first");
    }

    #[test]
    fn test_synthesis_set_at_most_once() {
        let mut state = state();
        state.set_synthesis(SynthesisReport::degraded("raw")).unwrap();
        let err = state.set_synthesis(SynthesisReport::degraded("again")).unwrap_err();
        assert!(matches!(err, DomainError::SynthesisAlreadySet));
    }
}

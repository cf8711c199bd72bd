//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Problem statement cannot be empty")]
    EmptyProblem,

    #[error("Unknown persona: {0}")]
    UnknownPersona(String),

    #[error("Protocol step cannot move backwards: {from} -> {to}")]
    StepRegression { from: String, to: String },

    #[error("Synthesis result already set for this session")]
    SynthesisAlreadySet,

    #[error("Decision already set for this session")]
    DecisionAlreadySet,
}

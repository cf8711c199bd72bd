//! Application layer for agent-council
//!
//! Ports define how the orchestration core talks to the outside world
//! (persona model calls, synthesis, progress display); use cases implement
//! the orchestration state machine itself: the skip-enabled chat round, the
//! bounded addressed debate, and the full five-step council protocol.

pub mod config;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod testing;

// Re-export main types
pub use config::SessionConfig;
pub use ports::persona_gateway::{GatewayError, PersonaGateway};
pub use ports::progress::{CouncilProgress, NoProgress};
pub use ports::synthesizer::Synthesizer;
pub use use_cases::run_council::{RunCouncilError, RunCouncilUseCase};
pub use use_cases::run_debate::RunDebateUseCase;
pub use use_cases::run_round::RunRoundUseCase;

//! Use cases: the orchestration state machine
//!
//! - [`run_round`] — one skip-enabled group-chat round (Turn Scheduler)
//! - [`run_debate`] — a bounded, addressed sub-conversation (Debate Controller)
//! - [`run_council`] — the full five-step protocol (Orchestrator)

pub mod run_council;
pub mod run_debate;
pub mod run_round;

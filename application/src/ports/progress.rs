//! Progress notification port
//!
//! Completion notifications arrive in completion order for live display;
//! transcript order is fixed separately by the use cases.

use council_domain::{ChatMessage, PersonaRole, ProtocolStep};
use std::time::Duration;

/// Callbacks for progress during council execution
///
/// Implementations live in the presentation layer.
pub trait CouncilProgress: Send + Sync {
    /// A protocol step started, with the number of persona tasks it will run
    fn on_step_start(&self, step: ProtocolStep, total_tasks: usize);

    /// A persona's call finished (in completion order)
    fn on_persona_complete(&self, step: ProtocolStep, role: PersonaRole, success: bool, elapsed: Duration);

    /// The step finished and its results are applied to the session
    fn on_step_complete(&self, step: ProtocolStep);

    /// A persona abstained from a skip-enabled round
    fn on_persona_skipped(&self, _role: PersonaRole) {}

    /// A message was appended to the transcript
    fn on_message(&self, _message: &ChatMessage) {}
}

/// No-op progress for callers that don't display anything
pub struct NoProgress;

impl CouncilProgress for NoProgress {
    fn on_step_start(&self, _step: ProtocolStep, _total_tasks: usize) {}
    fn on_persona_complete(&self, _step: ProtocolStep, _role: PersonaRole, _success: bool, _elapsed: Duration) {}
    fn on_step_complete(&self, _step: ProtocolStep) {}
}

//! Synthesis port

use crate::ports::persona_gateway::GatewayError;
use async_trait::async_trait;
use council_domain::SynthesisReport;

/// Structured synthesis over all persona responses
///
/// `responses` are `(role key, response)` pairs in dispatch order. Adapters
/// should degrade to [`SynthesisReport::degraded`] when the backend returns
/// unstructured text; a hard transport failure may surface as an error, which
/// the orchestrator converts into a degraded report rather than propagating.
#[async_trait]
pub trait Synthesizer: Send + Sync {
    async fn synthesize(
        &self,
        problem: &str,
        responses: &[(String, String)],
    ) -> Result<SynthesisReport, GatewayError>;
}

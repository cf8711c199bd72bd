//! Synthesis meta-agent backed by Ollama

use crate::config::FileModelsConfig;
use crate::ollama::OllamaClient;
use async_trait::async_trait;
use council_application::{GatewayError, Synthesizer};
use council_domain::{PromptTemplate, SynthesisReport};
use std::sync::Arc;
use tracing::warn;

/// Runs the synthesis model in JSON mode and parses the structured report
pub struct OllamaSynthesizer {
    client: Arc<OllamaClient>,
    model: String,
    temperature: f64,
}

impl OllamaSynthesizer {
    pub fn new(client: Arc<OllamaClient>, models: &FileModelsConfig) -> Self {
        Self {
            client,
            model: models.synthesis.clone(),
            temperature: models.synthesis_temperature,
        }
    }

    /// Parse the model's reply, falling back to a degraded report that
    /// carries the raw text as its summary.
    fn parse_report(raw: &str) -> SynthesisReport {
        match serde_json::from_str(raw) {
            Ok(report) => report,
            Err(e) => {
                warn!("synthesis reply was not valid JSON: {e}");
                SynthesisReport::degraded(raw)
            }
        }
    }
}

#[async_trait]
impl Synthesizer for OllamaSynthesizer {
    async fn synthesize(
        &self,
        problem: &str,
        responses: &[(String, String)],
    ) -> Result<SynthesisReport, GatewayError> {
        let raw = self
            .client
            .chat(
                &self.model,
                PromptTemplate::synthesis_system(),
                &PromptTemplate::synthesis(problem, responses),
                self.temperature,
                true,
            )
            .await?;
        Ok(Self::parse_report(raw.trim()))
    }
}

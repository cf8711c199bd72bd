//! Configuration file schema
//!
//! Example `council.toml`:
//!
//! ```toml
//! [ollama]
//! base_url = "http://localhost:11434"
//!
//! [council]
//! use_weighted_model = true
//! debate_rounds = 2
//! max_debate_exchanges = 3
//! agent_timeout_secs = 60
//!
//! [council.weights]
//! visionary = 0.35
//! strategist = 0.30
//! operator = 0.20
//! risk_analyst = 0.15
//!
//! [models]
//! visionary = "gpt-oss:120b-cloud"
//! strategist = "glm-4.6:cloud"
//! operator = "kimi-k2-thinking:cloud"
//! risk_analyst = "deepseek-v3.1:671b-cloud"
//! synthesis = "gpt-oss:120b-cloud"
//! synthesis_temperature = 0.6
//! ```

use council_application::SessionConfig;
use council_domain::{DecisionMethod, PersonaRole, PersonaWeights};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration file schema
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub ollama: FileOllamaConfig,
    pub council: FileCouncilConfig,
    pub models: FileModelsConfig,
}

impl FileConfig {
    /// Project the file schema into a session configuration
    pub fn to_session_config(&self) -> SessionConfig {
        let method = if self.council.use_weighted_model {
            DecisionMethod::WeightedModel
        } else {
            DecisionMethod::MajorityVoting
        };
        SessionConfig::new()
            .with_method(method)
            .with_weights(self.council.weights)
            .with_debate_rounds(self.council.debate_rounds)
            .with_max_debate_exchanges(self.council.max_debate_exchanges)
            .with_call_timeout(Duration::from_secs(self.council.agent_timeout_secs))
    }
}

/// `[ollama]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOllamaConfig {
    /// Base URL of the Ollama server
    pub base_url: String,
}

impl Default for FileOllamaConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
        }
    }
}

/// `[council]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCouncilConfig {
    /// Weighted decision model vs. majority voting
    pub use_weighted_model: bool,
    /// Open-discussion rounds in the full protocol
    pub debate_rounds: usize,
    /// Exchange cap for tagged debates
    pub max_debate_exchanges: usize,
    /// Per-call timeout in seconds
    pub agent_timeout_secs: u64,
    /// Per-persona decision weights
    pub weights: PersonaWeights,
}

impl Default for FileCouncilConfig {
    fn default() -> Self {
        Self {
            use_weighted_model: true,
            debate_rounds: 2,
            max_debate_exchanges: 3,
            agent_timeout_secs: 60,
            weights: PersonaWeights::default(),
        }
    }
}

/// `[models]` section: which model serves each persona
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    pub visionary: String,
    pub strategist: String,
    pub operator: String,
    pub risk_analyst: String,
    pub synthesis: String,
    pub synthesis_temperature: f64,
}

impl FileModelsConfig {
    /// Model serving a given persona role
    pub fn for_role(&self, role: PersonaRole) -> &str {
        match role {
            PersonaRole::Visionary => &self.visionary,
            PersonaRole::Strategist => &self.strategist,
            PersonaRole::Operator => &self.operator,
            PersonaRole::RiskAnalyst => &self.risk_analyst,
        }
    }
}

impl Default for FileModelsConfig {
    fn default() -> Self {
        Self {
            visionary: "gpt-oss:120b-cloud".to_string(),
            strategist: "glm-4.6:cloud".to_string(),
            operator: "kimi-k2-thinking:cloud".to_string(),
            risk_analyst: "deepseek-v3.1:671b-cloud".to_string(),
            synthesis: "gpt-oss:120b-cloud".to_string(),
            synthesis_temperature: 0.6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_roundtrip_through_toml() {
        let config = FileConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let parsed: FileConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let parsed: FileConfig = toml::from_str(
            r#"
            [council]
            use_weighted_model = false
            debate_rounds = 1
            "#,
        )
        .unwrap();

        assert!(!parsed.council.use_weighted_model);
        assert_eq!(parsed.council.debate_rounds, 1);
        assert_eq!(parsed.council.max_debate_exchanges, 3);
        assert_eq!(parsed.ollama.base_url, "http://localhost:11434");
    }

    #[test]
    fn test_session_config_projection() {
        let mut config = FileConfig::default();
        config.council.use_weighted_model = false;
        config.council.agent_timeout_secs = 30;

        let session = config.to_session_config();
        assert_eq!(session.method, DecisionMethod::MajorityVoting);
        assert_eq!(session.call_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_model_lookup_per_role() {
        let models = FileModelsConfig::default();
        assert_eq!(models.for_role(PersonaRole::Strategist), "glm-4.6:cloud");
    }
}

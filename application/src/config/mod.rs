//! Session configuration
//!
//! Consumed, not produced, by the core: the decision strategy, persona
//! weights, debate shape and the per-call timeout are all fixed at session
//! configuration time.

use council_domain::{DecisionMethod, PersonaWeights};
use std::time::Duration;

/// Configuration for one council session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Decision aggregation strategy
    pub method: DecisionMethod,
    /// Per-persona weights (used by the weighted strategy)
    pub weights: PersonaWeights,
    /// Open-discussion rounds in the full protocol
    pub debate_rounds: usize,
    /// Exchange cap for tagged debates
    pub max_debate_exchanges: usize,
    /// Timeout for every individual persona call
    pub call_timeout: Duration,
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_method(mut self, method: DecisionMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_weights(mut self, weights: PersonaWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_debate_rounds(mut self, rounds: usize) -> Self {
        self.debate_rounds = rounds;
        self
    }

    pub fn with_max_debate_exchanges(mut self, exchanges: usize) -> Self {
        self.max_debate_exchanges = exchanges;
        self
    }

    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = timeout;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            method: DecisionMethod::WeightedModel,
            weights: PersonaWeights::default(),
            debate_rounds: 2,
            max_debate_exchanges: 3,
            call_timeout: Duration::from_secs(60),
        }
    }
}

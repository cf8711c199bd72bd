//! Per-persona decision weights

use super::role::PersonaRole;
use serde::{Deserialize, Serialize};

/// Fixed per-persona weights for the weighted decision model
///
/// Weights are configuration values carried through to the final decision
/// unchanged. They conventionally sum to 1.0 but nothing enforces that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonaWeights {
    pub visionary: f64,
    pub strategist: f64,
    pub operator: f64,
    pub risk_analyst: f64,
}

impl PersonaWeights {
    /// Weight assigned to a given role
    pub fn for_role(&self, role: PersonaRole) -> f64 {
        match role {
            PersonaRole::Visionary => self.visionary,
            PersonaRole::Strategist => self.strategist,
            PersonaRole::Operator => self.operator,
            PersonaRole::RiskAnalyst => self.risk_analyst,
        }
    }

    /// Sum of all weights (informational only)
    pub fn total(&self) -> f64 {
        self.visionary + self.strategist + self.operator + self.risk_analyst
    }
}

impl Default for PersonaWeights {
    /// Default split: Visionary 35%, Strategist 30%, Operator 20%, Risk Analyst 15%
    fn default() -> Self {
        Self {
            visionary: 0.35,
            strategist: 0.30,
            operator: 0.20,
            risk_analyst: 0.15,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let weights = PersonaWeights::default();
        assert!((weights.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_for_role_lookup() {
        let weights = PersonaWeights::default();
        assert_eq!(weights.for_role(PersonaRole::Visionary), 0.35);
        assert_eq!(weights.for_role(PersonaRole::RiskAnalyst), 0.15);
    }
}

//! Final decision aggregation
//!
//! Both strategies are deterministic projections of already-computed inputs:
//! the per-persona responses and the synthesis report. The weighted strategy
//! annotates each persona with its configured weight; majority voting emits
//! the same shape without weight metadata. Neither re-derives weights or
//! tallies votes.

use crate::persona::{PersonaRole, PersonaWeights};
use crate::session::ResponseSet;
use crate::synthesis::SynthesisReport;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maximum length of a response preview before truncation
const PREVIEW_CHARS: usize = 200;

/// How the final decision was aggregated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionMethod {
    WeightedModel,
    MajorityVoting,
}

impl DecisionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionMethod::WeightedModel => "weighted model",
            DecisionMethod::MajorityVoting => "majority voting",
        }
    }
}

impl std::fmt::Display for DecisionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-persona entry in the decision breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    /// Configured weight; absent under majority voting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Truncated preview of the persona's broadcast response
    pub response_preview: String,
}

/// The final recommendation for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalDecision {
    pub method: DecisionMethod,
    /// Synthesis summary, carried verbatim
    pub synthesis_summary: String,
    /// `final_options` from the synthesis report, carried verbatim
    pub recommended_options: Vec<String>,
    pub key_agreements: Vec<String>,
    pub key_conflicts: Vec<String>,
    pub identified_blind_spots: Vec<String>,
    /// Alias-keyed breakdown covering all four personas
    pub breakdown: BTreeMap<String, WeightEntry>,
}

impl FinalDecision {
    /// Weighted strategy: annotate each persona with its configured weight.
    pub fn weighted(
        responses: &ResponseSet,
        weights: &PersonaWeights,
        synthesis: &SynthesisReport,
    ) -> Self {
        Self::project(responses, synthesis, DecisionMethod::WeightedModel, |role| {
            Some(weights.for_role(role))
        })
    }

    /// Majority strategy: same projection without weight metadata.
    ///
    /// Despite the name there is no vote tally; "majority voting" is the
    /// unweighted labeling of the same pass-through.
    pub fn majority(responses: &ResponseSet, synthesis: &SynthesisReport) -> Self {
        Self::project(responses, synthesis, DecisionMethod::MajorityVoting, |_| None)
    }

    fn project(
        responses: &ResponseSet,
        synthesis: &SynthesisReport,
        method: DecisionMethod,
        weight_for: impl Fn(PersonaRole) -> Option<f64>,
    ) -> Self {
        let mut breakdown = BTreeMap::new();
        for role in PersonaRole::all() {
            let response = responses.get(role).unwrap_or_default();
            breakdown.insert(
                role.alias().to_string(),
                WeightEntry {
                    weight: weight_for(role),
                    response_preview: truncate_preview(response),
                },
            );
        }

        Self {
            method,
            synthesis_summary: synthesis.summary.clone(),
            recommended_options: synthesis.final_options.clone(),
            key_agreements: synthesis.agreements.clone(),
            key_conflicts: synthesis.conflicts.clone(),
            identified_blind_spots: synthesis.blind_spots.clone(),
            breakdown,
        }
    }
}

/// Truncate a response to [`PREVIEW_CHARS`] characters, appending an ellipsis
fn truncate_preview(response: &str) -> String {
    if response.chars().count() <= PREVIEW_CHARS {
        response.to_string()
    } else {
        let truncated: String = response.chars().take(PREVIEW_CHARS).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> (ResponseSet, SynthesisReport) {
        let mut responses = ResponseSet::new();
        for role in PersonaRole::all() {
            responses.insert(role, format!("{} take on the launch", role.alias()));
        }
        let synthesis = SynthesisReport {
            summary: "Mixed but leaning launch".to_string(),
            agreements: vec!["timeline is tight".to_string()],
            conflicts: vec!["scope of v1".to_string()],
            blind_spots: vec!["support load".to_string()],
            final_options: vec!["launch in 8 weeks".to_string(), "phased rollout".to_string()],
        };
        (responses, synthesis)
    }

    #[test]
    fn test_weighted_carries_configured_weights() {
        let (responses, synthesis) = inputs();
        let decision = FinalDecision::weighted(&responses, &PersonaWeights::default(), &synthesis);

        assert_eq!(decision.method, DecisionMethod::WeightedModel);
        assert_eq!(decision.breakdown["Elon"].weight, Some(0.35));
        assert_eq!(decision.breakdown["Ray"].weight, Some(0.15));
        assert_eq!(decision.breakdown.len(), 4);
    }

    #[test]
    fn test_majority_omits_weights() {
        let (responses, synthesis) = inputs();
        let decision = FinalDecision::majority(&responses, &synthesis);

        assert_eq!(decision.method, DecisionMethod::MajorityVoting);
        assert!(decision.breakdown.values().all(|entry| entry.weight.is_none()));
        assert_eq!(decision.breakdown.len(), 4);
    }

    #[test]
    fn test_both_strategies_copy_options_verbatim() {
        let (responses, synthesis) = inputs();
        let weighted = FinalDecision::weighted(&responses, &PersonaWeights::default(), &synthesis);
        let majority = FinalDecision::majority(&responses, &synthesis);

        assert_eq!(weighted.recommended_options, synthesis.final_options);
        assert_eq!(majority.recommended_options, synthesis.final_options);
        assert_eq!(weighted.synthesis_summary, majority.synthesis_summary);
        assert_eq!(weighted.key_conflicts, majority.key_conflicts);
    }

    #[test]
    fn test_breakdown_covers_all_roles_with_error_placeholders() {
        let mut responses = ResponseSet::new();
        responses.insert(PersonaRole::Visionary, "Go.");
        responses.insert_error(PersonaRole::Strategist, "timeout");
        responses.insert(PersonaRole::Operator, "Plan first.");
        responses.insert_error(PersonaRole::RiskAnalyst, "connection refused");

        let decision = FinalDecision::majority(&responses, &SynthesisReport::degraded("raw"));
        assert_eq!(decision.breakdown.len(), 4);
        assert_eq!(decision.breakdown["Sam"].response_preview, "Error: timeout");
    }

    #[test]
    fn test_preview_truncation() {
        let long = "x".repeat(250);
        let preview = truncate_preview(&long);
        assert_eq!(preview.chars().count(), 203);
        assert!(preview.ends_with("..."));

        assert_eq!(truncate_preview("short"), "short");
    }
}

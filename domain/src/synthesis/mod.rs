//! Structured synthesis report
//!
//! The synthesis step condenses all four persona responses into a fixed
//! shape: summary, agreements, conflicts, blind spots and final options.
//! When structured extraction fails the report degrades to raw text with
//! empty lists; it never becomes an error.

use serde::{Deserialize, Serialize};

/// Fixed-shape synthesis of the four persona responses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisReport {
    /// Comprehensive summary of all perspectives
    pub summary: String,
    /// Key points where personas agree
    pub agreements: Vec<String>,
    /// Key points where personas disagree
    pub conflicts: Vec<String>,
    /// Areas no persona adequately addressed
    pub blind_spots: Vec<String>,
    /// Recommended 2-3 options or paths forward
    pub final_options: Vec<String>,
}

impl SynthesisReport {
    /// Fallback report when structured output is unavailable.
    ///
    /// Carries whatever raw text the model produced in `summary`, or a fixed
    /// placeholder when there is none.
    pub fn degraded(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self {
            summary: if raw.trim().is_empty() {
                "Synthesis unavailable".to_string()
            } else {
                raw
            },
            ..Default::default()
        }
    }

    /// Whether this report carries any structured fields
    pub fn is_structured(&self) -> bool {
        !self.agreements.is_empty()
            || !self.conflicts.is_empty()
            || !self.blind_spots.is_empty()
            || !self.final_options.is_empty()
    }
}

//! Problem statement value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The problem statement a council session analyzes (Value Object)
///
/// Set once at session start and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem(String);

impl Problem {
    /// Create a problem statement, rejecting empty input
    pub fn new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::EmptyProblem);
        }
        Ok(Self(content))
    }

    /// The raw problem text
    pub fn content(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for Problem {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Problem::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_rejects_empty() {
        assert!(Problem::new("").is_err());
        assert!(Problem::new("   \n  ").is_err());
    }

    #[test]
    fn test_problem_keeps_content() {
        let problem = Problem::new("Should we launch in 8 weeks?").unwrap();
        assert_eq!(problem.content(), "Should we launch in 8 weeks?");
    }
}

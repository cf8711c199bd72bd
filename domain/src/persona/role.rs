//! Persona role value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The four council personas (Value Object)
///
/// Each role carries a stable internal key (`as_str`) and a display alias
/// (`alias`) used in the group chat. Both resolve back to the role via
/// `FromStr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PersonaRole {
    /// First-principles thinking, bold direction ("Elon")
    Visionary,
    /// Market positioning and sequencing ("Sam")
    Strategist,
    /// Execution, process and people ("Sheryl")
    Operator,
    /// Failure modes and downside protection ("Ray")
    RiskAnalyst,
}

impl PersonaRole {
    /// Stable internal role key
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonaRole::Visionary => "Visionary",
            PersonaRole::Strategist => "Strategist",
            PersonaRole::Operator => "Operator",
            PersonaRole::RiskAnalyst => "Risk Analyst",
        }
    }

    /// Casual display alias used in the chat transcript
    pub fn alias(&self) -> &'static str {
        match self {
            PersonaRole::Visionary => "Elon",
            PersonaRole::Strategist => "Sam",
            PersonaRole::Operator => "Sheryl",
            PersonaRole::RiskAnalyst => "Ray",
        }
    }

    /// All personas in the declared dispatch order.
    ///
    /// This order is the one round results are applied in, so transcript
    /// replay is deterministic regardless of completion order.
    pub fn all() -> [PersonaRole; 4] {
        [
            PersonaRole::Visionary,
            PersonaRole::Strategist,
            PersonaRole::Operator,
            PersonaRole::RiskAnalyst,
        ]
    }

    /// Resolve a role key or display alias to a role
    pub fn resolve(s: &str) -> Option<PersonaRole> {
        PersonaRole::all()
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s) || role.alias().eq_ignore_ascii_case(s))
    }
}

impl std::fmt::Display for PersonaRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PersonaRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PersonaRole::resolve(s).ok_or_else(|| DomainError::UnknownPersona(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_alias_table_is_bidirectional() {
        for role in PersonaRole::all() {
            assert_eq!(PersonaRole::resolve(role.as_str()), Some(role));
            assert_eq!(PersonaRole::resolve(role.alias()), Some(role));
        }
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(PersonaRole::resolve("elon"), Some(PersonaRole::Visionary));
        assert_eq!(PersonaRole::resolve("risk analyst"), Some(PersonaRole::RiskAnalyst));
    }

    #[test]
    fn test_resolve_rejects_unknown() {
        assert_eq!(PersonaRole::resolve("Greg"), None);
        assert!("Greg".parse::<PersonaRole>().is_err());
    }

    #[test]
    fn test_dispatch_order_is_stable() {
        let order: Vec<&str> = PersonaRole::all().iter().map(|r| r.alias()).collect();
        assert_eq!(order, vec!["Elon", "Sam", "Sheryl", "Ray"]);
    }
}

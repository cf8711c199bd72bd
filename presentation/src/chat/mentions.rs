//! `@Name` mention parsing for chat input

use council_domain::PersonaRole;
use regex::Regex;
use std::sync::OnceLock;

fn mention_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"@([A-Za-z]+)").unwrap())
}

/// Personas addressed by `@Name` tags in a chat message
///
/// Accepts both aliases (`@Sam`) and role names (`@Strategist`), case
/// insensitively. Unknown names are ignored; duplicates are collapsed by
/// the debate use case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mentions {
    pub roles: Vec<PersonaRole>,
    pub unknown: Vec<String>,
}

impl Mentions {
    /// Extract mentions from a raw chat line
    pub fn parse(input: &str) -> Self {
        let mut roles = Vec::new();
        let mut unknown = Vec::new();
        for capture in mention_pattern().captures_iter(input) {
            let name = &capture[1];
            match PersonaRole::resolve(name) {
                Some(role) => roles.push(role),
                None => unknown.push(name.to_string()),
            }
        }
        Self { roles, unknown }
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_and_role_names_resolve() {
        let mentions = Mentions::parse("@Sam and @visionary, pick a launch date");
        assert_eq!(
            mentions.roles,
            vec![PersonaRole::Strategist, PersonaRole::Visionary]
        );
        assert!(mentions.unknown.is_empty());
    }

    #[test]
    fn test_unknown_names_are_collected_not_dropped() {
        let mentions = Mentions::parse("@Bob what do you think?");
        assert!(mentions.is_empty());
        assert_eq!(mentions.unknown, vec!["Bob"]);
    }

    #[test]
    fn test_plain_text_has_no_mentions() {
        let mentions = Mentions::parse("no tags here, just an email a@b");
        assert!(mentions.is_empty());
    }
}

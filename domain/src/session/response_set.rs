//! Per-persona response store

use crate::persona::PersonaRole;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Responses from the broadcast step, one per persona.
///
/// The store is canonical per role; lookups accept either the internal role
/// key or the display alias and resolve to the same value, so there are
/// never divergent copies. A failed persona holds an `"Error: <message>"`
/// placeholder rather than being absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseSet {
    responses: BTreeMap<PersonaRole, String>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a persona's response (overwrites any earlier value)
    pub fn insert(&mut self, role: PersonaRole, response: impl Into<String>) {
        self.responses.insert(role, response.into());
    }

    /// Record a persona failure as an inline error placeholder
    pub fn insert_error(&mut self, role: PersonaRole, message: &str) {
        self.responses.insert(role, format!("Error: {message}"));
    }

    /// Look up by role
    pub fn get(&self, role: PersonaRole) -> Option<&str> {
        self.responses.get(&role).map(String::as_str)
    }

    /// Look up by role key or display alias
    pub fn get_by_name(&self, name: &str) -> Option<&str> {
        PersonaRole::resolve(name).and_then(|role| self.get(role))
    }

    /// Whether every persona has a response (placeholders included)
    pub fn is_complete(&self) -> bool {
        PersonaRole::all().iter().all(|role| self.responses.contains_key(role))
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// Iterate responses in dispatch order
    pub fn iter(&self) -> impl Iterator<Item = (PersonaRole, &str)> {
        PersonaRole::all()
            .into_iter()
            .filter_map(|role| self.get(role).map(|response| (role, response)))
    }

    /// Dual-keyed view: every response under both its role key and its alias.
    ///
    /// This is the convenience shape downstream consumers (synthesis, JSON
    /// output) expect: 8 keys when all four personas have responded.
    pub fn dual_keyed(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        for (role, response) in self.iter() {
            map.insert(role.as_str().to_string(), response.to_string());
            map.insert(role.alias().to_string(), response.to_string());
        }
        map
    }
}

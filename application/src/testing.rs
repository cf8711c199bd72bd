//! Scripted test doubles for the gateway and synthesizer ports.

use crate::ports::persona_gateway::{GatewayError, PersonaGateway};
use crate::ports::synthesizer::Synthesizer;
use async_trait::async_trait;
use council_domain::{PersonaRole, SynthesisReport};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

/// One scripted persona call outcome
#[derive(Debug, Clone)]
pub enum Script {
    Reply(String),
    Fail(String),
    /// Reply after a simulated delay (paused-clock tests auto-advance)
    DelayedReply(Duration, String),
    /// Never completes within any reasonable timeout
    Hang,
}

impl Script {
    pub fn reply(text: impl Into<String>) -> Self {
        Script::Reply(text.into())
    }

    pub fn delayed(secs: u64, text: impl Into<String>) -> Self {
        Script::DelayedReply(Duration::from_secs(secs), text.into())
    }

    async fn run(self) -> Result<String, GatewayError> {
        match self {
            Script::Reply(text) => Ok(text),
            Script::Fail(message) => Err(GatewayError::RequestFailed(message)),
            Script::DelayedReply(delay, text) => {
                tokio::time::sleep(delay).await;
                Ok(text)
            }
            Script::Hang => {
                tokio::time::sleep(Duration::from_secs(86_400)).await;
                Ok("too late".to_string())
            }
        }
    }
}

/// Gateway double with per-role scripted outcomes.
///
/// Chat scripts are consumed in order per role; when a role's queue is empty
/// a default reply is produced. Contexts received by `chat_response` are
/// recorded so tests can assert snapshot isolation.
#[derive(Default)]
pub struct MockGateway {
    analyze_scripts: Mutex<HashMap<PersonaRole, Script>>,
    chat_scripts: Mutex<HashMap<PersonaRole, VecDeque<Script>>>,
    pub seen_contexts: Mutex<Vec<(PersonaRole, String)>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_analyze(self, role: PersonaRole, script: Script) -> Self {
        self.analyze_scripts.lock().unwrap().insert(role, script);
        self
    }

    pub fn with_chat(self, role: PersonaRole, script: Script) -> Self {
        self.chat_scripts
            .lock()
            .unwrap()
            .entry(role)
            .or_default()
            .push_back(script);
        self
    }
}

#[async_trait]
impl PersonaGateway for MockGateway {
    async fn analyze(&self, role: PersonaRole, _problem: &str) -> Result<String, GatewayError> {
        let script = self
            .analyze_scripts
            .lock()
            .unwrap()
            .get(&role)
            .cloned()
            .unwrap_or_else(|| Script::Reply(format!("{} analysis", role.alias())));
        script.run().await
    }

    async fn chat_response(
        &self,
        role: PersonaRole,
        _message: &str,
        context: &str,
    ) -> Result<String, GatewayError> {
        self.seen_contexts
            .lock()
            .unwrap()
            .push((role, context.to_string()));

        let script = self
            .chat_scripts
            .lock()
            .unwrap()
            .get_mut(&role)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Script::Reply(format!("{} reply", role.alias())));
        script.run().await
    }

    async fn critique(
        &self,
        role: PersonaRole,
        _problem: &str,
        other_responses: &[(String, String)],
    ) -> Result<String, GatewayError> {
        Ok(format!(
            "{} critiques {} responses",
            role.alias(),
            other_responses.len()
        ))
    }
}

/// Synthesizer double returning a fixed report or a fixed failure
pub struct MockSynthesizer {
    outcome: Mutex<Option<Result<SynthesisReport, GatewayError>>>,
}

impl MockSynthesizer {
    pub fn returning(report: SynthesisReport) -> Self {
        Self {
            outcome: Mutex::new(Some(Ok(report))),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Mutex::new(Some(Err(GatewayError::RequestFailed(message.into())))),
        }
    }

    pub fn sample_report() -> SynthesisReport {
        SynthesisReport {
            summary: "Leaning toward a phased launch".to_string(),
            agreements: vec!["timeline is aggressive".to_string()],
            conflicts: vec!["full launch vs. beta".to_string()],
            blind_spots: vec!["support capacity".to_string()],
            final_options: vec!["launch in 8 weeks".to_string(), "beta first".to_string()],
        }
    }
}

#[async_trait]
impl Synthesizer for MockSynthesizer {
    async fn synthesize(
        &self,
        _problem: &str,
        _responses: &[(String, String)],
    ) -> Result<SynthesisReport, GatewayError> {
        self.outcome
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(Self::sample_report()))
    }
}

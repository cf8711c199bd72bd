//! Full council protocol (Orchestrator)
//!
//! Sequences the five protocol steps over a [`ConversationState`]:
//! Broadcast, Parallel Responses, Debate (open discussion), Synthesis,
//! Decision. Each step is independently invokable for callers that want
//! step-level control; `run()` executes the whole protocol.
//!
//! Per-persona failures never escape a step: a failed broadcast call leaves
//! an `"Error: <message>"` placeholder, and a failed synthesis degrades to
//! an unstructured report. Only configuration-level problems (checked before
//! a session starts) are fatal.

use crate::config::SessionConfig;
use crate::ports::persona_gateway::{GatewayError, PersonaGateway};
use crate::ports::progress::{CouncilProgress, NoProgress};
use crate::ports::synthesizer::Synthesizer;
use council_domain::{
    ChatMessage, ConversationState, DecisionMethod, DomainError, FinalDecision, PersonaRole,
    Problem, PromptTemplate, ProtocolStep, SynthesisReport,
};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Errors that can escape the council protocol
#[derive(Error, Debug)]
pub enum RunCouncilError {
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Use case for running the five-step council protocol
pub struct RunCouncilUseCase<G: PersonaGateway + 'static, S: Synthesizer + 'static> {
    gateway: Arc<G>,
    synthesizer: Arc<S>,
    config: SessionConfig,
}

impl<G: PersonaGateway + 'static, S: Synthesizer + 'static> RunCouncilUseCase<G, S> {
    pub fn new(gateway: Arc<G>, synthesizer: Arc<S>, config: SessionConfig) -> Self {
        Self {
            gateway,
            synthesizer,
            config,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Execute the full protocol with default (no-op) progress
    pub async fn run(&self, problem: Problem) -> Result<ConversationState, RunCouncilError> {
        self.run_with_progress(problem, &NoProgress).await
    }

    /// Execute the full protocol with progress callbacks
    pub async fn run_with_progress(
        &self,
        problem: Problem,
        progress: &dyn CouncilProgress,
    ) -> Result<ConversationState, RunCouncilError> {
        let mut state = self.broadcast(problem);
        self.parallel_responses(&mut state, progress).await?;
        if self.config.debate_rounds > 0 {
            self.open_discussion(&mut state, progress).await?;
        } else {
            state.advance_to(ProtocolStep::Debate)?;
        }
        self.synthesize(&mut state, progress).await?;
        self.decide(&mut state)?;
        info!("Council protocol complete");
        Ok(state)
    }

    /// Step 1: create a fresh session and put the problem on the transcript.
    pub fn broadcast(&self, problem: Problem) -> ConversationState {
        info!("Broadcasting problem to all {} personas", PersonaRole::all().len());
        let mut state = ConversationState::new(problem);
        let message = ChatMessage::from_user(state.problem().content().to_string());
        state.append_message(message);
        state
    }

    /// Step 2: all personas analyze the problem concurrently.
    ///
    /// Every role ends up with a response; a failed or timed-out call leaves
    /// an inline error placeholder instead. Responses also land on the
    /// transcript, in dispatch order, as the opening of the group chat.
    pub async fn parallel_responses(
        &self,
        state: &mut ConversationState,
        progress: &dyn CouncilProgress,
    ) -> Result<(), RunCouncilError> {
        let step = ProtocolStep::ParallelResponses;
        progress.on_step_start(step, PersonaRole::all().len());

        let problem = state.problem().content().to_string();
        let mut join_set = JoinSet::new();

        for role in PersonaRole::all() {
            let gateway = Arc::clone(&self.gateway);
            let problem = problem.clone();
            let call_timeout = self.config.call_timeout;

            join_set.spawn(async move {
                let started = tokio::time::Instant::now();
                let result = tokio::time::timeout(call_timeout, gateway.analyze(role, &problem))
                    .await
                    .unwrap_or(Err(GatewayError::Timeout));
                (role, result, started.elapsed())
            });
        }

        let mut outcomes: HashMap<PersonaRole, Result<String, GatewayError>> = HashMap::new();
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((role, result, elapsed)) => {
                    debug!("{} finished analysis in {:?}", role.alias(), elapsed);
                    progress.on_persona_complete(step, role, result.is_ok(), elapsed);
                    outcomes.insert(role, result);
                }
                Err(error) => {
                    warn!("Task join error: {}", error);
                }
            }
        }

        // Apply after all calls have joined; workers never touch the state.
        for role in PersonaRole::all() {
            match outcomes.remove(&role) {
                Some(Ok(response)) => state.responses.insert(role, response),
                Some(Err(error)) => {
                    warn!("{} failed to analyze: {}", role.alias(), error);
                    state.responses.insert_error(role, &error.to_string());
                }
                None => state.responses.insert_error(role, "task aborted"),
            }
        }
        for role in PersonaRole::all() {
            if let Some(response) = state.responses.get(role) {
                let message = ChatMessage::from_persona(role, response.to_string());
                progress.on_message(&message);
                state.append_message(message);
            }
        }

        state.advance_to(step)?;
        progress.on_step_complete(step);
        Ok(())
    }

    /// Step 3: fixed rounds of open discussion, no skip option.
    ///
    /// Personas reply in dispatch order within a round, each seeing the
    /// replies made earlier in the same round. A failed call lands on the
    /// transcript as an error line so the others can keep the thread going.
    pub async fn open_discussion(
        &self,
        state: &mut ConversationState,
        progress: &dyn CouncilProgress,
    ) -> Result<(), RunCouncilError> {
        let step = ProtocolStep::Debate;
        info!("Open discussion: {} round(s)", self.config.debate_rounds);

        for round in 0..self.config.debate_rounds {
            debug!("Discussion round {}/{}", round + 1, self.config.debate_rounds);
            progress.on_step_start(step, PersonaRole::all().len());

            for role in PersonaRole::all() {
                let context = council_domain::chat::context_window(state.transcript());
                let prompt = PromptTemplate::discussion(&context);
                let started = tokio::time::Instant::now();
                let result = tokio::time::timeout(
                    self.config.call_timeout,
                    self.gateway.chat_response(role, &prompt, &context),
                )
                .await
                .unwrap_or(Err(GatewayError::Timeout));

                progress.on_persona_complete(step, role, result.is_ok(), started.elapsed());
                let text = match result {
                    Ok(reply) => reply,
                    Err(error) => {
                        warn!("{} failed in discussion: {}", role.alias(), error);
                        format!("Error: {error}")
                    }
                };
                let message = ChatMessage::from_persona(role, text);
                progress.on_message(&message);
                state.append_message(message);
            }

            progress.on_step_complete(step);
        }

        state.advance_to(step)?;
        Ok(())
    }

    /// Step 4: structured synthesis over the per-role responses.
    ///
    /// A synthesis failure degrades to an unstructured report; it never
    /// propagates.
    pub async fn synthesize(
        &self,
        state: &mut ConversationState,
        progress: &dyn CouncilProgress,
    ) -> Result<(), RunCouncilError> {
        let step = ProtocolStep::Synthesis;
        progress.on_step_start(step, 1);

        let responses: Vec<(String, String)> = state
            .responses
            .iter()
            .map(|(role, response)| (role.as_str().to_string(), response.to_string()))
            .collect();

        let report = match self
            .synthesizer
            .synthesize(state.problem().content(), &responses)
            .await
        {
            Ok(report) => report,
            Err(error) => {
                warn!("Synthesis failed, degrading: {}", error);
                SynthesisReport::degraded("")
            }
        };

        state.set_synthesis(report).map_err(RunCouncilError::Domain)?;
        state.advance_to(step)?;
        progress.on_step_complete(step);
        Ok(())
    }

    /// Step 5: project the configured decision strategy. Terminal.
    pub fn decide(&self, state: &mut ConversationState) -> Result<(), RunCouncilError> {
        let synthesis = state.synthesis().cloned().unwrap_or_default();
        let decision = match self.config.method {
            DecisionMethod::WeightedModel => {
                FinalDecision::weighted(&state.responses, &self.config.weights, &synthesis)
            }
            DecisionMethod::MajorityVoting => FinalDecision::majority(&state.responses, &synthesis),
        };

        state.set_decision(decision)?;
        state.advance_to(ProtocolStep::Decision)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockGateway, MockSynthesizer, Script};

    fn problem() -> Problem {
        Problem::new("Should we launch in 8 weeks?").unwrap()
    }

    fn use_case(
        gateway: MockGateway,
        synthesizer: MockSynthesizer,
        config: SessionConfig,
    ) -> RunCouncilUseCase<MockGateway, MockSynthesizer> {
        RunCouncilUseCase::new(Arc::new(gateway), Arc::new(synthesizer), config)
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_protocol_reaches_decision() {
        let council = use_case(
            MockGateway::new(),
            MockSynthesizer::returning(MockSynthesizer::sample_report()),
            SessionConfig::default(),
        );

        let state = council.run(problem()).await.unwrap();

        assert_eq!(state.step(), ProtocolStep::Decision);
        assert!(state.responses.is_complete());
        let decision = state.decision().unwrap();
        assert_eq!(decision.method, DecisionMethod::WeightedModel);
        assert_eq!(
            decision.recommended_options,
            MockSynthesizer::sample_report().final_options
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_responses_complete_even_when_every_call_fails() {
        let mut gateway = MockGateway::new();
        for role in PersonaRole::all() {
            gateway = gateway.with_analyze(role, Script::Fail("backend down".to_string()));
        }
        let council = use_case(
            gateway,
            MockSynthesizer::returning(MockSynthesizer::sample_report()),
            SessionConfig::default().with_debate_rounds(0),
        );

        let state = council.run(problem()).await.unwrap();

        assert!(state.responses.is_complete());
        let dual = state.responses.dual_keyed();
        assert_eq!(dual.len(), 8);
        assert!(dual.values().all(|v| v.starts_with("Error: ")));
        // The protocol still produces a decision over the placeholders.
        assert!(state.decision().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_broadcast_timeout_becomes_placeholder() {
        let gateway = MockGateway::new().with_analyze(PersonaRole::Strategist, Script::Hang);
        let council = use_case(
            gateway,
            MockSynthesizer::returning(MockSynthesizer::sample_report()),
            SessionConfig::default().with_debate_rounds(0),
        );

        let state = council.run(problem()).await.unwrap();

        assert_eq!(
            state.responses.get(PersonaRole::Strategist),
            Some("Error: request timed out")
        );
        // Role key and alias resolve to the same placeholder.
        assert_eq!(
            state.responses.get_by_name("Sam"),
            state.responses.get_by_name("Strategist")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_synthesis_failure_degrades_instead_of_raising() {
        let council = use_case(
            MockGateway::new(),
            MockSynthesizer::failing("no structured output"),
            SessionConfig::default().with_debate_rounds(0),
        );

        let state = council.run(problem()).await.unwrap();

        let synthesis = state.synthesis().unwrap();
        assert_eq!(synthesis.summary, "Synthesis unavailable");
        assert!(synthesis.final_options.is_empty());
        assert!(state.decision().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_majority_config_produces_unweighted_decision() {
        let council = use_case(
            MockGateway::new(),
            MockSynthesizer::returning(MockSynthesizer::sample_report()),
            SessionConfig::default()
                .with_method(DecisionMethod::MajorityVoting)
                .with_debate_rounds(0),
        );

        let state = council.run(problem()).await.unwrap();
        let decision = state.decision().unwrap();

        assert_eq!(decision.method, DecisionMethod::MajorityVoting);
        assert!(decision.breakdown.values().all(|entry| entry.weight.is_none()));
        assert_eq!(
            decision.recommended_options,
            MockSynthesizer::sample_report().final_options
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_open_discussion_adds_fixed_rounds() {
        let council = use_case(
            MockGateway::new(),
            MockSynthesizer::returning(MockSynthesizer::sample_report()),
            SessionConfig::default().with_debate_rounds(2),
        );

        let state = council.run(problem()).await.unwrap();

        // 1 user message + 4 broadcast replies + 2 rounds * 4 discussion replies
        assert_eq!(state.transcript().len(), 1 + 4 + 8);
    }

    #[tokio::test(start_paused = true)]
    async fn test_steps_are_independently_invokable() {
        let council = use_case(
            MockGateway::new(),
            MockSynthesizer::returning(MockSynthesizer::sample_report()),
            SessionConfig::default(),
        );

        let mut state = council.broadcast(problem());
        assert_eq!(state.step(), ProtocolStep::Broadcast);

        council.parallel_responses(&mut state, &NoProgress).await.unwrap();
        assert_eq!(state.step(), ProtocolStep::ParallelResponses);

        council.synthesize(&mut state, &NoProgress).await.unwrap();
        assert_eq!(state.step(), ProtocolStep::Synthesis);

        council.decide(&mut state).unwrap();
        assert_eq!(state.step(), ProtocolStep::Decision);
    }
}

//! One round of skip-enabled group chat
//!
//! All four personas are dispatched concurrently against the same context
//! snapshot: no persona sees another's reply from the same round. Results
//! are applied to the transcript in the declared persona order, not arrival
//! order, so replay is deterministic given identical persona outputs.

use crate::ports::persona_gateway::{GatewayError, PersonaGateway};
use crate::ports::progress::CouncilProgress;
use council_domain::{
    chat, ChatMessage, ConversationState, PersonaRole, PromptTemplate, ProtocolStep, Speaker,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// Runs one group-chat round (Turn Scheduler)
pub struct RunRoundUseCase<G: PersonaGateway + 'static> {
    gateway: Arc<G>,
    call_timeout: Duration,
}

impl<G: PersonaGateway + 'static> RunRoundUseCase<G> {
    pub fn new(gateway: Arc<G>, call_timeout: Duration) -> Self {
        Self {
            gateway,
            call_timeout,
        }
    }

    /// Run one round and append the contributions to the transcript.
    ///
    /// In the first round every persona answers the most recent user message;
    /// in later rounds the prompt offers the skip token. Per-persona failures
    /// and timeouts are contained: the round always completes.
    pub async fn execute(
        &self,
        state: &mut ConversationState,
        is_first_round: bool,
        progress: &dyn CouncilProgress,
    ) -> Vec<ChatMessage> {
        let step = ProtocolStep::Debate;
        progress.on_step_start(step, PersonaRole::all().len());

        // Snapshot the context once; every persona this round sees the same view.
        let context = chat::context_window(state.transcript());
        let prompt = if is_first_round {
            self.last_user_message(state)
        } else {
            PromptTemplate::optional_round(&context)
        };

        let outcomes = self.dispatch(step, &prompt, &context, progress).await;

        // Apply in dispatch order regardless of completion order.
        let mut new_messages = Vec::new();
        for role in PersonaRole::all() {
            match outcomes.get(&role) {
                Some(Ok(reply)) if chat::is_skip(reply) => {
                    debug!("{} chose not to respond", role.alias());
                    progress.on_persona_skipped(role);
                }
                Some(Ok(reply)) => {
                    let message = ChatMessage::from_persona(role, reply.clone());
                    progress.on_message(&message);
                    state.append_message(message.clone());
                    new_messages.push(message);
                }
                Some(Err(error)) => {
                    warn!("{} failed this round: {}", role.alias(), error);
                }
                None => {}
            }
        }

        progress.on_step_complete(step);
        new_messages
    }

    /// Dispatch all personas concurrently with a per-call timeout.
    async fn dispatch(
        &self,
        step: ProtocolStep,
        prompt: &str,
        context: &str,
        progress: &dyn CouncilProgress,
    ) -> HashMap<PersonaRole, Result<String, GatewayError>> {
        let mut join_set = JoinSet::new();

        for role in PersonaRole::all() {
            let gateway = Arc::clone(&self.gateway);
            let prompt = prompt.to_string();
            let context = context.to_string();
            let call_timeout = self.call_timeout;

            join_set.spawn(async move {
                let started = tokio::time::Instant::now();
                let result =
                    tokio::time::timeout(call_timeout, gateway.chat_response(role, &prompt, &context))
                        .await
                        .unwrap_or(Err(GatewayError::Timeout));
                (role, result, started.elapsed())
            });
        }

        let mut outcomes = HashMap::new();
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((role, result, elapsed)) => {
                    progress.on_persona_complete(step, role, result.is_ok(), elapsed);
                    outcomes.insert(role, result);
                }
                Err(error) => {
                    warn!("Task join error: {}", error);
                }
            }
        }
        outcomes
    }

    /// The most recent user message, which the first round responds to.
    fn last_user_message(&self, state: &ConversationState) -> String {
        state
            .transcript()
            .iter()
            .rev()
            .find(|msg| msg.speaker == Speaker::User)
            .map(|msg| msg.text.clone())
            .unwrap_or_else(|| state.problem().content().to_string())
    }
}

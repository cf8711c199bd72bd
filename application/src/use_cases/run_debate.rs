//! Bounded, addressed debate (Debate Controller)
//!
//! An explicitly addressed subset of personas discusses a sub-topic for up
//! to `max_exchanges` exchanges. Within an exchange the addressed personas
//! respond concurrently to the same refreshed context; after each exchange
//! the replies are scanned for closing signals and the debate stops early
//! once one appears. The scan runs only after the exchange has fully
//! completed, so a signal never cuts an exchange short mid-flight.

use crate::ports::persona_gateway::{GatewayError, PersonaGateway};
use crate::ports::progress::CouncilProgress;
use council_domain::{chat, ChatMessage, ConversationState, PersonaRole, PromptTemplate, ProtocolStep};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Runs a tagged debate among an addressed subset of personas
pub struct RunDebateUseCase<G: PersonaGateway + 'static> {
    gateway: Arc<G>,
    call_timeout: Duration,
    max_exchanges: usize,
}

impl<G: PersonaGateway + 'static> RunDebateUseCase<G> {
    pub fn new(gateway: Arc<G>, call_timeout: Duration, max_exchanges: usize) -> Self {
        Self {
            gateway,
            call_timeout,
            max_exchanges,
        }
    }

    /// Run the debate and append all contributions to the transcript.
    ///
    /// The caller appends the user's sub-topic message to the transcript
    /// before invoking this. An empty address set is a no-op, never an
    /// error.
    pub async fn execute(
        &self,
        state: &mut ConversationState,
        addressed: &[PersonaRole],
        user_message: &str,
        progress: &dyn CouncilProgress,
    ) -> Vec<ChatMessage> {
        let participants = dedup(addressed);
        if participants.is_empty() {
            debug!("Debate invoked with no addressed personas; nothing to do");
            return Vec::new();
        }

        let step = ProtocolStep::Debate;
        let mut debate_messages = Vec::new();

        for exchange in 0..self.max_exchanges {
            progress.on_step_start(step, participants.len());

            // Refresh the window so later exchanges see earlier ones.
            let context = chat::context_window(state.transcript());
            let outcomes = self
                .dispatch_exchange(step, &participants, user_message, &context, exchange, progress)
                .await;

            let mut exchange_messages = Vec::new();
            for role in &participants {
                match outcomes.get(role) {
                    Some(Ok(reply)) => {
                        let message = ChatMessage::from_persona(*role, reply.clone());
                        progress.on_message(&message);
                        state.append_message(message.clone());
                        exchange_messages.push(message);
                    }
                    Some(Err(error)) => {
                        warn!("{} failed in exchange {}: {}", role.alias(), exchange + 1, error);
                    }
                    None => {}
                }
            }

            progress.on_step_complete(step);

            let closing = exchange_messages
                .iter()
                .any(|msg| chat::contains_closing_signal(&msg.text));
            debate_messages.extend(exchange_messages);

            if closing {
                info!("Topic appears resolved after {} exchange(s)", exchange + 1);
                break;
            }
        }

        debate_messages
    }

    async fn dispatch_exchange(
        &self,
        step: ProtocolStep,
        participants: &[PersonaRole],
        user_message: &str,
        context: &str,
        exchange: usize,
        progress: &dyn CouncilProgress,
    ) -> HashMap<PersonaRole, Result<String, GatewayError>> {
        let mut join_set = JoinSet::new();

        for &role in participants {
            let gateway = Arc::clone(&self.gateway);
            let prompt =
                PromptTemplate::debate(role, user_message, context, exchange, self.max_exchanges);
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
}

/// Drop duplicate addresses while keeping the given order
fn dedup(addressed: &[PersonaRole]) -> Vec<PersonaRole> {
    let mut seen = Vec::new();
    for &role in addressed {
        if !seen.contains(&role) {
            seen.push(role);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use crate::testing::{MockGateway, Script};
    use council_domain::Problem;

    const ELON_RAY: [PersonaRole; 2] = [PersonaRole::Visionary, PersonaRole::RiskAnalyst];

    fn state() -> ConversationState {
        let mut state = ConversationState::new(Problem::new("Launch timing").unwrap());
        state.append_message(ChatMessage::from_user("Pick a launch date"));
        state
    }

    /// A reply that trips none of the closing-signal phrases
    fn neutral(text: &str) -> Script {
        Script::reply(text)
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_address_set_is_a_noop() {
        let gateway = Arc::new(MockGateway::new());
        let use_case = RunDebateUseCase::new(gateway, Duration::from_secs(60), 3);
        let mut state = state();
        let before = state.transcript().len();

        let messages = use_case.execute(&mut state, &[], "anything", &NoProgress).await;

        assert!(messages.is_empty());
        assert_eq!(state.transcript().len(), before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_runs_all_exchanges_without_closing_signal() {
        let mut gateway = MockGateway::new();
        for _ in 0..3 {
            gateway = gateway
                .with_chat(PersonaRole::Visionary, neutral("More data needed."))
                .with_chat(PersonaRole::RiskAnalyst, neutral("Still worried."));
        }
        let use_case = RunDebateUseCase::new(Arc::new(gateway), Duration::from_secs(60), 3);
        let mut state = state();

        let messages = use_case
            .execute(&mut state, &ELON_RAY, "Pick a launch date", &NoProgress)
            .await;

        // 3 exchanges, 2 addressed personas each
        assert_eq!(messages.len(), 6);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_after_exchange_containing_closing_signal() {
        let gateway = MockGateway::new()
            .with_chat(PersonaRole::Visionary, neutral("Eight weeks. Done."))
            .with_chat(PersonaRole::RiskAnalyst, Script::reply("Fine, I agree."));
        let use_case = RunDebateUseCase::new(Arc::new(gateway), Duration::from_secs(60), 3);
        let mut state = state();

        let messages = use_case
            .execute(&mut state, &ELON_RAY, "Pick a launch date", &NoProgress)
            .await;

        // The exchange with the signal still completes in full.
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].speaker.display_name(), "Elon");
        assert_eq!(messages[1].speaker.display_name(), "Ray");
    }

    #[tokio::test(start_paused = true)]
    async fn test_only_addressed_personas_speak() {
        let gateway = Arc::new(MockGateway::new());
        let use_case = RunDebateUseCase::new(gateway, Duration::from_secs(60), 1);
        let mut state = state();

        let messages = use_case
            .execute(&mut state, &[PersonaRole::Operator], "Staffing plan?", &NoProgress)
            .await;

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].speaker.display_name(), "Sheryl");
    }

    #[tokio::test(start_paused = true)]
    async fn test_duplicate_addresses_collapse() {
        let gateway = Arc::new(MockGateway::new());
        let use_case = RunDebateUseCase::new(gateway, Duration::from_secs(60), 1);
        let mut state = state();

        let messages = use_case
            .execute(
                &mut state,
                &[PersonaRole::Visionary, PersonaRole::Visionary],
                "Once please",
                &NoProgress,
            )
            .await;

        assert_eq!(messages.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_later_exchanges_see_earlier_ones() {
        let gateway = MockGateway::new()
            .with_chat(PersonaRole::Visionary, neutral("First: just ship."))
            .with_chat(PersonaRole::Visionary, neutral("Second round here."));
        let gateway = Arc::new(gateway);
        let use_case = RunDebateUseCase::new(Arc::clone(&gateway), Duration::from_secs(60), 2);
        let mut state = state();

        use_case
            .execute(&mut state, &[PersonaRole::Visionary], "Ship it?", &NoProgress)
            .await;

        let contexts = gateway.seen_contexts.lock().unwrap();
        assert_eq!(contexts.len(), 2);
        assert!(!contexts[0].1.contains("just ship"));
        assert!(contexts[1].1.contains("just ship"));
    }
}

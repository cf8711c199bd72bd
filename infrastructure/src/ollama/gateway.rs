//! Persona gateway backed by Ollama

use crate::config::FileModelsConfig;
use crate::ollama::OllamaClient;
use async_trait::async_trait;
use council_application::{GatewayError, PersonaGateway};
use council_domain::{PersonaRole, PromptTemplate};
use std::sync::Arc;
use tracing::debug;

const PERSONA_TEMPERATURE: f64 = 0.7;

/// Routes each persona to its configured model on one Ollama server
pub struct OllamaPersonaGateway {
    client: Arc<OllamaClient>,
    models: FileModelsConfig,
}

impl OllamaPersonaGateway {
    pub fn new(client: Arc<OllamaClient>, models: FileModelsConfig) -> Self {
        Self { client, models }
    }

    async fn call(&self, role: PersonaRole, user_prompt: &str) -> Result<String, GatewayError> {
        let model = self.models.for_role(role);
        debug!("calling {} ({})", role.alias(), model);
        let reply = self
            .client
            .chat(
                model,
                &PromptTemplate::persona_system(role),
                user_prompt,
                PERSONA_TEMPERATURE,
                false,
            )
            .await?;
        Ok(reply.trim().to_string())
    }
}

#[async_trait]
impl PersonaGateway for OllamaPersonaGateway {
    async fn analyze(&self, role: PersonaRole, problem: &str) -> Result<String, GatewayError> {
        self.call(role, &PromptTemplate::analyze(role, problem)).await
    }

    async fn chat_response(
        &self,
        role: PersonaRole,
        message: &str,
        context: &str,
    ) -> Result<String, GatewayError> {
        let prompt = if context.is_empty() {
            message.to_string()
        } else {
            format!("RECENT CONVERSATION:\n{context}\n\n{message}")
        };
        self.call(role, &prompt).await
    }

    async fn critique(
        &self,
        role: PersonaRole,
        problem: &str,
        other_responses: &[(String, String)],
    ) -> Result<String, GatewayError> {
        self.call(role, &PromptTemplate::critique(role, problem, other_responses))
            .await
    }
}

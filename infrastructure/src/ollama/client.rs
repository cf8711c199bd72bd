//! Minimal Ollama REST client
//!
//! Speaks `/api/chat` (non-streaming) and `/api/tags` (connectivity check).
//! Request timeouts are enforced by the calling use case, not here; the
//! client itself only bounds connection establishment.

use council_application::GatewayError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// One chat message in an Ollama request
#[derive(Debug, Serialize)]
struct RequestMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<RequestMessage<'a>>,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<&'a str>,
    options: ChatOptions,
}

#[derive(Debug, Serialize)]
struct ChatOptions {
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

/// HTTP client for one Ollama server
pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
}

impl OllamaClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Verify the server is reachable.
    ///
    /// This is the session-configuration check: if it fails the whole
    /// session is unusable, so the error is meant to surface to the caller.
    pub async fn check_connectivity(&self) -> Result<(), GatewayError> {
        let url = format!("{}/api/tags", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| GatewayError::ConnectionError(format!("{}: {e}", self.base_url)))?;

        if !response.status().is_success() {
            return Err(GatewayError::ConnectionError(format!(
                "{} returned HTTP {}",
                self.base_url,
                response.status()
            )));
        }
        Ok(())
    }

    /// Send one chat completion and return the reply text.
    ///
    /// `json_format` asks the server to constrain the reply to valid JSON
    /// (used by the synthesis adapter).
    pub async fn chat(
        &self,
        model: &str,
        system_prompt: &str,
        user_prompt: &str,
        temperature: f64,
        json_format: bool,
    ) -> Result<String, GatewayError> {
        let request = ChatRequest {
            model,
            messages: vec![
                RequestMessage {
                    role: "system",
                    content: system_prompt,
                },
                RequestMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            stream: false,
            format: json_format.then_some("json"),
            options: ChatOptions { temperature },
        };

        let url = format!("{}/api/chat", self.base_url);
        debug!("POST {} (model: {})", url, model);

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    GatewayError::ConnectionError(e.to_string())
                } else if e.is_timeout() {
                    GatewayError::Timeout
                } else {
                    GatewayError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::RequestFailed(format!(
                "HTTP {status}: {body}"
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        Ok(parsed.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = OllamaClient::new("http://localhost:11434/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:11434");
    }

    #[test]
    fn test_chat_request_serialization() {
        let request = ChatRequest {
            model: "gpt-oss:120b-cloud",
            messages: vec![RequestMessage {
                role: "user",
                content: "hello",
            }],
            stream: false,
            format: None,
            options: ChatOptions { temperature: 0.7 },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-oss:120b-cloud");
        assert_eq!(json["stream"], false);
        assert!(json.get("format").is_none());
    }

    #[test]
    fn test_chat_response_parsing() {
        let parsed: ChatResponse = serde_json::from_str(
            r#"{"model": "m", "message": {"role": "assistant", "content": "hi"}, "done": true}"#,
        )
        .unwrap();
        assert_eq!(parsed.message.content, "hi");
    }
}

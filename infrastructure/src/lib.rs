//! Infrastructure layer for agent-council
//!
//! Adapters for the application ports: the Ollama HTTP gateway for persona
//! calls and structured synthesis, plus TOML/env configuration loading.

pub mod config;
pub mod ollama;

pub use config::{ConfigLoader, FileConfig};
pub use ollama::{OllamaClient, OllamaPersonaGateway, OllamaSynthesizer};

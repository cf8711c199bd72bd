//! Ollama adapter
//!
//! Implements the persona gateway and synthesizer ports against a local or
//! remote Ollama server's REST API.

pub mod client;
pub mod gateway;
pub mod synthesizer;

pub use client::OllamaClient;
pub use gateway::OllamaPersonaGateway;
pub use synthesizer::OllamaSynthesizer;

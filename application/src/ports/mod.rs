//! Ports: interfaces the application layer depends on.
//!
//! Implementations (adapters) live in the infrastructure and presentation
//! layers.

pub mod persona_gateway;
pub mod progress;
pub mod synthesizer;

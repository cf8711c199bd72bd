//! Persona identity and weighting
//!
//! The council is a fixed set of four personas. Each persona has a stable
//! role key used internally and a casual display alias used in the chat
//! transcript. The mapping is static: roles are never added or removed at
//! runtime.

pub mod role;
pub mod weights;

pub use role::PersonaRole;
pub use weights::PersonaWeights;

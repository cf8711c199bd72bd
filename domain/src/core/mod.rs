//! Core domain primitives

pub mod error;
pub mod problem;

pub use error::DomainError;
pub use problem::Problem;

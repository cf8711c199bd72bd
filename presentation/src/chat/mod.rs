//! Interactive chat module
//!
//! A readline-based group chat with the council: plain messages get a full
//! round of replies, `@Name` mentions start a focused debate, and an empty
//! line lets the personas keep talking among themselves.

mod mentions;
mod repl;

pub use mentions::Mentions;
pub use repl::CouncilRepl;

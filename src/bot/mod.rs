//! Text command interface
//!
//! Reads commands like `/addhabit Read` or `/check 3` one per line,
//! routes them to the handlers in [`crate::tools`] and writes a reply for
//! each one.

pub mod command;
pub mod reply;
pub mod shell;

// Re-export main types
pub use command::Command;
pub use reply::{OutputFormat, Reply};
pub use shell::BotShell;

//! Command handlers for habit management
//!
//! Each handler takes the storage, the caller's owner id and the raw
//! arguments typed by the user, and returns a serializable response with a
//! human-readable message. The bot shell decides how to print it.

pub mod create;
pub mod log;
pub mod list;
pub mod status;

// Re-export tool functions for easy access
pub use create::*;
pub use log::*;
pub use list::*;
pub use status::*;

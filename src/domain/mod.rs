//! Domain module containing core business logic and data types
//!
//! This module defines the core entities (Habit, CompletionLog) and the
//! streak calculations derived from them. These types represent the
//! fundamental concepts in our habit tracking system.

pub mod habit;
pub mod entry;
pub mod streak;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use entry::*;
pub use streak::*;
pub use types::*;

use thiserror::Error;

/// Errors raised when caller-supplied input fails validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),

    #[error("Invalid description: {0}")]
    InvalidDescription(String),

    #[error("Invalid habit id '{0}': expected a number")]
    InvalidHabitId(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

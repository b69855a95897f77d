//! Storage layer for persisting habit data
//!
//! This module handles all database operations using SQLite. It provides
//! a clean interface for storing habits and completion logs, scoped per
//! owner.

pub mod sqlite;
pub mod migrations;

// Re-export the main storage types
pub use sqlite::*;

use thiserror::Error;
use chrono::NaiveDate;
use crate::analytics::AggregateStats;
use crate::domain::{CompletionLog, DomainError, Habit, HabitId, HabitStats, LogOutcome, OwnerId, local_today};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Habit {habit_id} not found for user {owner_id}")]
    HabitNotFound { owner_id: OwnerId, habit_id: HabitId },

    #[error(transparent)]
    InvalidInput(#[from] DomainError),

    #[error("Migration error: {0}")]
    Migration(String),
}

impl StorageError {
    /// The referenced habit is missing, inactive, or owned by someone else
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::HabitNotFound { .. })
    }

    /// The caller supplied a bad name, id or date
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, StorageError::InvalidInput(_))
    }

    /// The database itself failed; the operation did not complete
    pub fn is_storage_failure(&self) -> bool {
        matches!(
            self,
            StorageError::Connection(_) | StorageError::Query(_) | StorageError::Migration(_)
        )
    }
}

/// Trait defining the storage interface for habits
///
/// Every operation is scoped by owner: nothing created under one owner is
/// visible to another. Operations that depend on "today" come in two
/// forms; the plain one uses the host's local date.
pub trait HabitStorage {
    /// Create a new active habit and return its id
    fn add_habit(&self, owner_id: OwnerId, name: &str, description: &str) -> Result<HabitId, StorageError>;

    /// Active habits of `owner_id`, most recently created first
    fn list_habits(&self, owner_id: OwnerId) -> Result<Vec<Habit>, StorageError>;

    /// Get one active habit of `owner_id`
    fn get_habit(&self, owner_id: OwnerId, habit_id: HabitId) -> Result<Habit, StorageError>;

    /// Record that `habit_id` was completed on `date`
    ///
    /// Logging the same habit twice for one date is not an error; the
    /// second call reports [`LogOutcome::AlreadyPresent`].
    fn log_completion_on(
        &self,
        owner_id: OwnerId,
        habit_id: HabitId,
        date: NaiveDate,
    ) -> Result<LogOutcome, StorageError>;

    /// Record a completion for today
    fn log_completion(&self, owner_id: OwnerId, habit_id: HabitId) -> Result<LogOutcome, StorageError> {
        self.log_completion_on(owner_id, habit_id, local_today())
    }

    /// Full log rows of a habit, newest completion date first
    fn completion_logs(&self, owner_id: OwnerId, habit_id: HabitId) -> Result<Vec<CompletionLog>, StorageError>;

    /// All completion dates of a habit, newest first
    fn completion_dates(&self, owner_id: OwnerId, habit_id: HabitId) -> Result<Vec<NaiveDate>, StorageError>;

    /// Completion count and streaks of one habit, as seen on `today`
    fn habit_stats_as_of(
        &self,
        owner_id: OwnerId,
        habit_id: HabitId,
        today: NaiveDate,
    ) -> Result<HabitStats, StorageError>;

    /// Completion count and streaks of one habit
    fn habit_stats(&self, owner_id: OwnerId, habit_id: HabitId) -> Result<HabitStats, StorageError> {
        self.habit_stats_as_of(owner_id, habit_id, local_today())
    }

    /// Totals across all of an owner's habits, as seen on `today`
    fn aggregate_stats_as_of(&self, owner_id: OwnerId, today: NaiveDate) -> Result<AggregateStats, StorageError>;

    /// Totals across all of an owner's habits
    fn aggregate_stats(&self, owner_id: OwnerId) -> Result<AggregateStats, StorageError> {
        self.aggregate_stats_as_of(owner_id, local_today())
    }
}

//! Public library interface for the Habit Tracker
//!
//! The core is the SQLite [`storage`] layer and the streak/aggregate
//! calculations in [`domain`] and [`analytics`]. The [`bot`] module puts a
//! text command shell in front of them.

use std::path::PathBuf;
use thiserror::Error;

// Internal modules
mod domain;
mod storage;
mod analytics;
mod tools;
pub mod bot;

// Re-export public modules and types
pub use domain::*;
pub use storage::{migrations, HabitStorage, SqliteStorage, StorageError};
pub use analytics::{completion_rate, weekly_window, AggregateStats, StatsEngine};
pub use tools::{
    CreateHabitParams, CreateHabitResponse, HabitStatus, HabitSummary, ListHabitsResponse,
    LogHabitParams, LogHabitResponse, StatsParams, StatsResponse,
    create_habit, get_stats, list_habits, log_habit,
};

/// Errors that can occur while running the tracker
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Database error: {0}")]
    Database(#[from] storage::StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Main habit tracker that owns the database
///
/// One instance per database; create several for isolated tests.
pub struct HabitTracker {
    storage: SqliteStorage,
    stats: StatsEngine,
}

impl HabitTracker {
    /// Create a new habit tracker with the specified database path
    ///
    /// This will initialize the SQLite database with the required schema
    /// if it doesn't already exist.
    pub fn new(db_path: PathBuf) -> Result<Self, TrackerError> {
        tracing::info!("Initializing Habit Tracker with database: {:?}", db_path);

        let storage = SqliteStorage::new(db_path)?;

        Ok(Self {
            storage,
            stats: StatsEngine::new(),
        })
    }

    /// Create a tracker backed by a private in-memory database
    pub fn in_memory() -> Result<Self, TrackerError> {
        Ok(Self {
            storage: SqliteStorage::open_in_memory()?,
            stats: StatsEngine::new(),
        })
    }

    /// Answer commands for `owner_id` over stdin/stdout until stdin closes
    pub async fn run(&self, owner_id: OwnerId, format: bot::OutputFormat) -> Result<(), TrackerError> {
        let habits = self.storage.list_habits(owner_id)?;
        tracing::info!("User {} has {} active habits", owner_id, habits.len());

        bot::BotShell::new(&self.storage, owner_id, format).run().await
    }

    /// Get a reference to the storage layer
    pub fn storage(&self) -> &SqliteStorage {
        &self.storage
    }

    /// Get a reference to the stats engine
    pub fn stats(&self) -> &StatsEngine {
        &self.stats
    }
}

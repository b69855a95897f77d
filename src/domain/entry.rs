//! Completion records for habits
//!
//! A `CompletionLog` is one check-in: a habit done on a calendar day.
//! At most one exists per habit per day.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use crate::domain::{HabitId, OwnerId};

/// A record of completing a habit on a specific day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionLog {
    /// Row id of this log
    pub id: i64,
    /// Which habit this entry is for
    pub habit_id: HabitId,
    /// Copied from the habit when the log was written
    pub owner_id: OwnerId,
    /// Which day this completion counts for
    pub completion_date: NaiveDate,
    /// When the row was written (audit only)
    pub logged_at: DateTime<Utc>,
}

/// What happened when a completion was logged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogOutcome {
    /// A new log row was written
    Inserted,
    /// The habit was already logged for that date; nothing changed
    AlreadyPresent,
}

impl LogOutcome {
    /// `true` when a new row was written
    pub fn inserted(self) -> bool {
        matches!(self, LogOutcome::Inserted)
    }
}

impl From<LogOutcome> for bool {
    fn from(outcome: LogOutcome) -> Self {
        outcome.inserted()
    }
}

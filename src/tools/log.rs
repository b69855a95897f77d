//! Handler for `/check`

use serde::{Deserialize, Serialize};
use crate::domain::{local_today, parse_date, DomainError, HabitId, LogOutcome, OwnerId};
use crate::storage::{StorageError, HabitStorage};

/// Parameters for logging a habit completion
#[derive(Debug, Deserialize)]
pub struct LogHabitParams {
    /// Raw id as typed by the user
    pub habit_id: String,
    /// Optional `YYYY-MM-DD` date, defaults to today
    pub completed_at: Option<String>,
}

/// Response from logging a habit
#[derive(Debug, Serialize)]
pub struct LogHabitResponse {
    pub habit_id: HabitId,
    pub outcome: LogOutcome,
    pub current_streak: u32,
    pub message: String,
}

/// Log a habit completion using the provided storage
pub fn log_habit<S: HabitStorage>(
    storage: &S,
    owner_id: OwnerId,
    params: LogHabitParams,
) -> Result<LogHabitResponse, StorageError> {
    let habit_id: HabitId = params.habit_id.parse()?;
    let today = local_today();
    let completed_at = match params.completed_at.as_deref() {
        Some(date) => parse_date(date)?,
        None => today,
    };

    // A future check-in would hide the real streak until that day arrives
    if completed_at > today {
        return Err(DomainError::InvalidDate(format!(
            "{} is in the future, you can only check in for today or earlier",
            completed_at
        ))
        .into());
    }

    let habit = storage.get_habit(owner_id, habit_id)?;
    let outcome = storage.log_completion_on(owner_id, habit_id, completed_at)?;
    let stats = storage.habit_stats(owner_id, habit_id)?;

    let message = match outcome {
        LogOutcome::Inserted => format!(
            "🔥 Marked '{}' as done for {}! Current streak: {} day{}",
            habit.name,
            completed_at,
            stats.current_streak,
            if stats.current_streak == 1 { "" } else { "s" }
        ),
        LogOutcome::AlreadyPresent => format!(
            "👍 '{}' is already marked as done for {}.",
            habit.name, completed_at
        ),
    };

    Ok(LogHabitResponse {
        habit_id,
        outcome,
        current_streak: stats.current_streak,
        message,
    })
}

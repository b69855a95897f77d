//! Handler for `/stats`
//!
//! Without an argument it reports totals across all habits; with a habit
//! id it reports that habit's completions and streaks.

use serde::{Deserialize, Serialize};
use crate::analytics::AggregateStats;
use crate::domain::{HabitId, HabitStats, OwnerId};
use crate::storage::{StorageError, HabitStorage};

/// Parameters for the stats command
#[derive(Debug, Default, Deserialize)]
pub struct StatsParams {
    /// Raw habit id; all habits when omitted
    pub habit_id: Option<String>,
}

/// Stats of a single habit
#[derive(Debug, Serialize)]
pub struct HabitStatus {
    pub habit_id: HabitId,
    pub name: String,
    #[serde(flatten)]
    pub stats: HabitStats,
}

/// Response from the stats command
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub habit: Option<HabitStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall: Option<AggregateStats>,
    pub message: String,
}

/// Get overall or per-habit stats using the provided storage
pub fn get_stats<S: HabitStorage>(
    storage: &S,
    owner_id: OwnerId,
    params: StatsParams,
) -> Result<StatsResponse, StorageError> {
    match params.habit_id {
        Some(raw_id) => {
            let habit_id: HabitId = raw_id.parse()?;
            let habit = storage.get_habit(owner_id, habit_id)?;
            let stats = storage.habit_stats(owner_id, habit_id)?;

            let mut message = format!(
                "📊 Stats for '{}'\n✅ Total completions: {}\n🔥 Current streak: {} day{}\n🏆 Longest streak: {} day{}",
                habit.name,
                stats.total_completions,
                stats.current_streak,
                if stats.current_streak == 1 { "" } else { "s" },
                stats.longest_streak,
                if stats.longest_streak == 1 { "" } else { "s" },
            );
            if let Some(last) = stats.last_completed {
                message.push_str(&format!("\n📅 Last completed: {}", last));
            }

            Ok(StatsResponse {
                habit: Some(HabitStatus { habit_id, name: habit.name, stats }),
                overall: None,
                message,
            })
        }
        None => {
            let overall = storage.aggregate_stats(owner_id)?;
            let message = format!(
                "📊 Your habit statistics\n🎯 Active habits: {}\n✅ Completed today: {} ({:.0}%)\n📅 Completions this week: {}",
                overall.total_habits,
                overall.today_completions,
                overall.completion_rate,
                overall.weekly_completions
            );

            Ok(StatsResponse {
                habit: None,
                overall: Some(overall),
                message,
            })
        }
    }
}

//! Aggregate statistics across all of an owner's habits
//!
//! The store counts rows; this module turns the counts into the numbers
//! shown to the user.

use serde::{Deserialize, Serialize};
use chrono::{Days, NaiveDate};

use crate::domain::HabitStats;

/// Number of days, including today, in the weekly window
pub const WEEK_WINDOW_DAYS: u64 = 7;

/// Overall numbers for one owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    /// Active habits the owner has
    pub total_habits: u32,
    /// Distinct active habits completed today
    pub today_completions: u32,
    /// `today_completions / total_habits * 100`, 0 with no habits
    pub completion_rate: f64,
    /// Completion rows dated within the last seven days, today included
    pub weekly_completions: u32,
}

/// Stateless calculator shared by the store and the bot
#[derive(Debug, Default, Clone, Copy)]
pub struct StatsEngine;

impl StatsEngine {
    /// Create a new stats engine
    pub fn new() -> Self {
        Self
    }

    /// Stats for a single habit from its completion dates
    pub fn habit_stats(&self, dates: &[NaiveDate], today: NaiveDate) -> HabitStats {
        HabitStats::calculate_from_dates(dates, today)
    }

    /// Combine the raw counts into an [`AggregateStats`]
    pub fn aggregate(
        &self,
        total_habits: u32,
        today_completions: u32,
        weekly_completions: u32,
    ) -> AggregateStats {
        AggregateStats {
            total_habits,
            today_completions,
            completion_rate: completion_rate(today_completions, total_habits),
            weekly_completions,
        }
    }
}

/// Percentage of habits completed, guarding against zero habits
pub fn completion_rate(today_completions: u32, total_habits: u32) -> f64 {
    if total_habits == 0 {
        return 0.0;
    }
    f64::from(today_completions) / f64::from(total_habits) * 100.0
}

/// Inclusive `(start, end)` of the weekly window ending on `today`
pub fn weekly_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = today
        .checked_sub_days(Days::new(WEEK_WINDOW_DAYS - 1))
        .unwrap_or(NaiveDate::MIN);
    (start, today)
}

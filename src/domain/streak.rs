//! Streak calculation
//!
//! Pure functions over the set of dates a habit was completed on. The
//! store hands over the dates; nothing here touches persistence.

use serde::{Deserialize, Serialize};
use chrono::{Days, NaiveDate};

/// Per-habit statistics derived from its completion dates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitStats {
    /// Number of days this habit was completed
    pub total_completions: u32,
    /// Consecutive days ending today (see [`current_streak`])
    pub current_streak: u32,
    /// Longest run of consecutive days ever recorded
    pub longest_streak: u32,
    /// Most recent completion date
    pub last_completed: Option<NaiveDate>,
}

impl HabitStats {
    /// Stats for a habit that has never been completed
    pub fn empty() -> Self {
        Self {
            total_completions: 0,
            current_streak: 0,
            longest_streak: 0,
            last_completed: None,
        }
    }

    /// Derive all stats from a habit's completion dates, in any order
    pub fn calculate_from_dates(dates: &[NaiveDate], today: NaiveDate) -> Self {
        if dates.is_empty() {
            return Self::empty();
        }

        Self {
            total_completions: dates.len() as u32,
            current_streak: current_streak(dates, today),
            longest_streak: longest_streak(dates),
            last_completed: dates.iter().max().copied(),
        }
    }
}

/// Count consecutive completed days ending exactly on `today`
///
/// Dates are sorted newest first and the i-th date must equal
/// `today - i`. The first mismatch ends the count, so a habit that was
/// done yesterday but not yet today reports 0.
///
/// `dates` must not contain duplicates (the store guarantees this).
pub fn current_streak(dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let mut sorted = dates.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let mut streak = 0;
    for (i, date) in sorted.iter().enumerate() {
        let expected = match today.checked_sub_days(Days::new(i as u64)) {
            Some(expected) => expected,
            None => break,
        };

        if *date == expected {
            streak += 1;
        } else {
            break;
        }
    }

    streak
}

/// Length of the longest run of consecutive days anywhere in `dates`
pub fn longest_streak(dates: &[NaiveDate]) -> u32 {
    let mut sorted = dates.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut longest = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;

    for date in sorted {
        run = match previous.and_then(|p| p.succ_opt()) {
            Some(next) if next == date => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(date);
    }

    longest
}

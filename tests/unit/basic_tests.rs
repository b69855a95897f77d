//! Basic unit tests against the public API
use habit_tracker_bot::*;
use chrono::{Days, NaiveDate};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 3).unwrap()
}

#[test]
fn test_streak_crosses_year_boundary() {
    let t = today();
    let dates = vec![t, t - Days::new(1), t - Days::new(2), t - Days::new(3)];
    // 2025-01-03 back to 2024-12-31
    assert_eq!(current_streak(&dates, t), 4);
}

#[test]
fn test_streak_ignores_input_order() {
    let t = today();
    let dates = vec![t - Days::new(2), t, t - Days::new(1), t - Days::new(5)];
    assert_eq!(current_streak(&dates, t), 3);
}

#[test]
fn test_stats_engine_matches_free_functions() {
    let engine = StatsEngine::new();
    let t = today();
    let dates = vec![t - Days::new(1)];

    let stats = engine.habit_stats(&dates, t);
    assert_eq!(stats.current_streak, 0);
    assert_eq!(stats.longest_streak, 1);
    assert_eq!(stats.total_completions, 1);

    let overall = engine.aggregate(3, 2, 9);
    assert!((overall.completion_rate - 66.666).abs() < 0.01);
    assert_eq!(overall.weekly_completions, 9);
}

#[test]
fn test_storage_error_classes() {
    let not_found = StorageError::HabitNotFound { owner_id: OwnerId(1), habit_id: HabitId(2) };
    assert!(not_found.is_not_found());
    assert!(!not_found.is_storage_failure());

    let invalid: StorageError = DomainError::InvalidHabitId("x".to_string()).into();
    assert!(invalid.is_invalid_input());

    let failure = StorageError::Connection("gone".to_string());
    assert!(failure.is_storage_failure());
}

#[test]
fn test_habit_id_parsing() {
    assert_eq!("15".parse::<HabitId>().unwrap(), HabitId(15));
    assert!(matches!("fifteen".parse::<HabitId>(), Err(DomainError::InvalidHabitId(_))));
}

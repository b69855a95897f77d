//! End-to-end behaviour of the store on a real database file
use habit_tracker_bot::*;
use chrono::{Days, NaiveDate};
use tempfile::TempDir;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 20).unwrap()
}

#[test]
fn test_database_persistence() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = dir.path().join("habits.db");

    let habit_id = {
        let tracker = HabitTracker::new(db_path.clone()).expect("Failed to create first tracker");
        let storage = tracker.storage();
        let id = storage.add_habit(OwnerId(1), "Journal", "one page").unwrap();
        storage.log_completion_on(OwnerId(1), id, today()).unwrap();
        id
    };

    // Reopen: schema already at the current version, data still there
    let tracker = HabitTracker::new(db_path).expect("Failed to create second tracker");
    let storage = tracker.storage();
    assert_eq!(storage.schema_version().unwrap(), migrations::CURRENT_VERSION);

    let habits = storage.list_habits(OwnerId(1)).unwrap();
    assert_eq!(habits.len(), 1);
    assert_eq!(habits[0].id, habit_id);
    assert_eq!(habits[0].description, "one page");

    assert_eq!(
        storage.log_completion_on(OwnerId(1), habit_id, today()).unwrap(),
        LogOutcome::AlreadyPresent
    );
}

#[test]
fn test_ids_not_reused_after_reopen() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("habits.db");

    let first = SqliteStorage::new(db_path.clone()).unwrap().add_habit(OwnerId(1), "A", "").unwrap();
    let second = SqliteStorage::new(db_path).unwrap().add_habit(OwnerId(1), "B", "").unwrap();
    assert!(second > first);
}

#[test]
fn test_full_stats_workflow() {
    let tracker = HabitTracker::in_memory().unwrap();
    let storage = tracker.storage();
    let alice = OwnerId(10);
    let bob = OwnerId(20);

    let water = storage.add_habit(alice, "Drink water", "").unwrap();
    let walk = storage.add_habit(alice, "Walk", "").unwrap();
    let bob_habit = storage.add_habit(bob, "Walk", "").unwrap();

    for n in 0..3 {
        assert!(storage.log_completion_on(alice, water, today() - Days::new(n)).unwrap().inserted());
    }
    storage.log_completion_on(alice, walk, today() - Days::new(8)).unwrap();
    storage.log_completion_on(bob, bob_habit, today()).unwrap();

    let water_stats = storage.habit_stats_as_of(alice, water, today()).unwrap();
    assert_eq!(water_stats.total_completions, 3);
    assert_eq!(water_stats.current_streak, 3);

    let overall = storage.aggregate_stats_as_of(alice, today()).unwrap();
    assert_eq!(overall.total_habits, 2);
    assert_eq!(overall.today_completions, 1);
    assert_eq!(overall.completion_rate, 50.0);
    // The walk 8 days ago is outside the window, Bob's log is not Alice's
    assert_eq!(overall.weekly_completions, 3);

    let bob_overall = storage.aggregate_stats_as_of(bob, today()).unwrap();
    assert_eq!(bob_overall.total_habits, 1);
    assert_eq!(bob_overall.weekly_completions, 1);
    assert_eq!(bob_overall.completion_rate, 100.0);

    // The tracker's engine agrees with what the store computed
    let dates = storage.completion_dates(alice, water).unwrap();
    assert_eq!(tracker.stats().habit_stats(&dates, today()), water_stats);
}

#[test]
fn test_storage_interface() {
    let storage = SqliteStorage::open_in_memory().expect("Failed to create storage");
    let _: &dyn HabitStorage = &storage;
    assert!(storage.list_habits(OwnerId(1)).unwrap().is_empty());
}

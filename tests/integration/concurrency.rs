//! Concurrent check-ins against one shared store
use std::sync::{Arc, Barrier};
use std::thread;

use habit_tracker_bot::*;
use chrono::NaiveDate;
use tempfile::TempDir;

const THREADS: usize = 8;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
}

#[test]
fn test_concurrent_check_ins_insert_once() {
    let storage = Arc::new(SqliteStorage::open_in_memory().unwrap());
    let habit_id = storage.add_habit(OwnerId(1), "Read", "").unwrap();
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let storage = Arc::clone(&storage);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                storage.log_completion_on(OwnerId(1), habit_id, day()).unwrap()
            })
        })
        .collect();

    let outcomes: Vec<LogOutcome> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let inserted = outcomes.iter().filter(|o| o.inserted()).count();

    assert_eq!(inserted, 1);
    assert_eq!(storage.completion_dates(OwnerId(1), habit_id).unwrap(), vec![day()]);
}

#[test]
fn test_concurrent_add_habit_gives_distinct_ids() {
    let storage = Arc::new(SqliteStorage::open_in_memory().unwrap());

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let storage = Arc::clone(&storage);
            thread::spawn(move || storage.add_habit(OwnerId(1), &format!("Habit {}", i), "").unwrap())
        })
        .collect();

    let mut ids: Vec<HabitId> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    ids.sort();
    ids.dedup();

    assert_eq!(ids.len(), THREADS);
    assert_eq!(storage.list_habits(OwnerId(1)).unwrap().len(), THREADS);
}

#[test]
fn test_two_connections_same_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("habits.db");

    let first = SqliteStorage::new(path.clone()).unwrap();
    let second = SqliteStorage::new(path).unwrap();

    let habit_id = first.add_habit(OwnerId(1), "Run", "").unwrap();

    assert_eq!(first.log_completion_on(OwnerId(1), habit_id, day()).unwrap(), LogOutcome::Inserted);
    assert_eq!(
        second.log_completion_on(OwnerId(1), habit_id, day()).unwrap(),
        LogOutcome::AlreadyPresent
    );
}

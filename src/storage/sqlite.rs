//! SQLite implementation of the habit storage interface
//!
//! This module provides the concrete SQLite implementation for storing
//! and retrieving habit data. It handles all SQL queries and data conversion.

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use rusqlite::{params, Connection, OptionalExtension, Row, TransactionBehavior};
use chrono::{DateTime, NaiveDate, Utc};

use crate::analytics::{weekly_window, AggregateStats, StatsEngine};
use crate::domain::{CompletionLog, Habit, HabitId, HabitStats, LogOutcome, NewHabit, OwnerId};
use crate::storage::{migrations, HabitStorage, StorageError};

/// How long a writer waits on a locked database file before failing
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const HABIT_COLUMNS: &str = "id, owner_id, name, description, created_at, is_active";

/// SQLite-based storage implementation
///
/// The connection sits behind a mutex so one instance can be shared
/// between threads. Every operation holds the lock for its whole
/// duration, which makes multi-statement operations atomic to other
/// callers of the same instance.
pub struct SqliteStorage {
    conn: Mutex<Connection>,
    stats: StatsEngine,
}

impl SqliteStorage {
    /// Create a new SQLite storage instance
    ///
    /// This opens the database file and runs any necessary migrations
    /// to ensure the schema is up to date.
    pub fn new(db_path: PathBuf) -> Result<Self, StorageError> {
        let conn = Connection::open(&db_path)
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        let storage = Self::from_connection(conn)?;
        tracing::info!("SQLite storage initialized at: {:?}", db_path);
        Ok(storage)
    }

    /// Open a private in-memory database (useful for testing)
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::Connection(format!("Failed to open in-memory database: {}", e)))?;

        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, StorageError> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(|e| StorageError::Connection(format!("Failed to enable foreign keys: {}", e)))?;

        conn.busy_timeout(BUSY_TIMEOUT)
            .map_err(|e| StorageError::Connection(format!("Failed to set busy timeout: {}", e)))?;

        migrations::initialize_database(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
            stats: StatsEngine::new(),
        })
    }

    /// Current schema version of the open database
    pub fn schema_version(&self) -> Result<i32, StorageError> {
        let conn = self.lock()?;
        migrations::get_current_version(&conn)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StorageError> {
        self.conn
            .lock()
            .map_err(|_| StorageError::Connection("database connection lock poisoned".to_string()))
    }

    fn habit_from_row(row: &Row<'_>) -> rusqlite::Result<Habit> {
        let created_at: DateTime<Utc> = row.get(4)?;

        Ok(Habit::from_existing(
            HabitId(row.get(0)?),
            OwnerId(row.get(1)?),
            row.get(2)?, // name
            row.get(3)?, // description
            created_at,
            row.get(5)?, // is_active
        ))
    }

    /// Look up an active habit belonging to `owner_id`
    fn find_active_habit(
        conn: &Connection,
        owner_id: OwnerId,
        habit_id: HabitId,
    ) -> Result<Habit, StorageError> {
        let sql = format!(
            "SELECT {} FROM habits WHERE id = ?1 AND owner_id = ?2 AND is_active = 1",
            HABIT_COLUMNS
        );

        conn.query_row(&sql, params![habit_id.0, owner_id.0], Self::habit_from_row)
            .optional()?
            .ok_or(StorageError::HabitNotFound { owner_id, habit_id })
    }

    fn load_completion_dates(
        conn: &Connection,
        owner_id: OwnerId,
        habit_id: HabitId,
    ) -> Result<Vec<NaiveDate>, StorageError> {
        let mut stmt = conn.prepare(
            "SELECT completion_date FROM habit_logs
             WHERE habit_id = ?1 AND owner_id = ?2
             ORDER BY completion_date DESC",
        )?;

        let dates = stmt
            .query_map(params![habit_id.0, owner_id.0], |row| row.get::<_, NaiveDate>(0))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(dates)
    }
}

impl HabitStorage for SqliteStorage {
    fn add_habit(&self, owner_id: OwnerId, name: &str, description: &str) -> Result<HabitId, StorageError> {
        let new_habit = NewHabit::new(owner_id, name, description)?;

        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO habits (owner_id, name, description, created_at, is_active)
             VALUES (?1, ?2, ?3, ?4, 1)",
            params![
                new_habit.owner_id.0,
                new_habit.name,
                new_habit.description,
                new_habit.created_at,
            ],
        )?;
        // Still under the lock, so this is our row's id
        let habit_id = HabitId(conn.last_insert_rowid());

        tracing::debug!("Created habit: {} ({}) for user {}", new_habit.name, habit_id, owner_id);
        Ok(habit_id)
    }

    fn list_habits(&self, owner_id: OwnerId) -> Result<Vec<Habit>, StorageError> {
        let conn = self.lock()?;
        let sql = format!(
            "SELECT {} FROM habits
             WHERE owner_id = ?1 AND is_active = 1
             ORDER BY created_at DESC, id DESC",
            HABIT_COLUMNS
        );

        let mut stmt = conn.prepare(&sql)?;
        let habits = stmt
            .query_map(params![owner_id.0], Self::habit_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(habits)
    }

    fn get_habit(&self, owner_id: OwnerId, habit_id: HabitId) -> Result<Habit, StorageError> {
        let conn = self.lock()?;
        Self::find_active_habit(&conn, owner_id, habit_id)
    }

    fn log_completion_on(
        &self,
        owner_id: OwnerId,
        habit_id: HabitId,
        date: NaiveDate,
    ) -> Result<LogOutcome, StorageError> {
        let mut conn = self.lock()?;
        // IMMEDIATE takes the write lock up front, so the ownership check
        // and the insert also serialize against other connections
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        Self::find_active_habit(&tx, owner_id, habit_id)?;

        let inserted = tx.execute(
            "INSERT OR IGNORE INTO habit_logs (habit_id, owner_id, completion_date, logged_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![habit_id.0, owner_id.0, date, Utc::now()],
        )?;
        tx.commit()?;

        let outcome = if inserted == 1 {
            LogOutcome::Inserted
        } else {
            LogOutcome::AlreadyPresent
        };

        tracing::debug!("Logged habit {} for {}: {:?}", habit_id, date, outcome);
        Ok(outcome)
    }

    fn completion_logs(&self, owner_id: OwnerId, habit_id: HabitId) -> Result<Vec<CompletionLog>, StorageError> {
        let conn = self.lock()?;
        Self::find_active_habit(&conn, owner_id, habit_id)?;

        let mut stmt = conn.prepare(
            "SELECT id, habit_id, owner_id, completion_date, logged_at FROM habit_logs
             WHERE habit_id = ?1 AND owner_id = ?2
             ORDER BY completion_date DESC",
        )?;

        let logs = stmt
            .query_map(params![habit_id.0, owner_id.0], |row| {
                Ok(CompletionLog {
                    id: row.get(0)?,
                    habit_id: HabitId(row.get(1)?),
                    owner_id: OwnerId(row.get(2)?),
                    completion_date: row.get(3)?,
                    logged_at: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(logs)
    }

    fn completion_dates(&self, owner_id: OwnerId, habit_id: HabitId) -> Result<Vec<NaiveDate>, StorageError> {
        let conn = self.lock()?;
        Self::find_active_habit(&conn, owner_id, habit_id)?;
        Self::load_completion_dates(&conn, owner_id, habit_id)
    }

    fn habit_stats_as_of(
        &self,
        owner_id: OwnerId,
        habit_id: HabitId,
        today: NaiveDate,
    ) -> Result<HabitStats, StorageError> {
        let dates = self.completion_dates(owner_id, habit_id)?;
        Ok(self.stats.habit_stats(&dates, today))
    }

    fn aggregate_stats_as_of(&self, owner_id: OwnerId, today: NaiveDate) -> Result<AggregateStats, StorageError> {
        let mut conn = self.lock()?;
        // One read transaction so the three counts see the same snapshot
        let tx = conn.transaction()?;

        let total_habits: u32 = tx.query_row(
            "SELECT COUNT(*) FROM habits WHERE owner_id = ?1 AND is_active = 1",
            params![owner_id.0],
            |row| row.get(0),
        )?;

        let (week_start, week_end) = weekly_window(today);
        let weekly_completions: u32 = tx.query_row(
            "SELECT COUNT(*) FROM habit_logs hl
             JOIN habits h ON hl.habit_id = h.id
             WHERE hl.owner_id = ?1 AND hl.completion_date BETWEEN ?2 AND ?3",
            params![owner_id.0, week_start, week_end],
            |row| row.get(0),
        )?;

        let today_completions: u32 = tx.query_row(
            "SELECT COUNT(DISTINCT hl.habit_id) FROM habit_logs hl
             JOIN habits h ON hl.habit_id = h.id
             WHERE hl.owner_id = ?1 AND hl.completion_date = ?2 AND h.is_active = 1",
            params![owner_id.0, today],
            |row| row.get(0),
        )?;

        tx.commit()?;

        Ok(self.stats.aggregate(total_habits, today_completions, weekly_completions))
    }
}

//! SQLite implementation of [`CounterStore`].
//!
//! [`SqliteStore`] keeps only the database path and busy timeout. Each
//! operation opens its own connection and drops it before returning, so a
//! store handle can be shared freely across threads. Updates run inside a
//! `BEGIN IMMEDIATE` transaction, which takes SQLite's write lock up front:
//! concurrent read-modify-writes queue on that lock instead of overwriting
//! each other.

use std::time::Duration;

use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

use crate::error::StorageError;
use crate::traits::CounterStore;
use crate::types::{COUNTER_ID, INITIAL_VALUE};

/// How long a connection waits on another writer before giving up.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// SQLite-backed implementation of [`CounterStore`].
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_path: String,
    busy_timeout: Duration,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at `path` with the default busy
    /// timeout.
    pub fn new(path: &str) -> Result<Self, StorageError> {
        Self::with_busy_timeout(path, DEFAULT_BUSY_TIMEOUT)
    }

    /// Opens (or creates) a SQLite database at `path`, waiting up to
    /// `busy_timeout` whenever another writer holds the lock.
    pub fn with_busy_timeout(path: &str, busy_timeout: Duration) -> Result<Self, StorageError> {
        let store = SqliteStore {
            db_path: path.to_string(),
            busy_timeout,
        };
        // Ensure the file exists and the table is in place.
        let _conn = store.connect()?;
        Ok(store)
    }

    fn connect(&self) -> Result<Connection, StorageError> {
        crate::schema::open_database(&self.db_path, self.busy_timeout)
    }
}

/// Reads the counter row through any connection or transaction.
fn select_value(conn: &Connection) -> Result<i64, StorageError> {
    let value: Option<i64> = conn
        .query_row(
            "SELECT value FROM counters WHERE id = ?1",
            params![COUNTER_ID.0],
            |row| row.get(0),
        )
        .optional()?;
    Ok(value.unwrap_or(INITIAL_VALUE))
}

impl CounterStore for SqliteStore {
    fn ensure_initialized(&self) -> Result<(), StorageError> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO counters (id, value) VALUES (?1, ?2)
             ON CONFLICT(id) DO NOTHING",
            params![COUNTER_ID.0, INITIAL_VALUE],
        )?;
        Ok(())
    }

    fn read(&self) -> Result<i64, StorageError> {
        let conn = self.connect()?;
        select_value(&conn)
    }

    fn apply_delta(&self, delta: i64) -> Result<i64, StorageError> {
        let mut conn = self.connect()?;
        // Dropping `tx` without commit rolls back, so every early return
        // below leaves the stored value untouched.
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let current = select_value(&tx)?;
        let next = current
            .checked_add(delta)
            .ok_or(StorageError::Overflow { current, delta })?;

        let stored: i64 = tx.query_row(
            "INSERT INTO counters (id, value) VALUES (?1, ?2)
             ON CONFLICT(id) DO UPDATE SET value = excluded.value
             RETURNING value",
            params![COUNTER_ID.0, next],
            |row| row.get(0),
        )?;

        tx.commit()?;
        Ok(stored)
    }
}

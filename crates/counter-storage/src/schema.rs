//! SQL schema and connection setup for the SQLite backend.
//!
//! The schema is a single table, created idempotently every time a
//! connection is opened. There is no versioned migration history.

use std::time::Duration;

use rusqlite::Connection;

use crate::error::StorageError;

/// The counters relation. Only row `id = 1` is ever written.
pub const CREATE_COUNTERS: &str = "CREATE TABLE IF NOT EXISTS counters (
    id    INTEGER PRIMARY KEY,
    value INTEGER NOT NULL DEFAULT 0
)";

/// Opens (or creates) a SQLite database at `path` with WAL mode, the given
/// busy timeout, and the counters table in place.
pub fn open_database(path: &str, busy_timeout: Duration) -> Result<Connection, StorageError> {
    let conn = Connection::open(path)?;
    configure_and_bootstrap(&conn, busy_timeout)?;
    Ok(conn)
}

/// Configures pragmas and creates the counters table if it is missing.
fn configure_and_bootstrap(conn: &Connection, busy_timeout: Duration) -> Result<(), StorageError> {
    // Set first so the pragmas below also wait on a locked database.
    conn.busy_timeout(busy_timeout)?;
    // journal_mode answers with the mode now in effect.
    let _mode: String =
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
    // NORMAL synchronous is safe with WAL mode.
    conn.pragma_update(None, "synchronous", "NORMAL")?;

    conn.execute_batch(CREATE_COUNTERS)
        .map_err(|e| StorageError::Bootstrap(e.to_string()))?;

    Ok(())
}

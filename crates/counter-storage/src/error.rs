//! Storage error types for counter-storage.
//!
//! [`StorageError`] covers every failure the store can report: database
//! access (including lock timeouts), schema bootstrap, and arithmetic
//! overflow of the counter value.

use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Opening, querying, or committing against the database failed.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Creating the counters table failed when the connection was opened.
    #[error("schema bootstrap failed: {0}")]
    Bootstrap(String),

    /// Applying the delta would leave the `i64` range.
    #[error("counter overflow: {current} + {delta}")]
    Overflow { current: i64, delta: i64 },

    /// The in-memory backend's lock was poisoned by a panicking writer.
    #[error("in-memory store lock poisoned")]
    Poisoned,
}

impl StorageError {
    /// Returns true when the database was locked by another writer for
    /// longer than the busy timeout. Such failures are safe to retry.
    pub fn is_busy(&self) -> bool {
        match self {
            StorageError::Database(rusqlite::Error::SqliteFailure(err, _)) => matches!(
                err.code,
                rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked
            ),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busy_failure_is_detected() {
        let err = StorageError::Database(rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_BUSY),
            None,
        ));
        assert!(err.is_busy());
    }

    #[test]
    fn overflow_is_not_busy() {
        let err = StorageError::Overflow {
            current: i64::MAX,
            delta: 1,
        };
        assert!(!err.is_busy());
        assert_eq!(
            err.to_string(),
            format!("counter overflow: {} + 1", i64::MAX)
        );
    }
}

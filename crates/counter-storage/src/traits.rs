//! The [`CounterStore`] trait defining the storage contract for the counter.
//!
//! Every method takes `&self`: a backend is shared across request handlers
//! and must coordinate concurrent callers itself (SQLite through its write
//! lock, the in-memory backend through its cell). Callers never hold a
//! lock across calls.

use crate::error::StorageError;

/// The storage contract for the singleton counter.
///
/// All backends (`SqliteStore`, `InMemoryStore`) implement this trait so the
/// service layer can be handed either one.
pub trait CounterStore: Send + Sync {
    /// Guarantees the counter row exists, creating it with value 0 if absent.
    ///
    /// Idempotent and safe to race: concurrent callers never create a second
    /// row and never fail because another caller won.
    fn ensure_initialized(&self) -> Result<(), StorageError>;

    /// Returns the current value. A missing row reads as 0.
    fn read(&self) -> Result<i64, StorageError>;

    /// Atomically adds `delta` to the current value and returns the new value.
    ///
    /// Concurrent calls serialize: N concurrent calls with delta 1 move the
    /// value by exactly N. On error the stored value is left unchanged.
    fn apply_delta(&self, delta: i64) -> Result<i64, StorageError>;
}

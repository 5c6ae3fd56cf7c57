//! In-memory implementation of [`CounterStore`].
//!
//! [`InMemoryStore`] backs tests and ephemeral runs where persistence isn't
//! needed. The mutex plays the role the database transaction plays in
//! [`SqliteStore`](crate::SqliteStore): each call holds it for exactly one
//! read-modify-write.

use std::sync::Mutex;

use crate::error::StorageError;
use crate::traits::CounterStore;
use crate::types::INITIAL_VALUE;

/// Process-local counter store. `None` means the row was never initialized.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    value: Mutex<Option<i64>>,
}

impl InMemoryStore {
    /// Creates an uninitialized store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once the row has been created.
    pub fn is_initialized(&self) -> Result<bool, StorageError> {
        let cell = self.value.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(cell.is_some())
    }
}

impl CounterStore for InMemoryStore {
    fn ensure_initialized(&self) -> Result<(), StorageError> {
        let mut cell = self.value.lock().map_err(|_| StorageError::Poisoned)?;
        cell.get_or_insert(INITIAL_VALUE);
        Ok(())
    }

    fn read(&self) -> Result<i64, StorageError> {
        let cell = self.value.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(cell.unwrap_or(INITIAL_VALUE))
    }

    fn apply_delta(&self, delta: i64) -> Result<i64, StorageError> {
        let mut cell = self.value.lock().map_err(|_| StorageError::Poisoned)?;
        let current = cell.unwrap_or(INITIAL_VALUE);
        let next = current
            .checked_add(delta)
            .ok_or(StorageError::Overflow { current, delta })?;
        *cell = Some(next);
        Ok(next)
    }
}

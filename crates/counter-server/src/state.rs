//! Application state shared by all handlers.
//!
//! [`AppState`] carries the [`CounterService`] and nothing else. There is no
//! lock around it: the service only holds a store handle, and the store
//! coordinates concurrent requests through the database.

use std::sync::Arc;
use std::time::Duration;

use counter_storage::{CounterStore, InMemoryStore, SqliteStore, StorageError};

use crate::service::CounterService;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The counter service (cloned into each blocking worker).
    pub service: CounterService,
}

impl AppState {
    /// Creates an `AppState` backed by the SQLite database at `db_path`.
    pub fn new(db_path: &str, busy_timeout: Duration) -> Result<Self, StorageError> {
        let store = SqliteStore::with_busy_timeout(db_path, busy_timeout)?;
        Ok(Self::with_store(Arc::new(store)))
    }

    /// Creates an `AppState` over an arbitrary store.
    pub fn with_store(store: Arc<dyn CounterStore>) -> Self {
        AppState {
            service: CounterService::new(store),
        }
    }

    /// Creates an `AppState` over a fresh [`InMemoryStore`] (for testing).
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(InMemoryStore::new()))
    }
}

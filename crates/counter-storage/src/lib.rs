//! Storage for the persisted counter.
//!
//! Provides the [`CounterStore`] trait defining the storage contract, plus
//! the [`SqliteStore`] and [`InMemoryStore`] backends.
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`types`]: CounterId and the singleton constants
//! - [`traits`]: CounterStore trait definition
//! - [`memory`]: InMemoryStore implementation
//! - [`schema`]: SQL schema and connection setup
//! - [`sqlite`]: SqliteStore implementation

pub mod error;
pub mod memory;
pub mod schema;
pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export key types for ergonomic use.
pub use error::StorageError;
pub use memory::InMemoryStore;
pub use sqlite::{SqliteStore, DEFAULT_BUSY_TIMEOUT};
pub use traits::CounterStore;
pub use types::{COUNTER_ID, INITIAL_VALUE};

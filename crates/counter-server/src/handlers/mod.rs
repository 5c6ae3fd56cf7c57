//! HTTP handler modules for the counter API.
//!
//! Handlers parse requests, move the store call onto a blocking worker via
//! [`run_blocking`], and return JSON responses. No business logic lives in
//! handlers.

pub mod counter;
pub mod page;

use crate::error::ApiError;

/// Runs a synchronous service call on tokio's blocking pool.
///
/// SQLite I/O and lock waits never stall the async workers. A worker that
/// panics is reported as a generic internal error.
pub(crate) async fn run_blocking<T, F>(message: &'static str, op: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(op).await.map_err(|err| {
        tracing::error!(error = %err, "{}", message);
        ApiError::StoreUnavailable(message)
    })?
}

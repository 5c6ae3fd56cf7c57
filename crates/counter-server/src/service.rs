//! CounterService: the single coordinator between HTTP handlers and the
//! counter store.
//!
//! All request logic flows through [`CounterService`]; handlers are thin
//! wrappers that move these calls onto a blocking worker. The service owns
//! no state besides the injected store handle, so it is cheap to clone into
//! every request.

use std::sync::Arc;

use counter_storage::{CounterStore, StorageError};

use crate::error::{ApiError, GET_FAILED, UPDATE_FAILED};
use crate::schema::counter::{CountResponse, CounterAction};

/// Request-level counter operations over an injected [`CounterStore`].
#[derive(Clone)]
pub struct CounterService {
    store: Arc<dyn CounterStore>,
}

impl CounterService {
    /// Creates a service over the given store.
    pub fn new(store: Arc<dyn CounterStore>) -> Self {
        CounterService { store }
    }

    /// Returns the current count, creating the counter row on first use.
    ///
    /// Backs `GET /counter`.
    pub fn handle_get(&self) -> Result<CountResponse, ApiError> {
        self.store
            .ensure_initialized()
            .and_then(|()| self.store.read())
            .map(|count| CountResponse { count })
            .map_err(|err| store_failure(GET_FAILED, err))
    }

    /// Applies the requested action and returns the new count.
    ///
    /// Backs `POST /counter`. The action is validated before the store is
    /// touched, so a rejected request never mutates the counter.
    pub fn handle_post(&self, action: Option<&str>) -> Result<CountResponse, ApiError> {
        let action = CounterAction::parse(action)?;

        let count = self
            .store
            .ensure_initialized()
            .and_then(|()| self.store.apply_delta(action.delta()))
            .map_err(|err| store_failure(UPDATE_FAILED, err))?;

        tracing::debug!(action = action.as_str(), count, "counter updated");
        Ok(CountResponse { count })
    }
}

/// Logs the underlying store error and converts it to the generic API error.
fn store_failure(message: &'static str, err: StorageError) -> ApiError {
    tracing::error!(error = %err, busy = err.is_busy(), "{}", message);
    ApiError::StoreUnavailable(message)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use counter_storage::InMemoryStore;

    use super::*;

    /// Store whose every call fails, counting how often it was reached.
    #[derive(Default)]
    struct UnreachableStore {
        calls: AtomicUsize,
    }

    impl UnreachableStore {
        fn fail(&self) -> StorageError {
            self.calls.fetch_add(1, Ordering::SeqCst);
            StorageError::Bootstrap("unable to open database file".to_string())
        }
    }

    impl CounterStore for UnreachableStore {
        fn ensure_initialized(&self) -> Result<(), StorageError> {
            Err(self.fail())
        }

        fn read(&self) -> Result<i64, StorageError> {
            Err(self.fail())
        }

        fn apply_delta(&self, _delta: i64) -> Result<i64, StorageError> {
            Err(self.fail())
        }
    }

    fn service_with(store: Arc<InMemoryStore>) -> CounterService {
        CounterService::new(store)
    }

    #[test]
    fn get_initializes_and_reads_zero() {
        let store = Arc::new(InMemoryStore::new());
        let service = service_with(Arc::clone(&store));

        assert_eq!(service.handle_get().unwrap(), CountResponse { count: 0 });
        assert!(store.is_initialized().unwrap());
    }

    #[test]
    fn post_applies_unit_deltas() {
        let service = service_with(Arc::new(InMemoryStore::new()));

        assert_eq!(service.handle_post(Some("increment")).unwrap().count, 1);
        assert_eq!(service.handle_post(Some("increment")).unwrap().count, 2);
        assert_eq!(service.handle_post(Some("decrement")).unwrap().count, 1);
        assert_eq!(service.handle_get().unwrap().count, 1);
    }

    #[test]
    fn invalid_action_does_not_touch_store() {
        let store = Arc::new(InMemoryStore::new());
        let service = service_with(Arc::clone(&store));

        let err = service.handle_post(Some("bogus")).unwrap_err();
        assert!(matches!(err, ApiError::InvalidAction));
        assert!(!store.is_initialized().unwrap());
    }

    #[test]
    fn invalid_action_is_checked_before_store() {
        let store = Arc::new(UnreachableStore::default());
        let service = CounterService::new(store.clone());

        assert!(matches!(
            service.handle_post(None),
            Err(ApiError::InvalidAction)
        ));
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn store_failures_become_generic_errors() {
        let service = CounterService::new(Arc::new(UnreachableStore::default()));

        let err = service.handle_get().unwrap_err();
        assert_eq!(err.client_message(), GET_FAILED);

        let err = service.handle_post(Some("increment")).unwrap_err();
        assert_eq!(err.client_message(), UPDATE_FAILED);
    }
}

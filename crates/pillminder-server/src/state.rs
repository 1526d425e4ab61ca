//! Application state shared by the handlers.

use pillminder_ai::CompletionProxy;
use pillminder_store::{MedicineCatalog, ReminderStore, StoreError};
use std::sync::Arc;

/// Shared handles passed to every handler.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn ReminderStore>,
    completion: CompletionProxy,
    catalog: Arc<MedicineCatalog>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn ReminderStore>,
        completion: CompletionProxy,
        catalog: MedicineCatalog,
    ) -> Self {
        Self {
            store,
            completion,
            catalog: Arc::new(catalog),
        }
    }

    pub fn completion(&self) -> &CompletionProxy {
        &self.completion
    }

    pub fn catalog(&self) -> &MedicineCatalog {
        &self.catalog
    }

    /// Run one store operation on the blocking pool.
    pub(crate) async fn with_store<T, F>(&self, op: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&dyn ReminderStore) -> Result<T, StoreError> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || op(store.as_ref()))
            .await
            .map_err(|err| StoreError::Unavailable(err.to_string()))?
    }
}

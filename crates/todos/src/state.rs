//! Shared application state.
//!
//! Cloned into every request handler. The only shared resource is the store
//! connection provider; everything else is read-only configuration.

use std::sync::Arc;

use todos_core::document::DocumentPath;

use crate::storage::StoreProvider;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Lazily connected store, shared by all handlers.
    pub store: Arc<StoreProvider>,
    /// Fixed location of the todo list.
    pub path: DocumentPath,
    /// Reject write bodies that are not well-formed JSON.
    pub validate_json: bool,
}

impl AppState {
    /// Creates state around a store provider and the document location.
    pub fn new(store: StoreProvider, path: DocumentPath) -> Self {
        Self {
            store: Arc::new(store),
            path,
            validate_json: false,
        }
    }

    /// Enable or disable JSON validation of write bodies.
    pub fn with_json_validation(mut self, enabled: bool) -> Self {
        self.validate_json = enabled;
        self
    }
}

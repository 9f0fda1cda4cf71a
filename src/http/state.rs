//! Application state for the HTTP server.

use std::sync::Arc;

use crate::store::EntryStore;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Store instance holding all phonebook entries.
    pub store: Arc<dyn EntryStore>,
}

impl AppState {
    /// Create a new application state with the given store.
    pub fn new(store: Arc<dyn EntryStore>) -> Self {
        Self { store }
    }
}

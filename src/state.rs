//! Application state passed to all handlers.

use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    /// The single persisted blob behind all endpoints
    pub store: Store,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

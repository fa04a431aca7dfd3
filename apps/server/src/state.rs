//! Shared handler state.

use std::sync::Arc;

use docrouter_resolver::LibraryRegistry;

/// Read-only state cloned into every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub registry: Arc<LibraryRegistry>,
}

impl AppState {
    pub fn new(registry: LibraryRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}

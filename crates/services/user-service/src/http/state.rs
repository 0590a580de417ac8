//! Application state for dependency injection.

use std::sync::Arc;

use crate::service::AccountService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<dyn AccountService>,
}

impl AppState {
    /// Create new app state.
    pub fn new(accounts: Arc<dyn AccountService>) -> Self {
        Self { accounts }
    }
}

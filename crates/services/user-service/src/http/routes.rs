//! Route configuration.

use axum::Router;

use super::handlers::{health_routes, user_routes};
use super::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/users", user_routes())
        .with_state(state)
}

//! Health check handler.

use axum::{routing::get, Router};

use common::BaseResponse;

use crate::http::state::AppState;

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Liveness probe; does not touch storage.
async fn health_check() -> BaseResponse<&'static str> {
    BaseResponse::success("healthy")
}

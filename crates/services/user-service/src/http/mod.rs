//! HTTP boundary: thin marshaling between JSON and the account service.

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;

//! HTTP endpoint hosting the voice skill (Axum).
//!
//! The platform POSTs the request envelope to `/` and reads the response
//! envelope back. `/health` reports liveness.

pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use state::AppState;

/// Build the application router with default state.
pub fn app() -> Router {
    app_with_state(AppState::new())
}

/// Build the application router with a custom state.
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::skill_routes())
        .with_state(state)
}

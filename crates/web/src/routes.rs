//! Route configuration.

use axum::Router;
use tower_http::services::ServeDir;

use crate::handlers::{health_routes, not_found, page_routes};
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        // Health check
        .nest("/health", health_routes())
        // Bootstrap script and wasm package
        .nest_service("/static", static_files)
        // Site pages
        .merge(page_routes())
        .fallback(not_found)
        .with_state(state)
}

//! Password Analyser site library.
//!
//! Serves the pages that host the analyser form. The form's submission guard
//! runs in the browser (see the `analyser-guard` crate); this crate only
//! renders the page and ships the static assets the guard is loaded from.
//!
//! # Usage
//!
//! ```bash
//! # Build the browser guard into the static directory
//! wasm-pack build crates/guard-wasm --target web --out-dir ../web/static/pkg
//!
//! # Start the server
//! cargo run -p web -- serve --port 3000
//! ```

pub mod config;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod templates;

use std::net::SocketAddr;

use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::{WebConfig, GUARD_BUILD_COMMAND};
use crate::routes::create_router;
use crate::state::AppState;

/// Build the full application router with tracing.
pub fn build_app(config: WebConfig) -> common::AppResult<axum::Router> {
    let state = AppState::build(config)?;
    Ok(create_router(state).layer(TraceLayer::new_for_http()))
}

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: WebConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr: SocketAddr = config.service.bind_address().parse()?;
    info!(
        service = %config.service.service_name,
        static_dir = %config.static_dir.display(),
        "Configuration loaded"
    );

    if !config.guard_package_present() {
        warn!(
            missing = %config.guard_package_path().display(),
            build = GUARD_BUILD_COMMAND,
            "Browser guard not built; the analyser form will submit unguarded"
        );
    }

    let app = build_app(config)?;

    info!("Password analyser listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

//! Page handlers for the analyser site.

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use common::{AppError, AppResult};

use crate::state::AppState;
use crate::templates::{page_context, ANALYSER_PAGE, INDEX_PAGE, SIMULATOR_PAGE};

/// Create page routes.
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/analyser", get(analyser).post(analyser_submit))
        .route("/simulator", get(simulator))
}

fn render(state: &AppState, page: &str) -> AppResult<Html<String>> {
    let ctx = page_context(&state.config.binding);
    let html = state.templates.render(page, &ctx)?;
    Ok(Html(html))
}

/// Landing page.
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    render(&state, INDEX_PAGE)
}

/// Page hosting the guarded analyser form.
pub async fn analyser(State(state): State<AppState>) -> AppResult<Html<String>> {
    render(&state, ANALYSER_PAGE)
}

/// Receives submissions the browser guard let through.
///
/// The body is never read; the submitter is sent back to the form.
pub async fn analyser_submit() -> Redirect {
    tracing::debug!("Analyser form submitted");
    Redirect::to("/analyser")
}

pub async fn simulator(State(state): State<AppState>) -> AppResult<Html<String>> {
    render(&state, SIMULATOR_PAGE)
}

/// Fallback for unknown routes.
pub async fn not_found() -> Response {
    AppError::NotFound.into_response()
}

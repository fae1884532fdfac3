//! HTTP route handlers for the preview server.

use axum::Router;
use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use axum::routing::get;
use site_router::bootstrap::render_page;
use site_router::core::resolver::resolve_location;
use site_router::core::types::Context;
use tracing::{debug, warn};

use crate::state::AppState;

/// Build the API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/context", get(get_context))
}

async fn health() -> &'static str {
    "ok"
}

/// GET / - the page for the request's query string.
pub async fn get_page(State(state): State<AppState>, RawQuery(query): RawQuery) -> Response {
    let location = location(query);
    let site = match state.load_site() {
        Ok(site) => site,
        Err(err) => return load_error(err),
    };
    match render_page(&site, &location).await {
        Ok(page) => {
            debug!(location = %location, strategy = ?page.report.dispatch, "page served");
            Html(page.html).into_response()
        }
        Err(err) => {
            warn!(location = %location, error = %format!("{:#}", err), "page render failed");
            (StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", err)).into_response()
        }
    }
}

/// GET /api/context - the resolved context for the request's query string.
async fn get_context(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<Context>, Response> {
    let site = state.load_site().map_err(load_error)?;
    Ok(Json(resolve_location(&site.config, &location(query))))
}

fn location(query: Option<String>) -> String {
    query.map(|q| format!("?{}", q)).unwrap_or_default()
}

fn load_error(err: anyhow::Error) -> Response {
    warn!(error = %format!("{:#}", err), "site load failed");
    (StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", err)).into_response()
}

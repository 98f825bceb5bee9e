//! Route tables and the assembled application router.

mod common;
mod wiki;

pub use common::common_routes;
pub use wiki::wiki_routes;

use crate::config::Settings;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, http::StatusCode, Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Answer for unknown paths and for unsupported methods on known paths.
pub(crate) async fn endpoint_not_found() -> (StatusCode, Json<&'static str>) {
    (StatusCode::NOT_FOUND, Json("Endpoint not found"))
}

/// Full application: common routes at the root, the API under /v1, a JSON 404
/// for anything else, permissive CORS and per-request tracing.
pub fn app(state: AppState, settings: &Settings) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/v1", wiki_routes(state))
        .fallback(endpoint_not_found)
        .layer(DefaultBodyLimit::max(settings.body_limit_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

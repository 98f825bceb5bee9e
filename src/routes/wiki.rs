//! Wiki routes, mounted under /v1.

use crate::handlers::wiki::{delete as delete_handler, list, read, save, update};
use crate::openapi::openapi_json;
use super::endpoint_not_found;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn wiki_routes(state: AppState) -> Router {
    Router::new()
        .route("/wiki", get(list).post(save).fallback(endpoint_not_found))
        .route(
            "/wiki/:id",
            get(read).patch(update).delete(delete_handler).fallback(endpoint_not_found),
        )
        .route("/openapi.json", get(openapi_json).fallback(endpoint_not_found))
        .with_state(state)
}

//! OpenAPI document for the wiki API, served at GET /v1/openapi.json.

use crate::handlers::wiki;
use crate::model::{Block, Wiki, WikiKind, WikiPayload, WikiRecord};
use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Campaign wiki API"),
    paths(wiki::list, wiki::read, wiki::save, wiki::update, wiki::delete),
    components(schemas(Wiki, WikiRecord, WikiPayload, WikiKind, Block)),
    tags((name = "Wiki", description = "Wiki pages and their blocks"))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

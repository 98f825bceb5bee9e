//! Wiki handlers: list, read, create-or-update, update, delete.

use crate::error::AppError;
use crate::model::{Wiki, WikiPayload, WikiRecord};
use crate::service::WikiService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde_json::Value;

fn parse_id(id_str: &str) -> Result<i32, AppError> {
    match id_str.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::BadRequest("invalid id".into())),
    }
}

fn parse_payload(body: Value) -> Result<WikiPayload, AppError> {
    if !body.is_object() {
        return Err(AppError::BadRequest("body must be a JSON object".into()));
    }
    serde_json::from_value(body).map_err(|e| AppError::BadRequest(e.to_string()))
}

/// List every wiki with its blocks.
#[utoipa::path(
    get,
    path = "/v1/wiki",
    tag = "Wiki",
    responses(
        (status = 200, description = "All wikis", body = [Wiki]),
        (status = 500, description = "Error message", body = String),
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Wiki>>, AppError> {
    let wikis = WikiService::list(state.store.as_ref()).await?;
    Ok(Json(wikis))
}

/// One wiki with its blocks.
#[utoipa::path(
    get,
    path = "/v1/wiki/{id}",
    tag = "Wiki",
    params(("id" = i32, Path, description = "Wiki id")),
    responses(
        (status = 200, description = "The wiki", body = Wiki),
        (status = 400, description = "Invalid id", body = String),
        (status = 404, description = "No such wiki", body = String),
        (status = 500, description = "Error message", body = String),
    )
)]
pub async fn read(State(state): State<AppState>, Path(id_str): Path<String>) -> Result<Json<Wiki>, AppError> {
    let id = parse_id(&id_str)?;
    let wiki = WikiService::get(state.store.as_ref(), id).await?;
    Ok(Json(wiki))
}

/// Insert a wiki, or update it when the body carries an id.
#[utoipa::path(
    post,
    path = "/v1/wiki",
    tag = "Wiki",
    request_body = WikiPayload,
    responses(
        (status = 200, description = "The created or updated wiki", body = WikiRecord),
        (status = 400, description = "Validation error", body = String),
        (status = 404, description = "Update of an unknown wiki", body = String),
        (status = 409, description = "Slug already taken", body = String),
        (status = 500, description = "Error message", body = String),
    )
)]
pub async fn save(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<WikiRecord>, AppError> {
    let Json(body) = body?;
    let payload = parse_payload(body)?;
    let record = WikiService::save(state.store.as_ref(), &payload).await?;
    Ok(Json(record))
}

/// Update the wiki named in the path. A body id is ignored.
#[utoipa::path(
    patch,
    path = "/v1/wiki/{id}",
    tag = "Wiki",
    params(("id" = i32, Path, description = "Wiki id")),
    request_body = WikiPayload,
    responses(
        (status = 200, description = "The updated wiki", body = WikiRecord),
        (status = 400, description = "Validation error", body = String),
        (status = 404, description = "No such wiki", body = String),
        (status = 409, description = "Slug already taken", body = String),
        (status = 500, description = "Error message", body = String),
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<WikiRecord>, AppError> {
    let id = parse_id(&id_str)?;
    let Json(body) = body?;
    let payload = parse_payload(body)?;
    let record = WikiService::update(state.store.as_ref(), id, &payload).await?;
    Ok(Json(record))
}

/// Delete a wiki and its blocks, returning the deleted row.
#[utoipa::path(
    delete,
    path = "/v1/wiki/{id}",
    tag = "Wiki",
    params(("id" = i32, Path, description = "Wiki id")),
    responses(
        (status = 200, description = "The deleted wiki", body = WikiRecord),
        (status = 400, description = "Invalid id", body = String),
        (status = 404, description = "No such wiki", body = String),
        (status = 500, description = "Error message", body = String),
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<WikiRecord>, AppError> {
    let id = parse_id(&id_str)?;
    let record = WikiService::delete(state.store.as_ref(), id).await?;
    Ok(Json(record))
}

//! Wiki operations on top of a `WikiStore`.

use super::RequestValidator;
use crate::error::AppError;
use crate::model::{Wiki, WikiPayload, WikiRecord};
use crate::store::WikiStore;

pub struct WikiService;

impl WikiService {
    pub async fn list(store: &dyn WikiStore) -> Result<Vec<Wiki>, AppError> {
        store.list().await
    }

    /// The wiki with its blocks. A wiki without blocks is still found.
    pub async fn get(store: &dyn WikiStore, id: i32) -> Result<Wiki, AppError> {
        store.find(id).await?.ok_or_else(|| AppError::wiki_not_found(id))
    }

    /// Insert when the payload has no positive id, update otherwise.
    pub async fn save(store: &dyn WikiStore, payload: &WikiPayload) -> Result<WikiRecord, AppError> {
        match payload.id {
            Some(id) if id > 0 => Self::update(store, id, payload).await,
            _ => Self::create(store, payload).await,
        }
    }

    pub async fn create(store: &dyn WikiStore, payload: &WikiPayload) -> Result<WikiRecord, AppError> {
        let fields = RequestValidator::wiki_fields(payload)?;
        let id = store.insert(&fields).await?;
        tracing::info!(id, slug = %fields.slug, "wiki created");
        Ok(WikiRecord {
            id,
            slug: fields.slug,
            title: fields.title,
            full_title: fields.full_title,
            kind: fields.kind,
        })
    }

    pub async fn update(store: &dyn WikiStore, id: i32, payload: &WikiPayload) -> Result<WikiRecord, AppError> {
        let fields = RequestValidator::wiki_fields(payload)?;
        let record = store
            .update(id, &fields)
            .await?
            .ok_or_else(|| AppError::wiki_not_found(id))?;
        tracing::info!(id, "wiki updated");
        Ok(record)
    }

    pub async fn delete(store: &dyn WikiStore, id: i32) -> Result<WikiRecord, AppError> {
        let record = store.delete(id).await?.ok_or_else(|| AppError::wiki_not_found(id))?;
        tracing::info!(id, "wiki deleted");
        Ok(record)
    }
}

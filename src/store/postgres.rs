//! `WikiStore` backed by PostgreSQL through sqlx.

use super::WikiStore;
use crate::error::AppError;
use crate::model::{Block, Wiki, WikiFields, WikiKind, WikiRecord};
use crate::sql;
use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PgWikiStore {
    pool: PgPool,
}

impl PgWikiStore {
    pub fn new(pool: PgPool) -> Self {
        PgWikiStore { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[derive(FromRow)]
struct RecordRow {
    id: i32,
    slug: String,
    title: String,
    full_title: String,
    #[sqlx(rename = "type")]
    kind: String,
}

#[derive(FromRow)]
struct WikiRow {
    #[sqlx(flatten)]
    record: RecordRow,
    block: Json<Vec<Block>>,
}

fn parse_kind(id: i32, raw: &str) -> Result<WikiKind, AppError> {
    raw.parse()
        .map_err(|e| AppError::Db(format!("wiki {} has an invalid type: {}", id, e)))
}

impl TryFrom<RecordRow> for WikiRecord {
    type Error = AppError;

    fn try_from(row: RecordRow) -> Result<Self, Self::Error> {
        Ok(WikiRecord {
            kind: parse_kind(row.id, &row.kind)?,
            id: row.id,
            slug: row.slug,
            title: row.title,
            full_title: row.full_title,
        })
    }
}

impl TryFrom<WikiRow> for Wiki {
    type Error = AppError;

    fn try_from(row: WikiRow) -> Result<Self, Self::Error> {
        let record = WikiRecord::try_from(row.record)?;
        Ok(Wiki {
            id: record.id,
            slug: record.slug,
            title: record.title,
            full_title: record.full_title,
            kind: record.kind,
            block: row.block.0,
        })
    }
}

#[async_trait]
impl WikiStore for PgWikiStore {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query(sql::PING).execute(&self.pool).await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Wiki>, AppError> {
        let sql = sql::list_wikis();
        tracing::debug!(sql = %sql, "query");
        let rows: Vec<WikiRow> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        rows.into_iter().map(Wiki::try_from).collect()
    }

    async fn find(&self, id: i32) -> Result<Option<Wiki>, AppError> {
        let sql = sql::wiki_by_id();
        tracing::debug!(sql = %sql, id, "query");
        let row: Option<WikiRow> = sqlx::query_as(&sql).bind(id).fetch_optional(&self.pool).await?;
        row.map(Wiki::try_from).transpose()
    }

    async fn insert(&self, fields: &WikiFields) -> Result<i32, AppError> {
        tracing::debug!(sql = %sql::NEW_WIKI, slug = %fields.slug, "query");
        let (id,): (i32,) = sqlx::query_as(sql::NEW_WIKI)
            .bind(&fields.slug)
            .bind(&fields.title)
            .bind(fields.kind.as_str())
            .bind(&fields.full_title)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    async fn update(&self, id: i32, fields: &WikiFields) -> Result<Option<WikiRecord>, AppError> {
        tracing::debug!(sql = %sql::UPDATE_WIKI, id, "query");
        let (updated,): (Option<i32>,) = sqlx::query_as(sql::UPDATE_WIKI)
            .bind(&fields.slug)
            .bind(&fields.title)
            .bind(fields.kind.as_str())
            .bind(id)
            .bind(&fields.full_title)
            .fetch_one(&self.pool)
            .await?;
        if updated.is_none() {
            return Ok(None);
        }
        let row: Option<RecordRow> = sqlx::query_as(sql::WIKI_RECORD_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(WikiRecord::try_from).transpose()
    }

    async fn delete(&self, id: i32) -> Result<Option<WikiRecord>, AppError> {
        tracing::debug!(sql = %sql::DELETE_WIKI, id, "query");
        let row: Option<RecordRow> = sqlx::query_as(sql::DELETE_WIKI)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(WikiRecord::try_from).transpose()
    }
}

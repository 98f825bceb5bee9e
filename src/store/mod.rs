//! Persistence seam for wikis, plus database bootstrap helpers.

mod postgres;
#[cfg(test)]
pub(crate) mod memory;

pub use postgres::PgWikiStore;

use crate::config::Settings;
use crate::error::{AppError, ConfigError};
use crate::model::{Wiki, WikiFields, WikiRecord};
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

#[async_trait]
pub trait WikiStore: Send + Sync {
    /// Cheap round trip used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;

    async fn list(&self) -> Result<Vec<Wiki>, AppError>;

    async fn find(&self, id: i32) -> Result<Option<Wiki>, AppError>;

    /// Insert a wiki and return its generated id.
    async fn insert(&self, fields: &WikiFields) -> Result<i32, AppError>;

    /// Overwrite the mutable columns of wiki `id`. None when no such wiki.
    async fn update(&self, id: i32, fields: &WikiFields) -> Result<Option<WikiRecord>, AppError>;

    /// Remove wiki `id` (its blocks go with it). Returns the deleted row.
    async fn delete(&self, id: i32) -> Result<Option<WikiRecord>, AppError>;
}

/// Open the process-wide pool. Close it with `PgPool::close` on shutdown.
pub async fn connect(settings: &Settings) -> Result<PgPool, AppError> {
    let opts = PgConnectOptions::from_str(&settings.database_url)
        .map_err(|e| ConfigError::DatabaseUrl(e.to_string()))?;
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

/// Make sure the database named in `database_url` exists, creating it through
/// the `postgres` maintenance database when it does not.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = split_database_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = PgConnectOptions::from_str(&admin_url).map_err(|e| ConfigError::DatabaseUrl(e.to_string()))?;
    let mut conn = opts.connect().await?;
    let (exists,): (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Split `postgres://host/db?opts` into (`postgres://host/postgres?opts`, `db`).
fn split_database_url(url: &str) -> Result<(String, String), ConfigError> {
    let scheme_end = url.find("://").map(|i| i + 3).unwrap_or(0);
    let path_start = url[scheme_end..]
        .find('/')
        .map(|i| scheme_end + i + 1)
        .ok_or_else(|| ConfigError::DatabaseUrl("missing database name".into()))?;
    let rest = &url[path_start..];
    let (db_name, query) = match rest.split_once('?') {
        Some((name, q)) => (name, Some(q)),
        None => (rest, None),
    };
    let mut admin_url = format!("{}postgres", &url[..path_start]);
    if let Some(q) = query {
        admin_url.push('?');
        admin_url.push_str(q);
    }
    Ok((admin_url, db_name.trim().to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

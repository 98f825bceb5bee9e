//! Idempotent DDL for the wiki schema: tables `wiki` and `block`, and the
//! `new_wiki` / `update_wiki` routines used for insert and update.

use crate::error::AppError;
use sqlx::PgPool;

const WIKI_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS wiki (
    id SERIAL PRIMARY KEY,
    slug TEXT NOT NULL UNIQUE,
    title TEXT NOT NULL,
    full_title TEXT NOT NULL,
    type TEXT NOT NULL CHECK (type IN ('region', 'general'))
)
"#;

const BLOCK_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS block (
    id SERIAL PRIMARY KEY,
    title TEXT NOT NULL,
    content TEXT NOT NULL DEFAULT '',
    wiki_id INTEGER NOT NULL REFERENCES wiki (id) ON DELETE CASCADE
)
"#;

const BLOCK_WIKI_INDEX: &str = "CREATE INDEX IF NOT EXISTS block_wiki_id_idx ON block (wiki_id)";

const NEW_WIKI_FN: &str = r#"
CREATE OR REPLACE FUNCTION new_wiki(p_slug TEXT, p_title TEXT, p_type TEXT, p_full_title TEXT)
RETURNS INTEGER AS $$
    INSERT INTO wiki (slug, title, type, full_title)
    VALUES (p_slug, p_title, p_type, p_full_title)
    RETURNING id;
$$ LANGUAGE sql
"#;

const UPDATE_WIKI_FN: &str = r#"
CREATE OR REPLACE FUNCTION update_wiki(p_slug TEXT, p_title TEXT, p_type TEXT, p_id INTEGER, p_full_title TEXT)
RETURNS INTEGER AS $$
    UPDATE wiki
    SET slug = p_slug, title = p_title, type = p_type, full_title = p_full_title
    WHERE id = p_id
    RETURNING id;
$$ LANGUAGE sql
"#;

/// Statements in dependency order.
pub const STATEMENTS: &[(&str, &str)] = &[
    ("wiki table", WIKI_TABLE),
    ("block table", BLOCK_TABLE),
    ("block wiki_id index", BLOCK_WIKI_INDEX),
    ("new_wiki", NEW_WIKI_FN),
    ("update_wiki", UPDATE_WIKI_FN),
];

/// Create tables and routines if missing. Safe to run on every start.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    for (name, sql) in STATEMENTS {
        tracing::debug!(step = %name, "migration");
        sqlx::query(sql).execute(pool).await?;
    }
    tracing::info!(steps = STATEMENTS.len(), "wiki schema up to date");
    Ok(())
}

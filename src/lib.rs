//! Campaign wiki: REST backend for wiki pages and their content blocks, on PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod openapi;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use model::{Block, Wiki, WikiKind, WikiPayload, WikiRecord};
pub use routes::{app, common_routes, wiki_routes};
pub use service::WikiService;
pub use state::AppState;
pub use store::{connect, ensure_database_exists, PgWikiStore, WikiStore};

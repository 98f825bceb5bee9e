//! Typed errors and HTTP mapping.
//!
//! Error bodies are a bare JSON string holding the message, e.g. `"Wiki 7 not found"`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sqlx::error::ErrorKind;
use sqlx::postgres::PgDatabaseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
    #[error("invalid DATABASE_URL: {0}")]
    DatabaseUrl(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Db(String),
    /// A request the extractors refused (malformed JSON, wrong content type, body too large).
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
}

impl AppError {
    pub fn wiki_not_found(id: i32) -> Self {
        AppError::NotFound(format!("Wiki {} not found", id))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Config(_) | AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Rejected { status, .. } => *status,
        }
    }
}

/// Driver errors keep their class: constraint violations become 4xx, the rest 500.
/// The message prefers the Postgres `detail` field when the server sent one.
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        let sqlx::Error::Database(db) = &e else {
            return AppError::Db(e.to_string());
        };
        let message = match db
            .try_downcast_ref::<PgDatabaseError>()
            .and_then(PgDatabaseError::detail)
        {
            Some(detail) => detail.to_string(),
            None => db.message().to_string(),
        };
        match db.kind() {
            ErrorKind::UniqueViolation => AppError::Conflict(message),
            ErrorKind::ForeignKeyViolation | ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                AppError::BadRequest(message)
            }
            _ => AppError::Db(message),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %message, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %message, "request rejected");
        }
        (status, Json(message)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_keeps_its_status() {
        let err = AppError::wiki_not_found(999999);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Wiki 999999 not found");
    }

    #[test]
    fn plain_driver_errors_are_internal() {
        let err = AppError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn body_is_the_bare_message() {
        let response = AppError::Conflict("Key (slug)=(forest) already exists.".into()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!("Key (slug)=(forest) already exists."));
    }
}

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum DirectoryError {
    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Password hash error: {0}")]
    PasswordHash(String),

    #[error("Blocking task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl From<argon2::password_hash::Error> for DirectoryError {
    fn from(e: argon2::password_hash::Error) -> Self {
        DirectoryError::PasswordHash(e.to_string())
    }
}

impl DirectoryError {
    /// True when the database rejected a write on a UNIQUE constraint.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            DirectoryError::DatabaseError(SqlxError::Database(db)) => db.is_unique_violation(),
            _ => false,
        }
    }
}

impl IntoResponse for DirectoryError {
    fn into_response(self) -> axum::response::Response {
        let (status, code, message) = match &self {
            DirectoryError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND", self.to_string()),
            DirectoryError::DuplicateEmail => (StatusCode::CONFLICT, "CONFLICT", self.to_string()),
            DirectoryError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", self.to_string())
            }
            DirectoryError::DatabaseError(_)
            | DirectoryError::Json(_)
            | DirectoryError::PasswordHash(_)
            | DirectoryError::TaskJoin(_) => {
                error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred.".to_string(),
                )
            }
        };
        let body = ApiErrorResponse {
            error: ApiErrorBody {
                code: code.to_string(),
                message,
            },
        };
        (status, Json(body)).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

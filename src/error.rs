use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Error: Data must be sent as JSON.")]
    NotJson,

    #[error("Error: {0}")]
    BadRequest(String),

    #[error("Error: Username Taken")]
    UsernameTaken,

    #[error("User NOT Verified")]
    Unauthorized,

    #[error("Error: No existing book with id {0}.")]
    BookNotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotJson | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::UsernameTaken => StatusCode::CONFLICT,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::BookNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) | AppError::Json(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

// Convert AppError to an HTTP response
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match self {
            AppError::Database(_) => "Database error".into(),
            AppError::Internal(_) => "Internal server error".into(),
            AppError::Json(_) => "JSON error".into(),
            _ => self.to_string(),
        };

        if status.is_server_error() {
            tracing::error!(?self);
        } else {
            tracing::warn!(%status, "{}", self);
        }

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub type Result<T> = std::result::Result<T, AppError>;

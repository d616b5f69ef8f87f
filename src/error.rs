use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::constants::{
    ERR_INTERNAL, ERR_INVALID_REQUEST_BODY, ERR_PASSWORD_MISMATCH, ERR_PASSWORD_REQUIRED,
    ERR_REVIEW_NOT_FOUND, ERR_STORE_NOT_FOUND,
};

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Store not found")]
    StoreNotFound,

    #[error("Review not found")]
    ReviewNotFound,

    #[error("Edit password required")]
    PasswordRequired,

    #[error("Edit password mismatch")]
    InvalidPassword,

    #[error("Malformed JSON body: {0}")]
    JsonRejection(#[from] JsonRejection),

    #[error("Malformed query string: {0}")]
    QueryRejection(#[from] QueryRejection),
}

impl AppError {
    /// HTTP status this error is reported with
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidInput(_)
            | AppError::PasswordRequired
            | AppError::JsonRejection(_)
            | AppError::QueryRejection(_) => StatusCode::BAD_REQUEST,
            AppError::StoreNotFound | AppError::ReviewNotFound => StatusCode::NOT_FOUND,
            AppError::InvalidPassword => StatusCode::UNAUTHORIZED,
        }
    }
}

/// Implement IntoResponse to convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                ERR_INTERNAL
            }
            AppError::InvalidInput(ref msg) => msg.as_str(),
            AppError::StoreNotFound => ERR_STORE_NOT_FOUND,
            AppError::ReviewNotFound => ERR_REVIEW_NOT_FOUND,
            AppError::PasswordRequired => ERR_PASSWORD_REQUIRED,
            AppError::InvalidPassword => ERR_PASSWORD_MISMATCH,
            AppError::JsonRejection(ref e) => {
                tracing::debug!("Rejected JSON body: {}", e.body_text());
                ERR_INVALID_REQUEST_BODY
            }
            AppError::QueryRejection(ref e) => {
                tracing::debug!("Rejected query string: {}", e.body_text());
                ERR_INVALID_REQUEST_BODY
            }
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;

/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use vidshelf_core::ShelfError;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] ShelfError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ServerError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ServerError::Catalog(err) => match err {
                ShelfError::DuplicateKey { .. } => (StatusCode::CONFLICT, err.to_string()),
                ShelfError::NotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()),
                ShelfError::InvalidArgument(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                ShelfError::StorageFailure(_) | ShelfError::Migration(_) => {
                    tracing::error!("Storage error: {:?}", err);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Storage error".to_string(),
                    )
                }
            },
            ServerError::Config(msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_message) = self.status_and_message();

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

//! Application error types and HTTP response mapping.
//!
//! The blame engine itself cannot fail; every variant here comes from
//! ingestion (tile, expectations, git) or from the service around it.
//!
//! Error mappings:
//! - `InvalidTile` → 422
//! - `Io`, `Json`, `Git`, `Internal` → 500

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Invalid tile: {0}")]
    InvalidTile(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidTile(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Io(_) | AppError::Json(_) | AppError::Git(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use lmpk_core::StorageError;
use thiserror::Error;
use tracing::error;

use crate::model::ResponseCode;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("failed to read index template {path}: {source}")]
    Template {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("redirect target is not a valid header value: {0}")]
    InvalidLocation(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %self, "request failed");

        match self {
            AppError::Storage(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ResponseCode::STORAGE_UNAVAILABLE),
            )
                .into_response(),
            AppError::Template { .. } | AppError::InvalidLocation(_) => {
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

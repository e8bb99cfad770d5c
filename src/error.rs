use std::{io, path::PathBuf};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to copy {} -> {}: {source}", from.display(), to.display())]
    CopyAsset {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, error_message) = match self {
            AppError::NotFound(path) => {
                warn!("No route or public file for {path}");
                (
                    StatusCode::NOT_FOUND,
                    "not_found_error",
                    format!("No page or asset at {path}"),
                )
            }
            err @ (AppError::CreateDir { .. } | AppError::CopyAsset { .. }) => {
                error!("Asset Error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "api_error",
                    err.to_string(),
                )
            }
        };

        let body = Json(json!({
            "type": "error",
            "error": {
                "type": error_type,
                "message": error_message
            }
        }));

        (status, body).into_response()
    }
}

impl From<AppError> for std::io::Error {
    fn from(error: AppError) -> Self {
        std::io::Error::other(error)
    }
}

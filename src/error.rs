//! Application errors (C10) and their HTTP representation.

use std::error::Error;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use tracing::error;

use crate::store::StoreError;

#[derive(Debug, Serialize)]
pub struct ErrorWrapper {
    error: ProblemDetails,
}

impl ErrorWrapper {
    pub fn new(error: ProblemDetails) -> Self {
        Self { error }
    }
}

#[derive(Debug, Serialize)]
pub struct ProblemDetails {
    title: String,
    detail: Option<String>,
}

/// Application errors that can be automatically turned into an appropriate
/// HTTP response.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("mapping store error")]
    Store(#[from] StoreError),

    #[error("upstream request failed")]
    Upstream(#[from] reqwest::Error),

    #[error("json serialization error")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Serde(_) => StatusCode::BAD_REQUEST,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(status = ?status, message = ?self, details = ?self.source());
        }

        let body = Json(ErrorWrapper::new(ProblemDetails {
            title: self.to_string(),
            detail: self.source().map(ToString::to_string),
        }));

        (status, body).into_response()
    }
}

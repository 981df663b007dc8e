use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::consultant::CompletionError;
use crate::models::ErrorBody;

/// Failure reported to an HTTP caller as `{"error": "..."}`
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<CompletionError> for AppError {
    fn from(err: CompletionError) -> Self {
        AppError::Internal(err.to_string())
    }
}

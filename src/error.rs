//! HTTP-facing error type.
//!
//! Every failure a handler can produce is an [`AppError`]. It renders as a
//! status code plus a `{"message": "..."}` JSON body. Internal causes are
//! logged where they happen and never leak into the response.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::store::StoreError;

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// Input validation failures, checked in this order: title, then link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title is empty")]
    TitleEmpty,
    #[error("link is empty")]
    LinkEmpty,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("method not allowed")]
    MethodNotAllowed,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("link not found")]
    NotFound,

    /// Decode failures, backend errors and (un)marshalling failures.
    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { .. } => AppError::NotFound,
            StoreError::Database(_) | StoreError::Backend(_) => AppError::Internal,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            message: self.to_string(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

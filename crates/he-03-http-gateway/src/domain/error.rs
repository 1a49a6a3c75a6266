//! Gateway error types and their HTTP mapping.
//!
//! Each known failure kind maps to a fixed status and a `{"message": ...}`
//! body. Internal failures are logged and answered with a generic message.

use axum::extract::rejection::BytesRejection;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use he_01_item_store::StoreError;
use he_02_processing::ProcessingError;
use std::fmt;
use tracing::error;

use crate::domain::types::MessageResult;

/// Message returned for unknown paths
pub const NOT_FOUND_MESSAGE: &str = "Can't find requested resource";

/// Message returned when `password` is missing or empty
pub const PASSWORD_REQUIRED_MESSAGE: &str = "Required input: password";

/// Message returned when the request body exceeds the configured limit
pub const BODY_TOO_LARGE_MESSAGE: &str = "Request body too large";

const INTERNAL_MESSAGE: &str = "Internal server error";

/// Error categories the boundary knows how to answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Missing or malformed request input (422)
    Validation,
    /// Unknown resource or item not yet completed (404)
    NotFound,
    /// Request body over `max_request_size` (413)
    PayloadTooLarge,
    /// Known path, wrong method (405)
    MethodNotAllowed,
    /// Service is shutting down (503)
    Unavailable,
    /// Anything unexpected (500)
    Internal,
}

impl ApiErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            ApiErrorKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
            ApiErrorKind::NotFound => StatusCode::NOT_FOUND,
            ApiErrorKind::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiErrorKind::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiErrorKind::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error answered to an HTTP caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Missing or malformed input
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Validation, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::NotFound, message)
    }

    /// Wrong method on a known path
    pub fn method_not_allowed(method: &Method) -> Self {
        Self::new(
            ApiErrorKind::MethodNotAllowed,
            format!("{} is not allowed", method),
        )
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Unavailable, message)
    }

    /// Unexpected failure; `details` is logged, never returned
    pub fn internal(details: impl fmt::Display) -> Self {
        error!(error = %details, "[he-03] Internal error");
        Self::new(ApiErrorKind::Internal, INTERNAL_MESSAGE)
    }

    pub fn status(&self) -> StatusCode {
        self.kind.status()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status().as_u16(), self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(MessageResult { message: self.message })).into_response()
    }
}

impl From<ProcessingError> for ApiError {
    fn from(e: ProcessingError) -> Self {
        match e {
            ProcessingError::Store(StoreError::NotFound(id)) => {
                ApiError::not_found(format!("No item found at {}", id))
            }
            ProcessingError::ShuttingDown => ApiError::unavailable("Service is shutting down"),
            other => ApiError::internal(other),
        }
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::new(ApiErrorKind::PayloadTooLarge, BODY_TOO_LARGE_MESSAGE)
        } else {
            ApiError::validation(rejection.body_text())
        }
    }
}

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Gateway-level errors (startup and serve loop)
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Server socket bind error
    #[error("server bind error: {0}")]
    Bind(String),

    /// Listener failed while serving
    #[error("server error: {0}")]
    Serve(String),
}

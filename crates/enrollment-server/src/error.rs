//! Server error types
//!
//! `ServerError` is the only place failures become HTTP responses. Handlers
//! return `Result<_, ServerError>` and use `?` on core errors.

use crate::api::rest::types::ApiResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use enrollment_core::{StoreError, ValidationError};
use std::any::Any;
use std::fmt;
use tracing::{error, warn};

/// Message shown to clients for any unexpected failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Something is wrong, please try again";

/// Server error type
#[derive(Debug)]
pub enum ServerError {
    /// Path parameter or body failed validation
    Validation(ValidationError),

    /// Body could not be read as JSON
    InvalidRequest(String),

    /// Path parameter could not be decoded
    InvalidPath(String),

    /// Body exceeds the size limit
    PayloadTooLarge(String),

    /// Not found
    NotFound(String),

    /// Id already taken
    Conflict(String),

    /// Internal server error
    InternalError(String),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Validation(err) => write!(f, "Validation failed: {}", err),
            ServerError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            ServerError::InvalidPath(msg) => write!(f, "Invalid path: {}", msg),
            ServerError::PayloadTooLarge(msg) => write!(f, "Payload too large: {}", msg),
            ServerError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ServerError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ServerError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ServerError {}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Validation(_)
            | ServerError::InvalidRequest(_)
            | ServerError::InvalidPath(_) => StatusCode::BAD_REQUEST,
            ServerError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::Conflict(_) => StatusCode::CONFLICT,
            ServerError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            ServerError::Validation(err) => {
                warn!(field = ?err.field(), "Rejected request: {}", err);
                ApiResponse::failure("Validation failed").with_errors(err.to_string())
            }
            ServerError::InvalidRequest(msg) => {
                warn!("Rejected request body: {}", msg);
                ApiResponse::failure("Invalid JSON body").with_errors(msg)
            }
            ServerError::InvalidPath(msg) => {
                warn!("Rejected request path: {}", msg);
                ApiResponse::failure("Validation failed").with_errors(msg)
            }
            ServerError::PayloadTooLarge(msg) => {
                warn!("Rejected request body: {}", msg);
                ApiResponse::failure("Payload too large").with_errors(msg)
            }
            ServerError::NotFound(msg) | ServerError::Conflict(msg) => ApiResponse::failure(msg),
            ServerError::InternalError(msg) => {
                error!("Request failed: {}", msg);
                ApiResponse::failure(INTERNAL_ERROR_MESSAGE).with_error(msg)
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ServerError {
    fn from(err: ValidationError) -> Self {
        ServerError::Validation(err)
    }
}

impl From<StoreError> for ServerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => ServerError::NotFound(err.to_string()),
            StoreError::Conflict { .. } => ServerError::Conflict(err.to_string()),
        }
    }
}

/// Turn a handler panic into the standard 500 envelope
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    ServerError::InternalError(detail).into_response()
}

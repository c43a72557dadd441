//! Server error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fraudcheck_core::validation::FieldError;
use fraudcheck_sdk::{RuntimeError, SdkError};
use serde_json::json;
use std::fmt;

/// Server error type
#[derive(Debug)]
pub enum ServerError {
    /// Request fields failed validation
    Validation(Vec<FieldError>),

    /// Invalid request
    InvalidRequest(String),

    /// Fraud check cancelled before it completed
    Interrupted(String),

    /// Stub routing found no matching stub
    NoStubRegistered(String),

    /// Internal server error
    InternalError(String),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Validation(errors) => {
                write!(f, "Validation failed: {} field error(s)", errors.len())
            }
            ServerError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            ServerError::Interrupted(msg) => write!(f, "Interrupted: {}", msg),
            ServerError::NoStubRegistered(msg) => write!(f, "No stub: {}", msg),
            ServerError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ServerError {}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ServerError::Validation(errors) => {
                let body = Json(json!({ "validationErrors": errors }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            ServerError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ServerError::Interrupted(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ServerError::NoStubRegistered(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ServerError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

impl From<Vec<FieldError>> for ServerError {
    fn from(errors: Vec<FieldError>) -> Self {
        ServerError::Validation(errors)
    }
}

impl From<SdkError> for ServerError {
    fn from(err: SdkError) -> Self {
        let message = err.to_string();
        match err {
            SdkError::Runtime(RuntimeError::Interrupted) => ServerError::Interrupted(message),
            SdkError::Runtime(RuntimeError::NoStubRegistered { .. }) => {
                ServerError::NoStubRegistered(message)
            }
            SdkError::Runtime(RuntimeError::Validation(_)) => ServerError::InvalidRequest(message),
            _ => ServerError::InternalError(message),
        }
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::InternalError(err.to_string())
    }
}

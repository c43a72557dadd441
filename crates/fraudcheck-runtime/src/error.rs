//! Runtime error types

use fraudcheck_core::CoreError;
use thiserror::Error;

/// Runtime error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuntimeError {
    /// A suspended check was cancelled before it completed
    #[error("Fraud check interrupted before completion")]
    Interrupted,

    /// Stub routing is active but nothing is registered for the request
    #[error("No stub registered for endpoint '{endpoint}'")]
    NoStubRegistered { endpoint: String },

    /// Malformed configuration input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Core value error
    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;

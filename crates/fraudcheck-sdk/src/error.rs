//! SDK error types

use fraudcheck_runtime::RuntimeError;
use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error raised by a verification service or the stub registry
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl SdkError {
    /// The check was cancelled before it completed
    pub fn is_interrupted(&self) -> bool {
        matches!(self, SdkError::Runtime(RuntimeError::Interrupted))
    }

    /// Stub routing found no matching stub
    pub fn is_no_stub_registered(&self) -> bool {
        matches!(self, SdkError::Runtime(RuntimeError::NoStubRegistered { .. }))
    }

    /// Malformed test-setup input
    pub fn is_validation(&self) -> bool {
        matches!(self, SdkError::Runtime(RuntimeError::Validation(_)))
    }
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;

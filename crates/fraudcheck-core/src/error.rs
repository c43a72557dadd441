//! Error types for the Fraud Checker core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Invalid currency code: '{0}'")]
    InvalidCurrency(String),

    #[error("For addition the currencies must be same! ({left} vs {right})")]
    CurrencyMismatch { left: String, right: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;

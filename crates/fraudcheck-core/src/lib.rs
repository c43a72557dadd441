//! Fraud Checker Core - value types and the fraud decision rule
//!
//! This crate provides the fundamental types shared by the rest of the workspace:
//! - `Money` and `CreditCard`, the inputs to a fraud check
//! - `FraudStatus` and the pure `decide` function that combines the check outcomes
//! - Field validators used by the transport layer before values reach the core
//! - Error types

pub mod error;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use error::CoreError;
pub use types::{
    decide, AvStatus, CreditCard, Currency, CvvStatus, FraudCheckRequest, FraudStatus, Money,
    OverallStatus,
};

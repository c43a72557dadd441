//! REST API implementation
//!
//! - types: Request/response type definitions
//! - extractors: Custom request extractors
//! - validation: Field validation of fraud check payloads
//! - handlers: API endpoint handlers
//! - router: Router creation and configuration

mod extractors;
mod handlers;
mod router;
pub mod types;
pub mod validation;

// Re-export public API
pub use extractors::JsonExtractor;
pub use router::create_router;
pub use types::{
    AppState, CreditCardPayload, DelayParams, FraudCheckPayload, HealthResponse, MoneyPayload,
    PongResponse, StubPayload, StubRegisteredResponse, StubbingParams,
};

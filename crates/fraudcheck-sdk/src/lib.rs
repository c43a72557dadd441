//! Fraud Checker SDK
//!
//! High-level API for running fraud checks and driving the test-setup
//! controls (route mode, stubs, stub delay).

pub mod builder;
pub mod checker;
pub mod config;
pub mod error;

// Re-export main types
pub use builder::FraudCheckerBuilder;
pub use checker::FraudChecker;
pub use config::{CheckerConfig, DEFAULT_STUB_ENDPOINT};
pub use error::{Result, SdkError};

// Re-export commonly used types from dependencies
pub use fraudcheck_core::{
    AvStatus, CreditCard, Currency, CvvStatus, FraudCheckRequest, FraudStatus, Money,
    OverallStatus,
};
pub use fraudcheck_runtime::{
    cancellation, CancelSignal, Canceller, Clock, FixedClock, RandomSource, RouteMode,
    RuntimeError, ScriptedRandom, SeededRandom, StubEntry, SystemClock, MAX_STUB_DELAY_MS,
};

//! Fraud Checker Runtime - verification strategies and test-control state
//!
//! This crate provides the stateful part of the fraud checker:
//! - the simulated "real" verification service and the stubbed one
//! - the router that switches traffic between them at runtime
//! - the concurrent stub registry with its configurable response delay
//! - injectable randomness, clock and cancellation

pub mod cancel;
pub mod clock;
pub mod error;
pub mod random;
pub mod registry;
pub mod router;
pub mod strategy;
pub mod stub;

// Re-export main types
pub use cancel::{cancellation, CancelSignal, Canceller};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Result, RuntimeError};
pub use random::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
pub use registry::{StubRegistry, MAX_STUB_DELAY_MS};
pub use router::{RouteMode, VerificationRouter};
pub use strategy::{SimulatedVerificationService, StubbedVerificationService, VerificationService};
pub use stub::StubEntry;

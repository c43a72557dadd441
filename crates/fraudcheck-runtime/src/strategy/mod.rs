//! Verification service implementations
//!
//! Backends that turn a fraud check request into a `FraudStatus`.

mod simulated;
mod stubbed;

pub use simulated::{SimulatedVerificationService, CVV_DELAY_MAX_MS, CVV_DELAY_MIN_MS};
pub use stubbed::StubbedVerificationService;

use crate::cancel::CancelSignal;
use crate::error::Result;
use fraudcheck_core::{FraudCheckRequest, FraudStatus};

/// Trait for fraud verification backends
#[async_trait::async_trait]
pub trait VerificationService: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Verify a transaction, giving up with `Interrupted` when `cancel` fires
    async fn verify_transaction_authenticity(
        &self,
        request: &FraudCheckRequest,
        cancel: &CancelSignal,
    ) -> Result<FraudStatus>;
}

//! Simulated bank verification
//!
//! Stands in for the issuing bank: the CVV check answers after a random
//! 2-5 second delay, the address check answers immediately, and both
//! outcomes are random.

use super::VerificationService;
use crate::cancel::CancelSignal;
use crate::clock::Clock;
use crate::error::Result;
use crate::random::RandomSource;
use fraudcheck_core::{AvStatus, CreditCard, CvvStatus, FraudCheckRequest, FraudStatus};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Lower bound (inclusive) of the simulated CVV check latency
pub const CVV_DELAY_MIN_MS: u32 = 2000;

/// Upper bound (exclusive) of the simulated CVV check latency
pub const CVV_DELAY_MAX_MS: u32 = 5000;

/// Randomised stand-in for the real bank checks
///
/// Draws happen in a fixed order: CVV delay, CVV outcome, address outcome.
pub struct SimulatedVerificationService {
    random: Arc<dyn RandomSource>,
    clock: Arc<dyn Clock>,
}

impl SimulatedVerificationService {
    pub fn new(random: Arc<dyn RandomSource>, clock: Arc<dyn Clock>) -> Self {
        Self { random, clock }
    }

    async fn verify_cvv(&self, _card: &CreditCard, cancel: &CancelSignal) -> Result<CvvStatus> {
        let sleep_millis = self.random.between(CVV_DELAY_MIN_MS, CVV_DELAY_MAX_MS);
        info!(
            "verifyCVV() will respond after {:.3} seconds",
            sleep_millis as f64 / 1000.0
        );
        cancel
            .sleep(Duration::from_millis(u64::from(sleep_millis)))
            .await?;

        let code = self.random.between(0, 2);
        debug!("verifyCVV() generating response for value {}", code);
        Ok(CvvStatus::from_code(code)?)
    }

    fn verify_address_with_issuing_bank(&self, _card: &CreditCard) -> Result<AvStatus> {
        let code = self.random.between(0, 2);
        debug!(
            "verifyAddressWithIssuingBank() generating response for value {}",
            code
        );
        Ok(AvStatus::from_code(code)?)
    }
}

#[async_trait::async_trait]
impl VerificationService for SimulatedVerificationService {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn verify_transaction_authenticity(
        &self,
        request: &FraudCheckRequest,
        cancel: &CancelSignal,
    ) -> Result<FraudStatus> {
        let card = &request.credit_card;
        let cvv_status = self.verify_cvv(card, cancel).await?;
        let av_status = self.verify_address_with_issuing_bank(card)?;
        let has_expired = card.has_expired_at(self.clock.now());

        Ok(FraudStatus::new(cvv_status, av_status, has_expired))
    }
}

//! FraudChecker - main entry point for fraud checks and test setup

use crate::config::CheckerConfig;
use crate::error::Result;
use fraudcheck_core::{CreditCard, FraudCheckRequest, FraudStatus, Money};
use fraudcheck_runtime::{CancelSignal, RouteMode, StubEntry, StubRegistry, VerificationRouter};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Fraud checker facade
///
/// Owns the verification router and the stub registry. Cloning is cheap and
/// every clone shares the same routing and stub state, so a single checker
/// can be handed to each request handler.
#[derive(Clone)]
pub struct FraudChecker {
    config: Arc<CheckerConfig>,
    router: Arc<VerificationRouter>,
    registry: Arc<StubRegistry>,
}

impl FraudChecker {
    pub(crate) fn new(
        config: CheckerConfig,
        router: Arc<VerificationRouter>,
        registry: Arc<StubRegistry>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            router,
            registry,
        }
    }

    /// Run a fraud check against the currently routed service
    pub async fn check_fraud(&self, credit_card: CreditCard, charge: Money) -> Result<FraudStatus> {
        self.check_fraud_with_cancel(credit_card, charge, &CancelSignal::never())
            .await
    }

    /// Run a fraud check that stops with `Interrupted` once `cancel` fires
    pub async fn check_fraud_with_cancel(
        &self,
        credit_card: CreditCard,
        charge: Money,
        cancel: &CancelSignal,
    ) -> Result<FraudStatus> {
        let request = FraudCheckRequest::new(credit_card, charge);
        let (route, result) = self.router.dispatch(&request, cancel).await;

        match result {
            Ok(status) => {
                info!("Fraud check via {} route: {}", route, status);
                Ok(status)
            }
            Err(e) => {
                warn!("Fraud check via {} route failed: {}", route, e);
                Err(e.into())
            }
        }
    }

    /// Switch between the simulated and the stubbed service
    pub fn set_route_mode(&self, mode: RouteMode) {
        self.router.set_mode(mode);
    }

    pub fn route_mode(&self) -> RouteMode {
        self.router.mode()
    }

    /// Register a canned response for `endpoint`
    ///
    /// A `request` of `None` matches any request. Registering again for the
    /// same endpoint replaces the previous stub.
    pub async fn register_stub(
        &self,
        endpoint: impl Into<String>,
        request: Option<FraudCheckRequest>,
        response: FraudStatus,
    ) -> StubEntry {
        let entry = StubEntry::new(endpoint, request, response);
        self.registry.put(entry.clone()).await;
        entry
    }

    pub async fn list_stubs(&self) -> Vec<StubEntry> {
        self.registry.list().await
    }

    pub async fn clear_stubs(&self) {
        self.registry.clear().await;
        info!("Cleared all stubs");
    }

    /// Set the delay applied before each stubbed response (0..=99999 ms)
    pub fn set_stub_delay(&self, millis: i64) -> Result<()> {
        Ok(self.registry.set_delay(millis)?)
    }

    pub fn stub_delay(&self) -> Duration {
        self.registry.delay()
    }

    /// Endpoint key the stubbed service answers for
    pub fn stub_endpoint(&self) -> &str {
        &self.config.stub_endpoint
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }
}

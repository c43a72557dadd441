//! Stubbed verification backed by the stub registry

use super::VerificationService;
use crate::cancel::CancelSignal;
use crate::error::{Result, RuntimeError};
use crate::registry::StubRegistry;
use fraudcheck_core::{FraudCheckRequest, FraudStatus};
use std::sync::Arc;
use tracing::{info, warn};

/// Answers with the canned response registered for its endpoint
///
/// Waits for the registry's configured delay first. A missing stub, or one
/// registered for a different request, is an error rather than a fallback.
pub struct StubbedVerificationService {
    registry: Arc<StubRegistry>,
    endpoint: String,
}

impl StubbedVerificationService {
    pub fn new(registry: Arc<StubRegistry>, endpoint: impl Into<String>) -> Self {
        Self {
            registry,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait::async_trait]
impl VerificationService for StubbedVerificationService {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn verify_transaction_authenticity(
        &self,
        request: &FraudCheckRequest,
        cancel: &CancelSignal,
    ) -> Result<FraudStatus> {
        let delay = self.registry.delay();
        info!("Stubbed response for {} will be sent after {:?}", self.endpoint, delay);
        cancel.sleep(delay).await?;

        match self.registry.get(&self.endpoint).await {
            Some(stub) if stub.matches(request) => Ok(stub.response),
            Some(_) => {
                warn!("Stub for {} does not match the incoming request", self.endpoint);
                Err(RuntimeError::NoStubRegistered {
                    endpoint: self.endpoint.clone(),
                })
            }
            None => {
                warn!("No stub registered for {}", self.endpoint);
                Err(RuntimeError::NoStubRegistered {
                    endpoint: self.endpoint.clone(),
                })
            }
        }
    }
}

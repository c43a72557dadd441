//! Runtime switch between the real and stubbed verification services

use crate::cancel::CancelSignal;
use crate::error::Result;
use crate::strategy::VerificationService;
use fraudcheck_core::{FraudCheckRequest, FraudStatus};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// Which verification service serves traffic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RouteMode {
    #[default]
    Actual,
    Stub,
}

impl RouteMode {
    /// Mode selected by the stubbing switch (`on` routes to the stub)
    pub fn from_stubbing(on: bool) -> Self {
        if on {
            RouteMode::Stub
        } else {
            RouteMode::Actual
        }
    }

    fn to_u8(self) -> u8 {
        match self {
            RouteMode::Actual => 0,
            RouteMode::Stub => 1,
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            1 => RouteMode::Stub,
            _ => RouteMode::Actual,
        }
    }
}

impl fmt::Display for RouteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteMode::Actual => f.write_str("ACTUAL"),
            RouteMode::Stub => f.write_str("STUB"),
        }
    }
}

/// Forwards each check to the service selected by the current route mode
///
/// The mode is read once per check, so a check racing a mode change is
/// served entirely by one service or the other.
pub struct VerificationRouter {
    route_to: AtomicU8,
    actual: Arc<dyn VerificationService>,
    stub: Arc<dyn VerificationService>,
}

impl VerificationRouter {
    /// Create a router in `ACTUAL` mode
    pub fn new(actual: Arc<dyn VerificationService>, stub: Arc<dyn VerificationService>) -> Self {
        Self {
            route_to: AtomicU8::new(RouteMode::Actual.to_u8()),
            actual,
            stub,
        }
    }

    pub fn with_mode(self, mode: RouteMode) -> Self {
        self.route_to.store(mode.to_u8(), Ordering::SeqCst);
        self
    }

    pub fn mode(&self) -> RouteMode {
        RouteMode::from_u8(self.route_to.load(Ordering::SeqCst))
    }

    pub fn set_mode(&self, mode: RouteMode) {
        self.route_to.store(mode.to_u8(), Ordering::SeqCst);
        info!("Fraud check requests will now route to {}", mode);
    }

    /// Run a check on the currently selected service
    ///
    /// Returns the mode the check was dispatched on together with its result.
    pub async fn dispatch(
        &self,
        request: &FraudCheckRequest,
        cancel: &CancelSignal,
    ) -> (RouteMode, Result<FraudStatus>) {
        let mode = self.mode();
        let service = self.service_for(mode);
        debug!("Routing fraud check to {} ({})", service.name(), mode);
        (mode, service.verify_transaction_authenticity(request, cancel).await)
    }

    fn service_for(&self, mode: RouteMode) -> &Arc<dyn VerificationService> {
        match mode {
            RouteMode::Actual => &self.actual,
            RouteMode::Stub => &self.stub,
        }
    }
}

#[async_trait::async_trait]
impl VerificationService for VerificationRouter {
    fn name(&self) -> &'static str {
        "router"
    }

    async fn verify_transaction_authenticity(
        &self,
        request: &FraudCheckRequest,
        cancel: &CancelSignal,
    ) -> Result<FraudStatus> {
        self.dispatch(request, cancel).await.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_mode_wire_format() {
        assert_eq!(serde_json::to_string(&RouteMode::Actual).unwrap(), "\"ACTUAL\"");
        assert_eq!(serde_json::to_string(&RouteMode::Stub).unwrap(), "\"STUB\"");
        let mode: RouteMode = serde_json::from_str("\"STUB\"").unwrap();
        assert_eq!(mode, RouteMode::Stub);
    }

    #[test]
    fn test_route_mode_default_is_actual() {
        assert_eq!(RouteMode::default(), RouteMode::Actual);
    }

    #[test]
    fn test_from_stubbing() {
        assert_eq!(RouteMode::from_stubbing(true), RouteMode::Stub);
        assert_eq!(RouteMode::from_stubbing(false), RouteMode::Actual);
    }

    #[test]
    fn test_u8_round_trip() {
        for mode in [RouteMode::Actual, RouteMode::Stub] {
            assert_eq!(RouteMode::from_u8(mode.to_u8()), mode);
        }
    }
}

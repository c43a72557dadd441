//! Canned responses for stubbed verification

use fraudcheck_core::{FraudCheckRequest, FraudStatus};
use serde::{Deserialize, Serialize};

/// A canned fraud check response registered for an endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StubEntry {
    /// Endpoint the stub answers for (e.g. `/check`)
    pub endpoint: String,

    /// Request the stub answers; `None` answers every request
    #[serde(default)]
    pub request: Option<FraudCheckRequest>,

    pub response: FraudStatus,
}

impl StubEntry {
    pub fn new(
        endpoint: impl Into<String>,
        request: Option<FraudCheckRequest>,
        response: FraudStatus,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            request,
            response,
        }
    }

    /// Whether this stub answers `request`
    pub fn matches(&self, request: &FraudCheckRequest) -> bool {
        self.request.as_ref().map_or(true, |expected| expected == request)
    }
}

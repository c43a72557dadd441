//! Configuration types for FraudChecker

use fraudcheck_runtime::RouteMode;
use serde::{Deserialize, Serialize};

/// Endpoint key stubs are registered under by default
pub const DEFAULT_STUB_ENDPOINT: &str = "/check";

/// Fraud checker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Endpoint key the stubbed service looks up
    #[serde(default = "default_stub_endpoint")]
    pub stub_endpoint: String,

    /// Route mode at startup
    #[serde(default)]
    pub initial_route: RouteMode,

    /// Stub response delay at startup, in milliseconds (0..=99999)
    #[serde(default)]
    pub initial_stub_delay_ms: i64,

    /// Seed for reproducible simulated checks; thread RNG when absent
    #[serde(default)]
    pub random_seed: Option<u64>,
}

fn default_stub_endpoint() -> String {
    DEFAULT_STUB_ENDPOINT.to_string()
}

impl CheckerConfig {
    /// Create a new checker configuration
    pub fn new() -> Self {
        Self {
            stub_endpoint: default_stub_endpoint(),
            initial_route: RouteMode::Actual,
            initial_stub_delay_ms: 0,
            random_seed: None,
        }
    }

    /// Set the stub endpoint key
    pub fn with_stub_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.stub_endpoint = endpoint.into();
        self
    }

    /// Set the startup route mode
    pub fn with_initial_route(mut self, mode: RouteMode) -> Self {
        self.initial_route = mode;
        self
    }

    /// Set the startup stub delay
    pub fn with_initial_stub_delay_ms(mut self, millis: i64) -> Self {
        self.initial_stub_delay_ms = millis;
        self
    }

    /// Seed the random source
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self::new()
    }
}

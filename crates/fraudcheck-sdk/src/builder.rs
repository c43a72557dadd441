//! Builder pattern for FraudChecker

use crate::checker::FraudChecker;
use crate::config::CheckerConfig;
use crate::error::{Result, SdkError};
use fraudcheck_runtime::{
    Clock, RandomSource, SeededRandom, SimulatedVerificationService, StubRegistry,
    StubbedVerificationService, SystemClock, ThreadRandom, VerificationRouter,
};
use std::sync::Arc;

/// Builder for FraudChecker
///
/// # Example
///
/// ```rust,ignore
/// use fraudcheck_sdk::{CheckerConfig, FraudCheckerBuilder, RouteMode};
///
/// // Production defaults: thread RNG, system clock, ACTUAL routing
/// let checker = FraudCheckerBuilder::new().build()?;
///
/// // Reproducible checks starting in stub mode
/// let checker = FraudCheckerBuilder::new()
///     .with_config(
///         CheckerConfig::new()
///             .with_random_seed(42)
///             .with_initial_route(RouteMode::Stub),
///     )
///     .build()?;
/// ```
pub struct FraudCheckerBuilder {
    config: CheckerConfig,
    random: Option<Arc<dyn RandomSource>>,
    clock: Option<Arc<dyn Clock>>,
}

impl FraudCheckerBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: CheckerConfig::new(),
            random: None,
            clock: None,
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: CheckerConfig) -> Self {
        self.config = config;
        self
    }

    /// Inject the random source used by simulated checks
    ///
    /// Takes precedence over `random_seed` in the configuration.
    pub fn with_random_source(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.random = Some(random);
        self
    }

    /// Inject the clock used for card expiry
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the fraud checker
    pub fn build(self) -> Result<FraudChecker> {
        if self.config.stub_endpoint.trim().is_empty() {
            return Err(SdkError::ConfigError(
                "stub endpoint must not be empty".to_string(),
            ));
        }

        let random: Arc<dyn RandomSource> = match (self.random, self.config.random_seed) {
            (Some(random), _) => random,
            (None, Some(seed)) => {
                tracing::info!("Using seeded random source (seed = {})", seed);
                Arc::new(SeededRandom::new(seed))
            }
            (None, None) => Arc::new(ThreadRandom),
        };
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));

        let registry = Arc::new(StubRegistry::new());
        registry
            .set_delay(self.config.initial_stub_delay_ms)
            .map_err(|e| SdkError::ConfigError(format!("Invalid initial stub delay: {}", e)))?;

        let actual = Arc::new(SimulatedVerificationService::new(random, clock));
        let stub = Arc::new(StubbedVerificationService::new(
            Arc::clone(&registry),
            self.config.stub_endpoint.clone(),
        ));
        let router =
            Arc::new(VerificationRouter::new(actual, stub).with_mode(self.config.initial_route));

        tracing::info!(
            "FraudChecker ready (route = {}, stub endpoint = {}, stub delay = {} ms)",
            router.mode(),
            self.config.stub_endpoint,
            registry.delay_millis()
        );

        Ok(FraudChecker::new(self.config, router, registry))
    }
}

impl Default for FraudCheckerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

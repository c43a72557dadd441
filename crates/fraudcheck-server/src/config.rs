//! Server configuration

use fraudcheck_sdk::CheckerConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Prefix of the environment variables read by [`ServerConfig::load`]
pub const ENV_PREFIX: &str = "FRAUDCHECK";

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port (HTTP)
    pub port: u16,

    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,

    /// Mount the `/setup` routes (stubs, stub delay, route switching)
    pub enable_test_setup: bool,

    /// Deadline for a single fraud check; checks still running are interrupted
    pub check_timeout_ms: Option<u64>,

    /// Fraud checker configuration
    pub checker: CheckerConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            enable_test_setup: true,
            check_timeout_ms: None,
            checker: CheckerConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config file
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        Self::load_with_prefix(ENV_PREFIX)
    }

    /// Load from `config/server.*` and `<prefix>_*` environment variables
    ///
    /// Nested keys are separated by a double underscore
    /// (`FRAUDCHECK_CHECKER__RANDOM_SEED`).
    pub fn load_with_prefix(prefix: &str) -> anyhow::Result<Self> {
        let config_result = config::Config::builder()
            .add_source(config::File::with_name("config/server").required(false))
            .add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build();

        match config_result {
            Ok(cfg) => cfg
                .try_deserialize()
                .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e)),
            Err(e) => {
                tracing::info!("No usable configuration ({}), using defaults", e);
                Ok(Self::default())
            }
        }
    }

    pub fn check_timeout(&self) -> Option<Duration> {
        self.check_timeout_ms.map(Duration::from_millis)
    }
}

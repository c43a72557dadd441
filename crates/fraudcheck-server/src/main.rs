//! Fraud Checker HTTP Server
//!
//! Provides the REST API for fraud checks plus the test-setup controls.

use anyhow::Result;
use fraudcheck_server::{api, config::ServerConfig};
use fraudcheck_sdk::FraudCheckerBuilder;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;

    // Initialize tracing
    init_tracing(&config.log_level)?;
    info!("Loaded configuration: {:?}", config);

    // Initialize fraud checker
    let checker = FraudCheckerBuilder::new()
        .with_config(config.checker.clone())
        .build()?;
    info!("Fraud checker initialized");

    let app = api::create_router(checker, &config);

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    info!("✓ Server listening on http://{}", addr);
    info!("  Health check: http://{}/health", addr);
    info!("  Fraud check: POST http://{}/check", addr);
    if config.enable_test_setup {
        info!("  Test setup: http://{}/setup/ping", addr);
    }

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing(level: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "fraudcheck_server={level},fraudcheck_sdk={level},fraudcheck_runtime={level},tower_http=debug"
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}

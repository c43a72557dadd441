//! Router creation and configuration
//!
//! Creates the Axum router for the REST API endpoints.

use super::handlers::*;
use super::types::AppState;
use crate::config::ServerConfig;
use axum::{
    routing::{delete, get, post},
    Router,
};
use fraudcheck_sdk::FraudChecker;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create REST API router
///
/// The `/setup` routes are mounted only when `enable_test_setup` is set.
pub fn create_router(checker: FraudChecker, config: &ServerConfig) -> Router {
    let state = AppState {
        checker,
        check_timeout: config.check_timeout(),
    };

    let mut router = Router::new()
        .route("/ping", get(ping))
        .route("/health", get(health))
        .route("/check", post(check_fraud));

    if config.enable_test_setup {
        router = router.nest("/setup", setup_routes());
    }

    router
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn setup_routes() -> Router<AppState> {
    Router::new()
        .route("/ping", get(setup_ping))
        .route("/stubFor/check", post(stub_for_check))
        .route("/getStubs", get(get_stubs))
        .route("/stubs", delete(clear_stubs))
        .route("/fraudCheckDelay", get(fraud_check_delay))
        .route("/stubbingFor/check", get(stubbing_for_check))
}

//! API endpoint handlers
//!
//! HTTP request handlers for the fraud check and test-setup endpoints.

use super::extractors::{JsonExtractor, QueryExtractor};
use super::types::*;
use super::validation::validate_payload;
use crate::error::ServerError;
use axum::{extract::State, http::StatusCode, Json};
use fraudcheck_sdk::{cancellation, FraudStatus, RouteMode, StubEntry};
use tracing::{error, info};

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub(super) async fn ping() -> Json<PongResponse> {
    Json(PongResponse::running("FraudCheckerController"))
}

/// Fraud check endpoint
#[axum::debug_handler]
pub(super) async fn check_fraud(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<FraudCheckPayload>,
) -> Result<Json<FraudStatus>, ServerError> {
    let request = validate_payload(payload)?;
    info!(
        "Received fraud check for charge {} on card ending {}",
        request.charge,
        card_suffix(&request.credit_card.number)
    );

    let (canceller, signal) = cancellation();
    let check = state
        .checker
        .check_fraud_with_cancel(request.credit_card, request.charge, &signal);
    tokio::pin!(check);

    let result = match state.check_timeout {
        Some(deadline) => {
            tokio::select! {
                result = &mut check => result,
                _ = tokio::time::sleep(deadline) => {
                    canceller.cancel();
                    check.await
                }
            }
        }
        None => check.await,
    };

    match result {
        Ok(status) => Ok(Json(status)),
        Err(e) => {
            error!("Fraud check failed: {}", e);
            Err(e.into())
        }
    }
}

pub(super) async fn setup_ping() -> Json<PongResponse> {
    Json(PongResponse::running("TestSetupController"))
}

/// Register the stub answered for `/check`
pub(super) async fn stub_for_check(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<StubPayload>,
) -> Json<StubRegisteredResponse> {
    let url = state.checker.stub_endpoint().to_string();
    let stub = state
        .checker
        .register_stub(url.clone(), payload.request, payload.response)
        .await;

    Json(StubRegisteredResponse { url, stub })
}

pub(super) async fn get_stubs(State(state): State<AppState>) -> Json<Vec<StubEntry>> {
    Json(state.checker.list_stubs().await)
}

pub(super) async fn clear_stubs(State(state): State<AppState>) -> StatusCode {
    state.checker.clear_stubs().await;
    StatusCode::OK
}

/// Set the delay before stubbed responses
pub(super) async fn fraud_check_delay(
    State(state): State<AppState>,
    QueryExtractor(params): QueryExtractor<DelayParams>,
) -> Result<StatusCode, ServerError> {
    state.checker.set_stub_delay(params.respond_in)?;
    Ok(StatusCode::OK)
}

/// Route fraud checks to the stub (`on=true`) or the real service
pub(super) async fn stubbing_for_check(
    State(state): State<AppState>,
    QueryExtractor(params): QueryExtractor<StubbingParams>,
) -> StatusCode {
    let mode = RouteMode::from_stubbing(params.on);
    state.checker.set_route_mode(mode);
    info!(
        "Stubbing for Fraud Check is now turned {}, will route to {}",
        if params.on { "ON" } else { "OFF" },
        mode
    );
    StatusCode::OK
}

/// Last four digits of a card number, for logs
fn card_suffix(number: &str) -> String {
    let digits: Vec<char> = number.chars().filter(char::is_ascii_digit).collect();
    digits[digits.len().saturating_sub(4)..].iter().collect()
}

//! Request/response types for REST API

use chrono::{DateTime, Utc};
use fraudcheck_sdk::{FraudCheckRequest, FraudChecker, FraudStatus, StubEntry};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub checker: FraudChecker,

    /// Deadline applied to each fraud check
    pub check_timeout: Option<Duration>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness answer of `/ping` and `/setup/ping`
#[derive(Debug, Serialize, Deserialize)]
pub struct PongResponse {
    #[serde(rename = "PONG")]
    pub pong: String,
}

impl PongResponse {
    pub fn running(component: &str) -> Self {
        Self {
            pong: format!("{} is running fine!", component),
        }
    }
}

/// Body of `POST /check`, before validation
///
/// Every field is optional so that missing values are reported as field
/// errors rather than a deserialization failure.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FraudCheckPayload {
    #[serde(default)]
    pub credit_card: Option<CreditCardPayload>,

    #[serde(default)]
    pub charge: Option<MoneyPayload>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardPayload {
    #[serde(default)]
    pub number: Option<String>,

    #[serde(default)]
    pub holder_name: Option<String>,

    #[serde(default)]
    pub issuing_bank: Option<String>,

    #[serde(default)]
    pub valid_until: Option<DateTime<Utc>>,

    #[serde(default)]
    pub cvv: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MoneyPayload {
    #[serde(default)]
    pub currency: Option<String>,

    #[serde(default)]
    pub amount: Option<Decimal>,
}

/// Body of `POST /setup/stubFor/check`
#[derive(Debug, Deserialize)]
pub struct StubPayload {
    /// Request to answer; omitted or null answers every request
    #[serde(default)]
    pub request: Option<FraudCheckRequest>,

    pub response: FraudStatus,
}

/// Echo of a registered stub
#[derive(Debug, Serialize)]
pub struct StubRegisteredResponse {
    pub url: String,
    pub stub: StubEntry,
}

/// Query of `GET /setup/fraudCheckDelay`
#[derive(Debug, Deserialize)]
pub struct DelayParams {
    #[serde(rename = "respondIn")]
    pub respond_in: i64,
}

/// Query of `GET /setup/stubbingFor/check`
#[derive(Debug, Deserialize)]
pub struct StubbingParams {
    pub on: bool,
}

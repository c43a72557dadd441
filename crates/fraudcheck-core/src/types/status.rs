//! Fraud check outcomes and the decision rule

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of the CVV check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CvvStatus {
    Pass,
    Fail,
}

impl CvvStatus {
    /// Map a generated status code: 0 = pass, 1 = fail
    pub fn from_code(code: u32) -> Result<Self> {
        match code {
            0 => Ok(CvvStatus::Pass),
            1 => Ok(CvvStatus::Fail),
            other => Err(CoreError::InvalidValue(format!(
                "CVV status code must be 0 or 1, got {}",
                other
            ))),
        }
    }
}

/// Outcome of the address verification check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AvStatus {
    #[serde(rename = "pass")]
    Pass,
    #[serde(rename = "incorrect address")]
    IncorrectAddress,
}

impl AvStatus {
    /// Map a generated status code: 0 = pass, 1 = incorrect address
    pub fn from_code(code: u32) -> Result<Self> {
        match code {
            0 => Ok(AvStatus::Pass),
            1 => Ok(AvStatus::IncorrectAddress),
            other => Err(CoreError::InvalidValue(format!(
                "Address verification status code must be 0 or 1, got {}",
                other
            ))),
        }
    }
}

/// Overall verdict of a fraud check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallStatus {
    Pass,
    Fail,
    Suspicious,
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OverallStatus::Pass => "pass",
            OverallStatus::Fail => "fail",
            OverallStatus::Suspicious => "suspicious",
        };
        f.write_str(s)
    }
}

/// Combine the check outcomes into an overall verdict
///
/// First match wins:
/// 1. an expired card or a failed CVV check fails the transaction
/// 2. an incorrect address marks it suspicious
/// 3. otherwise it passes
pub fn decide(cvv_status: CvvStatus, av_status: AvStatus, has_expired: bool) -> OverallStatus {
    if has_expired || cvv_status == CvvStatus::Fail {
        return OverallStatus::Fail;
    }

    match av_status {
        AvStatus::IncorrectAddress => OverallStatus::Suspicious,
        AvStatus::Pass => OverallStatus::Pass,
    }
}

/// Result of a fraud check
///
/// `overall` is always derived from the two check outcomes and the card's
/// expiry, so a `FraudStatus` cannot carry an inconsistent verdict. Values
/// read from JSON (canned stub responses) are checked against the same rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawFraudStatus")]
pub struct FraudStatus {
    cvv_status: CvvStatus,
    av_status: AvStatus,
    overall: OverallStatus,
}

impl FraudStatus {
    pub fn new(cvv_status: CvvStatus, av_status: AvStatus, has_expired: bool) -> Self {
        Self {
            cvv_status,
            av_status,
            overall: decide(cvv_status, av_status, has_expired),
        }
    }

    /// Build a status from generated status codes (0 = pass, 1 = fail/incorrect)
    pub fn from_codes(cvv_code: u32, av_code: u32, has_expired: bool) -> Result<Self> {
        Ok(Self::new(
            CvvStatus::from_code(cvv_code)?,
            AvStatus::from_code(av_code)?,
            has_expired,
        ))
    }

    pub fn cvv_status(&self) -> CvvStatus {
        self.cvv_status
    }

    pub fn av_status(&self) -> AvStatus {
        self.av_status
    }

    pub fn overall(&self) -> OverallStatus {
        self.overall
    }
}

impl fmt::Display for FraudStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FraudStatus{{cvvStatus={:?}, avStatus={:?}, overall={}}}",
            self.cvv_status, self.av_status, self.overall
        )
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFraudStatus {
    cvv_status: CvvStatus,
    av_status: AvStatus,
    overall: OverallStatus,
}

impl TryFrom<RawFraudStatus> for FraudStatus {
    type Error = CoreError;

    fn try_from(raw: RawFraudStatus) -> Result<Self> {
        // The expiry flag is not part of the wire form, so either value may explain `overall`
        [false, true]
            .into_iter()
            .map(|has_expired| FraudStatus::new(raw.cvv_status, raw.av_status, has_expired))
            .find(|status| status.overall == raw.overall)
            .ok_or_else(|| {
                CoreError::InvalidValue(format!(
                    "overall '{}' is inconsistent with cvvStatus {:?} and avStatus {:?}",
                    raw.overall, raw.cvv_status, raw.av_status
                ))
            })
    }
}

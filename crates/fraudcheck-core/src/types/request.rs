//! Fraud check request

use super::{CreditCard, Money};
use serde::{Deserialize, Serialize};

/// The card and charge submitted for a fraud check
///
/// Also serves as the request shape a stub is registered against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FraudCheckRequest {
    pub credit_card: CreditCard,
    pub charge: Money,
}

impl FraudCheckRequest {
    pub fn new(credit_card: CreditCard, charge: Money) -> Self {
        Self {
            credit_card,
            charge,
        }
    }
}

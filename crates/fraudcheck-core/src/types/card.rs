//! Credit card under test

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Credit card details submitted for a fraud check
///
/// Field-level constraints (Luhn checksum, number length, 3-digit CVV,
/// non-blank names) are enforced by the transport layer before a card
/// reaches the core; see [`crate::validation`].
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCard {
    /// Card number, digits with optional separators (`4485-2847-2013-4093`)
    pub number: String,

    pub holder_name: String,

    pub issuing_bank: String,

    /// Expiry instant of the card
    pub valid_until: DateTime<Utc>,

    /// Card verification value, 3 digits
    pub cvv: u16,
}

impl CreditCard {
    pub fn new(
        number: impl Into<String>,
        holder_name: impl Into<String>,
        issuing_bank: impl Into<String>,
        valid_until: DateTime<Utc>,
        cvv: u16,
    ) -> Self {
        Self {
            number: number.into(),
            holder_name: holder_name.into(),
            issuing_bank: issuing_bank.into(),
            valid_until,
            cvv,
        }
    }

    /// A card has expired when its expiry instant is strictly before `now`
    pub fn has_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.valid_until < now
    }

    /// Expiry check against the system clock
    pub fn has_expired(&self) -> bool {
        self.has_expired_at(Utc::now())
    }
}

// Keep the CVV out of logs
impl fmt::Debug for CreditCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreditCard")
            .field("number", &self.number)
            .field("holder_name", &self.holder_name)
            .field("issuing_bank", &self.issuing_bank)
            .field("valid_until", &self.valid_until)
            .field("cvv", &"***")
            .finish()
    }
}

//! Monetary amounts

use crate::error::{CoreError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Three-letter currency code (e.g. `INR`, `USD`), stored upper-case
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    /// Parse a currency code
    pub fn new(code: &str) -> Result<Self> {
        let code = code.trim();
        if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(code.to_ascii_uppercase()))
        } else {
            Err(CoreError::InvalidCurrency(code.to_string()))
        }
    }

    pub fn code(&self) -> &str {
        &self.0
    }
}

impl FromStr for Currency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A charge amount in a given currency
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    pub currency: Currency,

    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

impl Money {
    pub fn new(currency: Currency, amount: Decimal) -> Self {
        Self { currency, amount }
    }

    /// Add two amounts of the same currency
    pub fn add(&self, other: &Money) -> Result<Money> {
        if self.currency != other.currency {
            return Err(CoreError::CurrencyMismatch {
                left: self.currency.to_string(),
                right: other.currency.to_string(),
            });
        }

        Ok(Money::new(self.currency.clone(), self.amount + other.amount))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}", self.currency, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn inr(amount: &str) -> Money {
        Money::new(Currency::new("INR").unwrap(), Decimal::from_str(amount).unwrap())
    }

    #[test]
    fn test_currency_is_normalised_to_upper_case() {
        let currency = Currency::new("inr").unwrap();
        assert_eq!(currency.code(), "INR");
    }

    #[test]
    fn test_currency_rejects_bad_codes() {
        assert!(Currency::new("").is_err());
        assert!(Currency::new("RUPEE").is_err());
        assert!(Currency::new("1NR").is_err());
    }

    #[test]
    fn test_add_same_currency() {
        let total = inr("1234.56").add(&inr("0.44")).unwrap();
        assert_eq!(total, inr("1235.00"));
    }

    #[test]
    fn test_add_different_currency_fails() {
        let usd = Money::new(Currency::new("USD").unwrap(), Decimal::ONE);
        let err = inr("1").add(&usd).unwrap_err();
        assert!(matches!(err, CoreError::CurrencyMismatch { .. }));
        assert!(err.to_string().contains("currencies must be same"));
    }

    #[test]
    fn test_display_uses_two_decimals() {
        assert_eq!(inr("1234.5").to_string(), "INR 1234.50");
    }

    #[test]
    fn test_amount_serialises_as_number() {
        let json = serde_json::to_value(inr("1235.45")).unwrap();
        assert_eq!(json, serde_json::json!({ "currency": "INR", "amount": 1235.45 }));
    }
}

//! Field-level validation of fraud check inputs
//!
//! These checks run at the transport boundary, before a `CreditCard` or
//! `Money` is built. Every violated constraint is collected as a
//! [`FieldError`] so callers can report all problems at once.
//!
//! # Rules
//!
//! - card number: required, 16 to 19 characters (separators count),
//!   digits must pass the Luhn checksum (non-digit characters ignored)
//! - CVV: required, exactly 3 digits
//! - holder name, issuing bank: required, not blank
//! - currency: required three-letter code; amount: required

use serde::{Deserialize, Serialize};

pub const CARD_NUMBER_MIN_LENGTH: usize = 16;
pub const CARD_NUMBER_MAX_LENGTH: usize = 19;
pub const CVV_DIGITS: u32 = 3;

/// A single violated field constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    /// Dotted path of the field (`creditCard.number`)
    pub field_name: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            message: message.into(),
        }
    }
}

/// Luhn checksum over the digits of `number`, ignoring any other characters
///
/// A value without digits fails the check.
pub fn luhn_check(number: &str) -> bool {
    let digits: Vec<u32> = number.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.is_empty() {
        return false;
    }

    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();

    sum % 10 == 0
}

/// Number of decimal digits in `value` (sign ignored)
pub fn digit_count(value: i64) -> u32 {
    value.unsigned_abs().checked_ilog10().map_or(1, |log| log + 1)
}

pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Validate a card number, appending every violation to `errors`
pub fn validate_card_number(field: &str, number: Option<&str>, errors: &mut Vec<FieldError>) {
    let Some(number) = number else {
        errors.push(FieldError::new(field, "Card number is required"));
        return;
    };

    let before = errors.len();
    let checksum_ok = luhn_check(number);

    if number.trim().is_empty() {
        errors.push(FieldError::new(field, "Card number is required"));
    }

    if !checksum_ok {
        errors.push(FieldError::new(field, "Failed Luhn check!"));
    }

    let length = number.chars().count();
    if !(CARD_NUMBER_MIN_LENGTH..=CARD_NUMBER_MAX_LENGTH).contains(&length) {
        errors.push(FieldError::new(
            field,
            format!(
                "length must be between {} and {}",
                CARD_NUMBER_MIN_LENGTH, CARD_NUMBER_MAX_LENGTH
            ),
        ));
    }

    if !checksum_ok {
        errors.push(FieldError::new(field, "Invalid Credit Card Number"));
    }

    log::debug!(
        "card number field '{}' has {} violation(s)",
        field,
        errors.len() - before
    );
}

/// Validate a CVV, appending every violation to `errors`
pub fn validate_cvv(field: &str, cvv: Option<i64>, errors: &mut Vec<FieldError>) {
    match cvv {
        None => {
            errors.push(FieldError::new(field, "is mandatory!"));
            errors.push(FieldError::new(field, "must have 3 digits"));
        }
        Some(value) if value < 0 || digit_count(value) != CVV_DIGITS => {
            errors.push(FieldError::new(field, "must have 3 digits"));
        }
        Some(_) => {}
    }
}

/// Validate a required free-text field
pub fn validate_required(
    field: &str,
    value: Option<&str>,
    message: &str,
    errors: &mut Vec<FieldError>,
) {
    if is_blank(value) {
        errors.push(FieldError::new(field, message));
    }
}

//! Validation of `POST /check` payloads
//!
//! Turns the raw payload into a [`FraudCheckRequest`], or every field error
//! found along the way.

use super::types::{CreditCardPayload, FraudCheckPayload, MoneyPayload};
use fraudcheck_core::validation::{
    is_blank, validate_card_number, validate_cvv, validate_required, FieldError,
};
use fraudcheck_sdk::{CreditCard, Currency, FraudCheckRequest, Money};

/// Validate a fraud check payload, collecting all violations
pub fn validate_payload(
    payload: FraudCheckPayload,
) -> std::result::Result<FraudCheckRequest, Vec<FieldError>> {
    let mut errors = Vec::new();

    let credit_card = match payload.credit_card {
        Some(card) => validate_card(card, &mut errors),
        None => {
            errors.push(FieldError::new("creditCard", "Require Credit Card Details!"));
            None
        }
    };

    let charge = match payload.charge {
        Some(charge) => validate_charge(charge, &mut errors),
        None => {
            errors.push(FieldError::new("charge", "amount must be supplied!"));
            None
        }
    };

    match (credit_card, charge) {
        (Some(credit_card), Some(charge)) if errors.is_empty() => {
            Ok(FraudCheckRequest::new(credit_card, charge))
        }
        _ => Err(errors),
    }
}

fn validate_card(card: CreditCardPayload, errors: &mut Vec<FieldError>) -> Option<CreditCard> {
    let before = errors.len();

    validate_card_number("creditCard.number", card.number.as_deref(), errors);
    validate_required(
        "creditCard.holderName",
        card.holder_name.as_deref(),
        "is required",
        errors,
    );
    validate_required(
        "creditCard.issuingBank",
        card.issuing_bank.as_deref(),
        "Issuing Bank name is required",
        errors,
    );
    if card.valid_until.is_none() {
        errors.push(FieldError::new(
            "creditCard.validUntil",
            "Expiry Date is mandatory!",
        ));
    }
    validate_cvv("creditCard.cvv", card.cvv, errors);

    if errors.len() > before {
        return None;
    }

    let cvv = u16::try_from(card.cvv?).ok()?;
    Some(CreditCard::new(
        card.number?,
        card.holder_name?,
        card.issuing_bank?,
        card.valid_until?,
        cvv,
    ))
}

fn validate_charge(charge: MoneyPayload, errors: &mut Vec<FieldError>) -> Option<Money> {
    let currency = if is_blank(charge.currency.as_deref()) {
        None
    } else {
        charge
            .currency
            .as_deref()
            .and_then(|code| Currency::new(code).ok())
    };

    if currency.is_none() {
        errors.push(FieldError::new("charge.currency", "is required!"));
    }
    if charge.amount.is_none() {
        errors.push(FieldError::new("charge.amount", "is required!"));
    }

    Some(Money::new(currency?, charge.amount?))
}

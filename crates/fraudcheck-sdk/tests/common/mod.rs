//! Common test utilities for SDK integration tests

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use fraudcheck_sdk::{
    CheckerConfig, CreditCard, Currency, FixedClock, FraudChecker, FraudCheckerBuilder, Money,
    ScriptedRandom,
};
use rust_decimal::Decimal;
use std::sync::Arc;

pub const CVV_PASS: u32 = 0;
pub const CVV_FAIL: u32 = 1;
pub const AV_PASS: u32 = 0;
pub const AV_INCORRECT: u32 = 1;

/// Instant every test checker treats as "now"
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap()
}

pub fn valid_card() -> CreditCard {
    CreditCard::new(
        "4485-2847-2013-4093",
        "Jumping Jack",
        "Bank of Test",
        now() + Duration::days(365),
        123,
    )
}

pub fn expired_card() -> CreditCard {
    CreditCard {
        valid_until: now() - Duration::days(1),
        ..valid_card()
    }
}

pub fn charge() -> Money {
    Money::new(Currency::new("INR").unwrap(), Decimal::new(123456, 2))
}

/// Checker whose simulated service replays `script` (delay, cvv, av, ...)
pub fn scripted_checker(script: Vec<u32>) -> FraudChecker {
    FraudCheckerBuilder::new()
        .with_random_source(Arc::new(ScriptedRandom::new(script)))
        .with_clock(Arc::new(FixedClock(now())))
        .build()
        .unwrap()
}

/// Checker with a seeded random source
pub fn seeded_checker(seed: u64) -> FraudChecker {
    FraudCheckerBuilder::new()
        .with_config(CheckerConfig::new().with_random_seed(seed))
        .with_clock(Arc::new(FixedClock(now())))
        .build()
        .unwrap()
}

//! Unit tests for verification services and the router
//!
//! Time is paused so the artificial delays elapse instantly; randomness is
//! scripted in draw order (delay, CVV code, address code).

use chrono::{Duration as ChronoDuration, TimeZone, Utc};
use fraudcheck_core::{
    AvStatus, CreditCard, Currency, CvvStatus, FraudCheckRequest, FraudStatus, Money,
    OverallStatus,
};
use fraudcheck_runtime::{
    cancellation, CancelSignal, FixedClock, RouteMode, RuntimeError, ScriptedRandom,
    SeededRandom, SimulatedVerificationService, StubEntry, StubRegistry,
    StubbedVerificationService, VerificationRouter, VerificationService,
};
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;

const CVV_PASS: u32 = 0;
const CVV_FAIL: u32 = 1;
const AV_PASS: u32 = 0;
const AV_INCORRECT: u32 = 1;

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
}

fn request_with_expiry(valid_until: chrono::DateTime<Utc>) -> FraudCheckRequest {
    FraudCheckRequest::new(
        CreditCard::new(
            "4485-2847-2013-4093",
            "Jumping Jack",
            "Bank of Test",
            valid_until,
            123,
        ),
        Money::new(Currency::new("INR").unwrap(), Decimal::new(123456, 2)),
    )
}

fn valid_request() -> FraudCheckRequest {
    request_with_expiry(now() + ChronoDuration::days(365))
}

fn simulated(script: Vec<u32>) -> SimulatedVerificationService {
    SimulatedVerificationService::new(
        Arc::new(ScriptedRandom::new(script)),
        Arc::new(FixedClock(now())),
    )
}

// ============================================================================
// Simulated verification
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_valid_card_passes_fraud_check() {
    let service = simulated(vec![0, CVV_PASS, AV_PASS]);
    let status = service
        .verify_transaction_authenticity(&valid_request(), &CancelSignal::never())
        .await
        .unwrap();

    assert_eq!(status, FraudStatus::new(CvvStatus::Pass, AvStatus::Pass, false));
    assert_eq!(status.overall(), OverallStatus::Pass);
}

#[tokio::test(start_paused = true)]
async fn test_incorrect_cvv_fails_fraud_check() {
    let service = simulated(vec![0, CVV_FAIL, AV_PASS]);
    let status = service
        .verify_transaction_authenticity(&valid_request(), &CancelSignal::never())
        .await
        .unwrap();

    assert_eq!(status, FraudStatus::new(CvvStatus::Fail, AvStatus::Pass, false));
    assert_eq!(status.overall(), OverallStatus::Fail);
}

#[tokio::test(start_paused = true)]
async fn test_incorrect_address_is_suspicious() {
    let service = simulated(vec![0, CVV_PASS, AV_INCORRECT]);
    let status = service
        .verify_transaction_authenticity(&valid_request(), &CancelSignal::never())
        .await
        .unwrap();

    assert_eq!(status.av_status(), AvStatus::IncorrectAddress);
    assert_eq!(status.overall(), OverallStatus::Suspicious);
}

#[tokio::test(start_paused = true)]
async fn test_expired_card_fails_fraud_check() {
    let service = simulated(vec![0, CVV_PASS, AV_PASS]);
    let expired = request_with_expiry(now() - ChronoDuration::days(1));
    let status = service
        .verify_transaction_authenticity(&expired, &CancelSignal::never())
        .await
        .unwrap();

    assert_eq!(status, FraudStatus::new(CvvStatus::Pass, AvStatus::Pass, true));
    assert_eq!(status.overall(), OverallStatus::Fail);
}

#[tokio::test(start_paused = true)]
async fn test_cvv_check_waits_for_drawn_delay() {
    // 1500 on top of the 2000 ms minimum
    let service = simulated(vec![1500, CVV_PASS, AV_PASS]);
    let start = tokio::time::Instant::now();
    service
        .verify_transaction_authenticity(&valid_request(), &CancelSignal::never())
        .await
        .unwrap();

    assert!(start.elapsed() >= Duration::from_millis(3500));
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_check_is_interrupted() {
    let service = Arc::new(simulated(vec![2999, CVV_PASS, AV_PASS]));
    let (canceller, signal) = cancellation();

    let task = {
        let service = Arc::clone(&service);
        tokio::spawn(async move {
            service
                .verify_transaction_authenticity(&valid_request(), &signal)
                .await
        })
    };

    tokio::time::sleep(Duration::from_millis(100)).await;
    canceller.cancel();

    assert_eq!(task.await.unwrap(), Err(RuntimeError::Interrupted));
}

// ============================================================================
// Stubbed verification
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_stub_returns_registered_response() {
    let registry = Arc::new(StubRegistry::new());
    let canned = FraudStatus::new(CvvStatus::Pass, AvStatus::IncorrectAddress, false);
    registry
        .put(StubEntry::new("/check", Some(valid_request()), canned))
        .await;

    let service = StubbedVerificationService::new(Arc::clone(&registry), "/check");
    let status = service
        .verify_transaction_authenticity(&valid_request(), &CancelSignal::never())
        .await
        .unwrap();

    assert_eq!(status, canned);
}

#[tokio::test(start_paused = true)]
async fn test_stub_without_request_shape_matches_any_request() {
    let registry = Arc::new(StubRegistry::new());
    let canned = FraudStatus::new(CvvStatus::Fail, AvStatus::Pass, false);
    registry.put(StubEntry::new("/check", None, canned)).await;

    let service = StubbedVerificationService::new(registry, "/check");
    let expired = request_with_expiry(now() - ChronoDuration::days(30));
    let status = service
        .verify_transaction_authenticity(&expired, &CancelSignal::never())
        .await
        .unwrap();

    assert_eq!(status, canned);
}

#[tokio::test(start_paused = true)]
async fn test_missing_stub_is_an_error() {
    let service = StubbedVerificationService::new(Arc::new(StubRegistry::new()), "/check");
    let result = service
        .verify_transaction_authenticity(&valid_request(), &CancelSignal::never())
        .await;

    assert_eq!(
        result,
        Err(RuntimeError::NoStubRegistered {
            endpoint: "/check".to_string()
        })
    );
}

#[tokio::test(start_paused = true)]
async fn test_stub_for_other_request_is_an_error() {
    let registry = Arc::new(StubRegistry::new());
    let other = request_with_expiry(now() + ChronoDuration::days(1));
    registry
        .put(StubEntry::new(
            "/check",
            Some(other),
            FraudStatus::new(CvvStatus::Pass, AvStatus::Pass, false),
        ))
        .await;

    let service = StubbedVerificationService::new(registry, "/check");
    let result = service
        .verify_transaction_authenticity(&valid_request(), &CancelSignal::never())
        .await;

    assert!(matches!(result, Err(RuntimeError::NoStubRegistered { .. })));
}

#[tokio::test(start_paused = true)]
async fn test_stub_waits_for_configured_delay() {
    let registry = Arc::new(StubRegistry::new());
    registry.set_delay(1200).unwrap();
    registry
        .put(StubEntry::new(
            "/check",
            None,
            FraudStatus::new(CvvStatus::Pass, AvStatus::Pass, false),
        ))
        .await;

    let service = StubbedVerificationService::new(registry, "/check");
    let start = tokio::time::Instant::now();
    service
        .verify_transaction_authenticity(&valid_request(), &CancelSignal::never())
        .await
        .unwrap();

    assert!(start.elapsed() >= Duration::from_millis(1200));
}

#[tokio::test(start_paused = true)]
async fn test_stub_delay_can_be_cancelled() {
    let registry = Arc::new(StubRegistry::new());
    registry.set_delay(99_999).unwrap();
    let service = Arc::new(StubbedVerificationService::new(registry, "/check"));
    let (canceller, signal) = cancellation();

    let task = {
        let service = Arc::clone(&service);
        tokio::spawn(async move {
            service
                .verify_transaction_authenticity(&valid_request(), &signal)
                .await
        })
    };

    tokio::time::sleep(Duration::from_millis(50)).await;
    canceller.cancel();

    assert_eq!(task.await.unwrap(), Err(RuntimeError::Interrupted));
}

// ============================================================================
// Router
// ============================================================================

fn router_with_stub() -> (VerificationRouter, Arc<StubRegistry>) {
    let registry = Arc::new(StubRegistry::new());
    let actual = Arc::new(simulated(vec![0, CVV_FAIL, AV_INCORRECT]));
    let stub = Arc::new(StubbedVerificationService::new(Arc::clone(&registry), "/check"));
    (VerificationRouter::new(actual, stub), registry)
}

#[tokio::test(start_paused = true)]
async fn test_router_defaults_to_actual() {
    let (router, _registry) = router_with_stub();

    assert_eq!(router.mode(), RouteMode::Actual);
    let status = router
        .verify_transaction_authenticity(&valid_request(), &CancelSignal::never())
        .await
        .unwrap();
    assert_eq!(status, FraudStatus::new(CvvStatus::Fail, AvStatus::IncorrectAddress, false));
}

#[tokio::test(start_paused = true)]
async fn test_router_switches_to_stub() {
    let canned = FraudStatus::new(CvvStatus::Pass, AvStatus::Pass, false);
    let (router, registry) = router_with_stub();
    registry.put(StubEntry::new("/check", None, canned)).await;

    router.set_mode(RouteMode::Stub);
    assert_eq!(router.mode(), RouteMode::Stub);

    let status = router
        .verify_transaction_authenticity(&valid_request(), &CancelSignal::never())
        .await
        .unwrap();
    assert_eq!(status, canned);
}

#[tokio::test(start_paused = true)]
async fn test_router_set_mode_is_idempotent() {
    let (router, _registry) = router_with_stub();

    router.set_mode(RouteMode::Actual);
    router.set_mode(RouteMode::Actual);
    assert_eq!(router.mode(), RouteMode::Actual);
}

#[tokio::test(start_paused = true)]
async fn test_router_with_initial_mode() {
    let (router, _registry) = router_with_stub();
    let router = router.with_mode(RouteMode::Stub);
    assert_eq!(router.mode(), RouteMode::Stub);
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_actual_checks_complete_independently() {
    let service = Arc::new(SimulatedVerificationService::new(
        Arc::new(SeededRandom::new(7)),
        Arc::new(FixedClock(now())),
    ));

    let handles: Vec<_> = (0..50)
        .map(|_| {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                service
                    .verify_transaction_authenticity(&valid_request(), &CancelSignal::never())
                    .await
            })
        })
        .collect();

    for handle in handles {
        let status = handle.await.unwrap().unwrap();
        assert_eq!(
            status.overall(),
            fraudcheck_core::decide(status.cvv_status(), status.av_status(), false)
        );
    }
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_actual_delays_overlap() {
    // every check waits the longest simulated delay (4999 ms)
    let service = Arc::new(simulated(vec![u32::MAX]));
    let start = tokio::time::Instant::now();

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                service
                    .verify_transaction_authenticity(&valid_request(), &CancelSignal::never())
                    .await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(4999));
    assert!(elapsed < Duration::from_millis(5000 * 2), "delays ran serially: {:?}", elapsed);
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_stub_delays_overlap() {
    let registry = Arc::new(StubRegistry::new());
    registry.set_delay(3000).unwrap();
    registry
        .put(StubEntry::new(
            "/check",
            None,
            FraudStatus::new(CvvStatus::Pass, AvStatus::Pass, false),
        ))
        .await;
    let service = Arc::new(StubbedVerificationService::new(registry, "/check"));
    let start = tokio::time::Instant::now();

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                service
                    .verify_transaction_authenticity(&valid_request(), &CancelSignal::never())
                    .await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(3000));
    assert!(elapsed < Duration::from_millis(5000), "delays ran serially: {:?}", elapsed);
}

#[tokio::test(start_paused = true)]
async fn test_dispatch_reports_mode_used() {
    let (router, registry) = router_with_stub();
    registry
        .put(StubEntry::new(
            "/check",
            None,
            FraudStatus::new(CvvStatus::Pass, AvStatus::Pass, false),
        ))
        .await;

    let (mode, result) = router.dispatch(&valid_request(), &CancelSignal::never()).await;
    assert_eq!(mode, RouteMode::Actual);
    assert_eq!(result.unwrap().cvv_status(), CvvStatus::Fail);

    router.set_mode(RouteMode::Stub);
    let (mode, result) = router.dispatch(&valid_request(), &CancelSignal::never()).await;
    assert_eq!(mode, RouteMode::Stub);
    assert_eq!(result.unwrap().cvv_status(), CvvStatus::Pass);
}

#[tokio::test(start_paused = true)]
async fn test_mode_switch_mid_check_keeps_dispatched_route() {
    let (router, _registry) = router_with_stub();
    let router = Arc::new(router);

    let task = {
        let router = Arc::clone(&router);
        tokio::spawn(async move { router.dispatch(&valid_request(), &CancelSignal::never()).await })
    };

    tokio::time::sleep(Duration::from_millis(100)).await;
    router.set_mode(RouteMode::Stub);

    let (mode, result) = task.await.unwrap();
    assert_eq!(mode, RouteMode::Actual);
    assert!(result.is_ok());
}

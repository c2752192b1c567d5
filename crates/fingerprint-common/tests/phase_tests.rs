use fingerprint_common::error::ServiceError;
use fingerprint_common::phase::{InFlight, RequestPhase};

#[test]
fn starts_idle_with_controls_enabled() {
    let phase: RequestPhase<u32> = RequestPhase::default();
    assert_eq!(phase, RequestPhase::Idle);
    assert!(phase.controls_enabled());
}

#[test]
fn second_begin_while_loading_is_refused() {
    let mut phase: RequestPhase<u32> = RequestPhase::default();
    assert_eq!(phase.begin(), Ok(()));
    assert!(!phase.controls_enabled());
    assert_eq!(phase.begin(), Err(InFlight));
    assert!(phase.is_loading());
}

#[test]
fn success_reenables_controls() {
    let mut phase = RequestPhase::default();
    phase.begin().unwrap();
    assert!(phase.settle(Ok(7u32)));
    assert_eq!(phase.success(), Some(&7));
    assert!(phase.controls_enabled());
}

#[test]
fn failure_reenables_controls_and_shows_no_result() {
    let mut phase: RequestPhase<u32> = RequestPhase::default();
    phase.begin().unwrap();
    phase.settle(Err(ServiceError::Service("bad input".into())));
    assert_eq!(phase.success(), None);
    assert_eq!(
        phase.failure(),
        Some(&ServiceError::Service("bad input".into()))
    );
    assert!(phase.controls_enabled());
}

#[test]
fn begin_hides_previous_result() {
    let mut phase = RequestPhase::default();
    phase.begin().unwrap();
    phase.settle(Ok("first"));
    phase.begin().unwrap();
    assert_eq!(phase.success(), None);
    assert!(phase.is_loading());
}

#[test]
fn settle_without_begin_is_ignored() {
    let mut phase: RequestPhase<u32> = RequestPhase::default();
    assert!(!phase.settle(Ok(1)));
    assert_eq!(phase, RequestPhase::Idle);
}

#[test]
fn new_request_may_begin_after_timeout() {
    let mut phase: RequestPhase<u32> = RequestPhase::default();
    phase.begin().unwrap();
    phase.settle(Err(ServiceError::Timeout(60_000)));
    assert_eq!(phase.begin(), Ok(()));
    assert_eq!(phase.failure(), None);
}

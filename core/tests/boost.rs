//! BoostClock tests — single slot, lazy expiry.

use astromine_core::{
    boost::{self, BoostSource},
    config::BoostKind,
    error::GameError,
};

const T0: i64 = 1_700_049_600_000;

fn turbo() -> BoostSource {
    BoostSource::Purchased { kind: BoostKind::Turbo }
}

/// Spec scenario: a ×3 boost for 14400s is in effect one second
/// before expiry and gone one second after, with no explicit
/// transition in between.
#[test]
fn boost_lapses_by_time_comparison() {
    let mut slot = None;
    boost::activate(&mut slot, turbo(), 3.0, 14_400, T0).unwrap();

    assert!((boost::multiplier(&slot, T0 + 14_399_000) - 3.0).abs() < 1e-12);
    assert!(boost::active(&slot, T0 + 14_399_000).is_some());

    assert!((boost::multiplier(&slot, T0 + 14_401_000) - 1.0).abs() < 1e-12);
    assert!(boost::active(&slot, T0 + 14_401_000).is_none());
}

/// Activating over an unexpired boost fails and leaves the original
/// expiry untouched, whatever either boost's origin.
#[test]
fn second_activation_rejected_while_active() {
    let mut slot = None;
    boost::activate(&mut slot, turbo(), 3.0, 14_400, T0).unwrap();
    let original_expiry = slot.unwrap().expires_at;

    let err =
        boost::activate(&mut slot, BoostSource::DailyLogin, 1.5, 3_600, T0 + 60_000).unwrap_err();
    match err {
        GameError::BoostAlreadyActive { expires_at } => assert_eq!(expires_at, original_expiry),
        other => panic!("expected BoostAlreadyActive, got {other:?}"),
    }
    assert_eq!(slot.unwrap().expires_at, original_expiry);
}

/// Once the previous boost has lapsed the slot is free again.
#[test]
fn slot_reusable_after_expiry() {
    let mut slot = None;
    boost::activate(&mut slot, turbo(), 3.0, 14_400, T0).unwrap();

    let later = T0 + 14_400_000;
    let boosted = boost::activate(&mut slot, BoostSource::MissionReward, 2.0, 7_200, later)
        .expect("expired slot should accept a new boost");

    assert_eq!(boosted.expires_at, later + 7_200_000);
    assert!((boost::multiplier(&slot, later + 1_000) - 2.0).abs() < 1e-12);
}

/// Expiry is strictly after activation; a zero-length boost is
/// rejected before it can occupy the slot.
#[test]
fn zero_duration_rejected() {
    let mut slot = None;
    let err = boost::activate(&mut slot, turbo(), 3.0, 0, T0).unwrap_err();
    assert!(matches!(err, GameError::Validation(_)));
    assert!(slot.is_none());
}

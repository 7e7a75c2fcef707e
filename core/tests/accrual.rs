//! AccrualLedger tests — derived unclaimed balance, tap and claim.

use astromine_core::{accrual, config::StorageTier, profile::Profile, rate};

const T0: i64 = 1_700_049_600_000;

fn full_profile(id: &str) -> Profile {
    // A fresh profile whose entire 6h storage window has elapsed.
    let mut profile = Profile::new(id, T0);
    profile.last_claim_at = T0 - 21_600_000;
    profile
}

/// Spec scenario: rate 0.0005/s, capacity 21600s. After 1000s the
/// unclaimed value is min(0.5, 10.8) = 0.5.
#[test]
fn unclaimed_accrues_linearly_below_cap() {
    let profile = Profile::new("accrual-linear", T0);
    let now = T0 + 1_000_000;

    let value = accrual::unclaimed_for(&profile, now);
    assert!((value - 0.5).abs() < 1e-9, "got {value}");
}

/// Unclaimed is non-decreasing in elapsed time and never exceeds
/// capacity × rate.
#[test]
fn unclaimed_monotone_and_bounded() {
    let profile = Profile::new("accrual-bound", T0);
    let cap = 21_600.0 * 0.0005;

    let mut previous = 0.0;
    for hours in 0..30 {
        let value = accrual::unclaimed_for(&profile, T0 + hours * 3_600_000);
        assert!(value >= previous, "decreased at hour {hours}");
        assert!(value <= cap + 1e-9, "exceeded cap at hour {hours}");
        previous = value;
    }
    assert!((previous - cap).abs() < 1e-9, "long idle should pin to the cap");
}

/// A claim commits the balance and the very next query at the same
/// instant derives zero.
#[test]
fn claim_then_query_at_same_instant_is_zero() {
    let mut profile = Profile::new("accrual-claim", T0);
    let now = T0 + 7_200_000;

    let claimed = accrual::claim(&mut profile, now, false).expect("should claim");
    assert!((claimed - 3.6).abs() < 1e-9);
    assert!((profile.claimed_balance - 3.6).abs() < 1e-9);
    assert!((profile.total_mined - 3.6).abs() < 1e-9);
    assert_eq!(profile.counters.claims, 1);
    assert_eq!(profile.transactions.len(), 1);

    assert_eq!(accrual::unclaimed_for(&profile, now), 0.0);
}

/// Claiming with nothing accrued is a no-op: no counter bump, no
/// ledger entry.
#[test]
fn claim_of_nothing_is_noop() {
    let mut profile = Profile::new("accrual-noop", T0);

    assert!(accrual::claim(&mut profile, T0, false).is_none());
    assert_eq!(profile.counters.claims, 0);
    assert!(profile.transactions.is_empty());
}

/// Spec scenario: a tap against a full store is rejected with no state
/// change; claim then tap succeeds.
#[test]
fn tap_rejected_at_cap_then_accepted_after_claim() {
    let mut profile = full_profile("accrual-tapcap");

    let err = accrual::tap(&mut profile, T0).unwrap_err();
    assert!(matches!(err, astromine_core::error::GameError::CapacityExceeded));
    assert_eq!(profile.counters.taps, 0);
    assert_eq!(profile.last_claim_at, T0 - 21_600_000);

    accrual::claim(&mut profile, T0, false).expect("full store should claim");
    let credited = accrual::tap(&mut profile, T0).expect("empty store should accept a tap");

    assert!((credited - 0.001).abs() < 1e-12);
    assert_eq!(profile.counters.taps, 1);
    assert!((accrual::unclaimed_for(&profile, T0) - 0.001).abs() < 1e-9);
}

/// Each successful tap advances the counter by exactly one and its
/// credit survives later derivation.
#[test]
fn taps_accumulate_durably() {
    let mut profile = Profile::new("accrual-taps", T0);

    for _ in 0..5 {
        accrual::tap(&mut profile, T0).unwrap();
    }
    assert_eq!(profile.counters.taps, 5);
    assert!((accrual::unclaimed_for(&profile, T0) - 0.005).abs() < 1e-9);

    // Time keeps accruing on top of the tapped credit.
    let later = accrual::unclaimed_for(&profile, T0 + 1_000_000);
    assert!((later - 0.505).abs() < 1e-9);
}

/// With a zero rate the capacity is zero in value terms: taps are
/// rejected outright and time-to-full is unbounded, not divided.
#[test]
fn zero_rate_rejects_taps_and_reports_unbounded_fill() {
    let mut profile = Profile::new("accrual-zero", T0);
    profile.upgrades.clear();

    assert_eq!(rate::effective_rate(&profile, T0), 0.0);
    let err = accrual::tap(&mut profile, T0).unwrap_err();
    assert!(matches!(err, astromine_core::error::GameError::CapacityExceeded));
    assert_eq!(profile.counters.taps, 0);

    assert_eq!(
        accrual::time_to_full(T0, profile.last_claim_at, 0.0, 21_600.0),
        None
    );
}

/// Crossing a halving threshold only happens at claim time, so the
/// amount committed by that claim is still valued at the old rate and
/// nothing already accrued is retroactively altered.
#[test]
fn halving_crossover_does_not_reprice_the_claim() {
    use astromine_core::config::HALVING_TIERS;

    let mut profile = Profile::new("accrual-crossover", T0);
    profile.total_mined = HALVING_TIERS[0].threshold - 0.1;
    let now = T0 + 1_000_000;

    assert_eq!(rate::breakdown(&profile, now).halving_stage, 1);
    let claimed = accrual::claim(&mut profile, now, false).unwrap();
    assert!((claimed - 0.5).abs() < 1e-9, "claim valued at the pre-halving rate");

    // The threshold is now crossed; only new accrual runs at stage 2.
    assert_eq!(rate::breakdown(&profile, now).halving_stage, 2);
    assert_eq!(accrual::unclaimed_for(&profile, now), 0.0);
}

/// time_to_full counts down as the store fills and reaches zero at
/// the cap.
#[test]
fn time_to_full_counts_down() {
    let profile = Profile::new("accrual-ttf", T0);
    let capacity_seconds = StorageTier::Base.capacity_seconds();
    let r = rate::effective_rate(&profile, T0);

    let at_start = accrual::time_to_full(T0, profile.last_claim_at, r, capacity_seconds)
        .expect("positive rate is bounded");
    assert!((at_start - 21_600.0).abs() < 1e-9);

    let halfway =
        accrual::time_to_full(T0 + 10_800_000, profile.last_claim_at, r, capacity_seconds)
            .unwrap();
    assert!((halfway - 10_800.0).abs() < 1e-9);

    let idle_for_days =
        accrual::time_to_full(T0 + 200 * 3_600_000, profile.last_claim_at, r, capacity_seconds)
            .unwrap();
    assert_eq!(idle_for_days, 0.0);
}

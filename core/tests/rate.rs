//! RateCalculator tests — pure rate math over the profile.

use astromine_core::{
    boost::{self, BoostSource},
    config::{PermanentKind, UpgradeKind, HALVING_TIERS},
    profile::Profile,
    rate,
};

const T0: i64 = 1_700_049_600_000;

/// One level-1 processor and nothing else yields exactly the
/// component's per-level rate.
#[test]
fn fresh_profile_rate_is_base_component_rate() {
    let profile = Profile::new("rate-base", T0);

    let b = rate::breakdown(&profile, T0);

    assert!((b.base - 0.0005).abs() < 1e-12);
    assert_eq!(b.halving_stage, 1);
    assert!((b.halving_multiplier - 1.0).abs() < 1e-12);
    assert!((b.boost_multiplier - 1.0).abs() < 1e-12);
    assert!((b.friends_multiplier - 1.0).abs() < 1e-12);
    assert!((b.effective - 0.0005).abs() < 1e-12);
}

/// Rate is the sum of per-level rates across installed components.
#[test]
fn base_rate_sums_component_levels() {
    let mut profile = Profile::new("rate-sum", T0);
    profile.upgrades.insert(UpgradeKind::Cooler, 2);
    profile.upgrades.insert(UpgradeKind::Power, 1);

    // core 1×0.0005 + cooler 2×0.0025 + power 1×0.0525
    let expected = 0.0005 + 0.005 + 0.0525;
    assert!((rate::effective_rate(&profile, T0) - expected).abs() < 1e-12);
}

/// Crossing the first halving threshold halves the rate on the next
/// query. The boundary itself already counts as reached.
#[test]
fn halving_tier_selected_at_exact_boundary() {
    let mut profile = Profile::new("rate-halving", T0);

    profile.total_mined = HALVING_TIERS[0].threshold - 1.0;
    assert_eq!(rate::breakdown(&profile, T0).halving_stage, 1);

    profile.total_mined = HALVING_TIERS[0].threshold;
    let b = rate::breakdown(&profile, T0);
    assert_eq!(b.halving_stage, 2);
    assert!((b.halving_multiplier - 0.5).abs() < 1e-12);
}

/// The most-progressed reached tier wins, not the first.
#[test]
fn deepest_reached_halving_tier_wins() {
    let mut profile = Profile::new("rate-deep", T0);
    profile.total_mined = HALVING_TIERS[4].threshold + 1.0;

    let b = rate::breakdown(&profile, T0);
    assert_eq!(b.halving_stage, 6);
    assert!((b.halving_multiplier - 0.01).abs() < 1e-12);
}

/// Friend bonus is 5% per friend, doubled by the amplifier.
#[test]
fn friend_bonus_scales_and_amplifies() {
    let mut profile = Profile::new("rate-friends", T0);
    for i in 0..3 {
        profile.friends.push(astromine_core::profile::Friend {
            id: i + 1,
            name: format!("Friend #{}", i + 1),
        });
    }

    assert!((rate::breakdown(&profile, T0).friends_multiplier - 1.15).abs() < 1e-12);

    profile.permanent_upgrades.insert(PermanentKind::FriendBonusAmp);
    assert!((rate::breakdown(&profile, T0).friends_multiplier - 1.30).abs() < 1e-12);
}

/// An active boost multiplies the rate only until it expires.
#[test]
fn boost_factor_applies_while_unexpired() {
    let mut profile = Profile::new("rate-boost", T0);
    boost::activate(
        &mut profile.active_boost,
        BoostSource::Purchased { kind: astromine_core::config::BoostKind::Turbo },
        3.0,
        14_400,
        T0,
    )
    .unwrap();

    assert!((rate::breakdown(&profile, T0 + 1_000).boost_multiplier - 3.0).abs() < 1e-12);
    assert!(
        (rate::breakdown(&profile, T0 + 14_401_000).boost_multiplier - 1.0).abs() < 1e-12
    );
}

/// The tap amount scales with every multiplier except the base rate.
#[test]
fn tap_amount_ignores_base_rate() {
    let mut profile = Profile::new("rate-tap", T0);
    profile.upgrades.insert(UpgradeKind::Power, 5);
    profile.friends.push(astromine_core::profile::Friend { id: 1, name: "Friend #1".into() });

    // 0.001 × halving(1) × boost(1) × friends(1.05)
    assert!((rate::tap_amount(&profile, T0) - 0.00105).abs() < 1e-12);
}

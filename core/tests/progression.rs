//! ProgressionTracker tests — achievements, league, halving stage.

use astromine_core::{
    config::{StorageTier, HALVING_TIERS},
    profile::Profile,
    progression::{self, AchievementKind},
};

const T0: i64 = 1_700_049_600_000;

/// League is named by the highest threshold not exceeding the
/// lifetime mined total.
#[test]
fn league_thresholds() {
    assert_eq!(progression::league(0.0).name, "Bronze");
    assert_eq!(progression::league(9_999.9).name, "Bronze");
    assert_eq!(progression::league(10_000.0).name, "Silver");
    assert_eq!(progression::league(250_000.0).name, "Gold");
    assert_eq!(progression::league(3_000_000.0).name, "Platinum");
    assert_eq!(progression::league(10_000_000.0).name, "Diamond");
    assert_eq!(progression::league(99_000_000.0).name, "Quantum");
}

/// Halving stage is 1 before the first threshold and follows the tier
/// table after.
#[test]
fn halving_stage_names() {
    assert_eq!(progression::halving_stage(0.0), 1);
    assert_eq!(progression::halving_stage(HALVING_TIERS[0].threshold), 2);
    assert_eq!(progression::halving_stage(HALVING_TIERS[2].threshold + 1.0), 4);
}

/// Each predicate transitions exactly when its threshold is met.
#[test]
fn achievement_predicates() {
    let mut profile = Profile::new("prog-predicates", T0);

    assert!(!AchievementKind::NoviceMiner.unlocked(&profile));
    profile.total_mined = 1_000.0;
    assert!(AchievementKind::NoviceMiner.unlocked(&profile));

    assert!(!AchievementKind::TapMaster.unlocked(&profile));
    profile.counters.taps = 1_000;
    assert!(AchievementKind::TapMaster.unlocked(&profile));

    assert!(!AchievementKind::Tinkerer.unlocked(&profile));
    profile.upgrades.insert(astromine_core::config::UpgradeKind::Core, 5);
    assert!(AchievementKind::Tinkerer.unlocked(&profile));

    assert!(!AchievementKind::Hoarder.unlocked(&profile));
    profile.storage_tier = StorageTier::Extended;
    assert!(AchievementKind::Hoarder.unlocked(&profile));

    assert!(!AchievementKind::Booster.unlocked(&profile));
    profile.counters.boosts_activated = 1;
    assert!(AchievementKind::Booster.unlocked(&profile));
}

/// unlock_new records every false→true transition once; repeating the
/// pass is a no-op and the unlocked set only ever grows.
#[test]
fn unlock_pass_is_monotone_and_repeatable() {
    let mut profile = Profile::new("prog-monotone", T0);
    profile.total_mined = 1_500.0;
    profile.counters.taps = 2_000;

    let first = progression::unlock_new(&mut profile);
    assert_eq!(first, vec![AchievementKind::NoviceMiner, AchievementKind::TapMaster]);

    let second = progression::unlock_new(&mut profile);
    assert!(second.is_empty(), "already-unlocked achievements must not re-fire");
    assert_eq!(profile.unlocked_achievements.len(), 2);

    // More progress only adds to the set.
    profile.friends.push(astromine_core::profile::Friend { id: 1, name: "Friend #1".into() });
    let third = progression::unlock_new(&mut profile);
    assert_eq!(third, vec![AchievementKind::Socialite]);
    assert_eq!(profile.unlocked_achievements.len(), 3);
}

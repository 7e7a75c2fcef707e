//! Threshold-based progression: achievements, league, halving stage.
//!
//! Achievements are a closed, ordered set of pure predicates over the
//! profile, re-evaluated after every successful mutating command.
//! Re-checking an already-unlocked achievement is a no-op, so the pass
//! is safe to repeat. NEVER reorder or remove variants — only append.

use crate::{
    config::{StorageTier, League, LEAGUES, MAX_UPGRADE_LEVEL},
    profile::Profile,
    rate,
};
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AchievementKind {
    NoviceMiner,
    TapMaster,
    Socialite,
    Tinkerer,
    Hoarder,
    Booster,
}

impl AchievementKind {
    pub const ALL: [AchievementKind; 6] = [
        AchievementKind::NoviceMiner,
        AchievementKind::TapMaster,
        AchievementKind::Socialite,
        AchievementKind::Tinkerer,
        AchievementKind::Hoarder,
        AchievementKind::Booster,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AchievementKind::NoviceMiner => "Novice Miner",
            AchievementKind::TapMaster => "Tap Master",
            AchievementKind::Socialite => "Socialite",
            AchievementKind::Tinkerer => "Tinkerer",
            AchievementKind::Hoarder => "Hoarder",
            AchievementKind::Booster => "Booster",
        }
    }

    /// Pure, side-effect-free unlock predicate.
    pub fn unlocked(self, profile: &Profile) -> bool {
        match self {
            AchievementKind::NoviceMiner => profile.total_mined >= 1_000.0,
            AchievementKind::TapMaster => profile.counters.taps >= 1_000,
            AchievementKind::Socialite => !profile.friends.is_empty(),
            AchievementKind::Tinkerer => profile
                .upgrades
                .values()
                .any(|&level| level >= MAX_UPGRADE_LEVEL),
            AchievementKind::Hoarder => profile.storage_tier >= StorageTier::Extended,
            AchievementKind::Booster => profile.counters.boosts_activated >= 1,
        }
    }
}

/// Evaluate the full set and record every false→true transition.
/// Returns the newly unlocked achievements, in declaration order.
pub fn unlock_new(profile: &mut Profile) -> Vec<AchievementKind> {
    let mut unlocked = Vec::new();
    for kind in AchievementKind::ALL {
        if !profile.unlocked_achievements.contains(&kind) && kind.unlocked(profile) {
            profile.unlocked_achievements.insert(kind);
            unlocked.push(kind);
        }
    }
    unlocked
}

/// The league named by the highest threshold not exceeding the
/// lifetime mined total.
pub fn league(total_mined: f64) -> &'static League {
    LEAGUES
        .iter()
        .filter(|l| total_mined >= l.min_mined)
        .last()
        .unwrap_or(&LEAGUES[0])
}

/// Halving stage number, 1 before the first threshold.
pub fn halving_stage(total_mined: f64) -> u8 {
    rate::halving_tier(total_mined).map_or(1, |t| t.stage)
}

//! Effective production rate.
//!
//! Pure functions of the profile and `now` — recomputed on every
//! query, never cached across ticks. The rate is the product of four
//! factors: component base rate, halving stage, active boost, and
//! friend bonus.

use crate::{
    boost,
    config::{HalvingTier, PermanentKind, UpgradeKind, FRIEND_BONUS_PER_FRIEND, HALVING_TIERS, TAP_BASE_AMOUNT},
    profile::Profile,
    types::TimestampMs,
};
use serde::Serialize;

/// Every factor of the effective rate, for display and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateBreakdown {
    pub base: f64,
    pub halving_stage: u8,
    pub halving_multiplier: f64,
    pub boost_multiplier: f64,
    pub friends_multiplier: f64,
    pub effective: f64,
}

/// Units per second from installed components alone.
fn base_rate(profile: &Profile) -> f64 {
    UpgradeKind::ALL
        .iter()
        .map(|&kind| kind.spec().per_level_rate * f64::from(profile.upgrade_level(kind)))
        .sum()
}

/// The highest halving tier whose threshold has been reached.
/// An exact boundary counts as reached.
pub fn halving_tier(total_mined: f64) -> Option<&'static HalvingTier> {
    HALVING_TIERS.iter().filter(|t| total_mined >= t.threshold).last()
}

fn friends_multiplier(profile: &Profile) -> f64 {
    let per_friend = if profile.owns_permanent(PermanentKind::FriendBonusAmp) {
        FRIEND_BONUS_PER_FRIEND * 2.0
    } else {
        FRIEND_BONUS_PER_FRIEND
    };
    1.0 + profile.friends.len() as f64 * per_friend
}

pub fn breakdown(profile: &Profile, now: TimestampMs) -> RateBreakdown {
    let base = base_rate(profile);
    let (halving_stage, halving_multiplier) =
        halving_tier(profile.total_mined).map_or((1, 1.0), |t| (t.stage, t.multiplier));
    let boost_multiplier = boost::multiplier(&profile.active_boost, now);
    let friends_multiplier = friends_multiplier(profile);
    RateBreakdown {
        base,
        halving_stage,
        halving_multiplier,
        boost_multiplier,
        friends_multiplier,
        effective: base * halving_multiplier * boost_multiplier * friends_multiplier,
    }
}

pub fn effective_rate(profile: &Profile, now: TimestampMs) -> f64 {
    breakdown(profile, now).effective
}

/// Value credited by a single tap: the base tap amount scaled by every
/// rate multiplier except the component base rate.
pub fn tap_amount(profile: &Profile, now: TimestampMs) -> f64 {
    let b = breakdown(profile, now);
    TAP_BASE_AMOUNT * b.halving_multiplier * b.boost_multiplier * b.friends_multiplier
}

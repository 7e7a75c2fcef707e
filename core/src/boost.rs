//! Single-slot, time-boxed rate boost.
//!
//! The slot is Idle or Active. Expiry is evaluated lazily by comparing
//! `now` to `expires_at` on every read — there is no background timer,
//! and nothing ever cancels a boost early.

use crate::{
    config::BoostKind,
    error::{GameError, GameResult},
    types::TimestampMs,
};
use serde::{Deserialize, Serialize};

/// Where an active boost came from. One slot regardless of origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "origin", rename_all = "snake_case")]
pub enum BoostSource {
    Purchased { kind: BoostKind },
    DailyLogin,
    MissionReward,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActiveBoost {
    pub source: BoostSource,
    pub multiplier: f64,
    pub expires_at: TimestampMs,
}

/// The boost currently in effect, if any. An expired boost is treated
/// as absent; the slot itself is cleaned up on the next activation.
pub fn active(slot: &Option<ActiveBoost>, now: TimestampMs) -> Option<&ActiveBoost> {
    slot.as_ref().filter(|b| now < b.expires_at)
}

/// Rate multiplier contributed by the slot: the active boost's, or 1.
pub fn multiplier(slot: &Option<ActiveBoost>, now: TimestampMs) -> f64 {
    active(slot, now).map_or(1.0, |b| b.multiplier)
}

/// Idle → Active. Fails without mutation while an unexpired boost
/// holds the slot.
pub fn activate(
    slot: &mut Option<ActiveBoost>,
    source: BoostSource,
    multiplier: f64,
    duration_seconds: u64,
    now: TimestampMs,
) -> GameResult<ActiveBoost> {
    if duration_seconds == 0 {
        return Err(GameError::Validation("boost duration must be positive".into()));
    }
    if let Some(current) = active(slot, now) {
        return Err(GameError::BoostAlreadyActive { expires_at: current.expires_at });
    }
    let boost = ActiveBoost {
        source,
        multiplier,
        expires_at: now + duration_seconds as TimestampMs * 1000,
    };
    *slot = Some(boost);
    Ok(boost)
}

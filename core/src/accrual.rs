//! Offline accrual: the capped unclaimed balance and the tap/claim
//! commands that move it.
//!
//! RULE: the unclaimed balance is derived, never persisted. Everything
//! here is a function of `(now, last_claim_at, rate, capacity)`; a
//! claim just moves the accrual origin forward, and a tap moves it
//! backward by the increment's time-equivalent. That is what makes a
//! stale recompute after a claim unable to double-count.

use crate::{
    error::{GameError, GameResult},
    ledger::{self, Currency, TxKind},
    profile::Profile,
    rate,
    types::{elapsed_seconds, TimestampMs},
};

/// Maximum unclaimed value at the given rate.
pub fn capacity_value(rate: f64, capacity_seconds: f64) -> f64 {
    capacity_seconds * rate
}

/// min(elapsed × rate, capacity × rate), floored at zero.
pub fn unclaimed(
    now: TimestampMs,
    last_claim_at: TimestampMs,
    rate: f64,
    capacity_seconds: f64,
) -> f64 {
    let accrued = elapsed_seconds(now, last_claim_at) * rate;
    accrued.min(capacity_value(rate, capacity_seconds)).max(0.0)
}

/// Pure boundary check. Whether to auto-claim on a full store is the
/// caller's decision, gated on the auto-claim permanent upgrade.
pub fn is_full(unclaimed: f64, capacity_value: f64) -> bool {
    capacity_value > 0.0 && unclaimed >= capacity_value
}

/// Seconds until the store is full, `None` when the rate is zero —
/// never computed by division against a zero rate.
pub fn time_to_full(
    now: TimestampMs,
    last_claim_at: TimestampMs,
    rate: f64,
    capacity_seconds: f64,
) -> Option<f64> {
    if rate <= 0.0 {
        return None;
    }
    let cap = capacity_value(rate, capacity_seconds);
    let cur = unclaimed(now, last_claim_at, rate, capacity_seconds);
    Some(((cap - cur) / rate).max(0.0))
}

/// Derived unclaimed value for a profile at `now`.
pub fn unclaimed_for(profile: &Profile, now: TimestampMs) -> f64 {
    unclaimed(
        now,
        profile.last_claim_at,
        rate::effective_rate(profile, now),
        profile.storage_tier.capacity_seconds(),
    )
}

/// Credit one tap. Rejected with `CapacityExceeded` (no mutation) when
/// the increment would push the unclaimed value past the cap; at rate
/// zero the cap is zero in value terms, so every positive tap is
/// rejected here before any division can happen.
pub fn tap(profile: &mut Profile, now: TimestampMs) -> GameResult<f64> {
    let r = rate::effective_rate(profile, now);
    let capacity_seconds = profile.storage_tier.capacity_seconds();
    let cap = capacity_value(r, capacity_seconds);
    let current = unclaimed(now, profile.last_claim_at, r, capacity_seconds);
    let increment = rate::tap_amount(profile, now);

    if current + increment > cap {
        return Err(GameError::CapacityExceeded);
    }

    // Rebase the accrual origin so the increment is durable while the
    // unclaimed value stays purely derived.
    let shift_ms = (increment / r * 1000.0).round() as TimestampMs;
    profile.last_claim_at -= shift_ms;
    profile.counters.taps += 1;
    Ok(increment)
}

/// Commit the unclaimed balance. No-op (returns `None`) when nothing
/// has accrued. `is_auto` only affects the ledger description; the
/// caller uses it to suppress notifications.
pub fn claim(profile: &mut Profile, now: TimestampMs, is_auto: bool) -> Option<f64> {
    let amount = unclaimed_for(profile, now);
    if amount <= 0.0 {
        return None;
    }
    profile.claimed_balance += amount;
    profile.total_mined += amount;
    profile.last_claim_at = now;
    profile.counters.claims += 1;
    let description = if is_auto {
        "Auto-claimed from full storage"
    } else {
        "Manually claimed earnings"
    };
    ledger::append(profile, TxKind::Claim, description, amount, Currency::Qc, now);
    Some(amount)
}

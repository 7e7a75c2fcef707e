//! Shared primitive types used across the entire engine.

use chrono::{DateTime, NaiveDate};

/// A stable, unique identifier for a player profile.
pub type UserId = String;

/// A wall-clock instant, unix epoch milliseconds.
/// Engine entry points take `now` explicitly — nothing in the
/// library reads the platform clock.
pub type TimestampMs = i64;

/// Seconds elapsed between two instants, floored at zero.
pub fn elapsed_seconds(now: TimestampMs, since: TimestampMs) -> f64 {
    (now - since).max(0) as f64 / 1000.0
}

/// The UTC calendar day containing `ts`. Out-of-range instants
/// collapse to the epoch day, which only ever relaxes a same-day check.
pub fn utc_day(ts: TimestampMs) -> NaiveDate {
    DateTime::from_timestamp_millis(ts)
        .map(|dt| dt.date_naive())
        .unwrap_or_default()
}

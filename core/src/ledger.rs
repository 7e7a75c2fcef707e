//! Bounded per-profile transaction ledger.
//!
//! Newest first, truncated to the 50 most recent entries. Wall-clock
//! timestamps can collide within a millisecond, so ordering ties are
//! broken by a per-profile monotone sequence number.

use crate::{config::MAX_TRANSACTIONS, profile::Profile, types::TimestampMs};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxKind {
    Claim,
    Purchase,
    Reward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Currency {
    Qc,
    Ton,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: String,
    /// Strictly increasing per profile; breaks timestamp ties.
    pub seq: u64,
    pub kind: TxKind,
    pub description: String,
    pub amount: f64,
    pub currency: Currency,
    pub created_at: TimestampMs,
}

/// Insert at the head and drop everything past the retention bound.
pub fn append(
    profile: &mut Profile,
    kind: TxKind,
    description: impl Into<String>,
    amount: f64,
    currency: Currency,
    now: TimestampMs,
) {
    let entry = LedgerEntry {
        id: Uuid::new_v4().to_string(),
        seq: profile.tx_seq,
        kind,
        description: description.into(),
        amount,
        currency,
        created_at: now,
    };
    profile.tx_seq += 1;
    profile.transactions.insert(0, entry);
    profile.transactions.truncate(MAX_TRANSACTIONS);
}

//! The per-user profile — the single unit of persisted state.
//!
//! A profile is created exactly once, on first reference to a new user
//! id, and mutated only through engine commands. Every field carries
//! `#[serde(default)]` so snapshots written before a field existed
//! still load (see snapshot.rs for the top-level merge).

use crate::{
    boost::ActiveBoost,
    config::{PermanentKind, SkinKind, StorageTier, UpgradeKind},
    ledger::LedgerEntry,
    mission::Mission,
    progression::AchievementKind,
    types::{TimestampMs, UserId},
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Lifetime activity counters. Monotone: incremented on successful
/// commands, never decremented.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Counters {
    pub taps: u64,
    pub claims: u64,
    pub upgrades_purchased: u64,
    pub boosts_activated: u64,
    pub missions_completed: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyLoginState {
    pub streak: u32,
    pub last_login_at: TimestampMs,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub id: UserId,
    pub claimed_balance: f64,
    pub total_mined: f64,
    /// Accrual origin: unclaimed earnings are always derived from the
    /// time elapsed since this instant, never stored.
    pub last_claim_at: TimestampMs,
    pub upgrades: BTreeMap<UpgradeKind, u8>,
    pub storage_tier: StorageTier,
    pub friends: Vec<Friend>,
    pub active_boost: Option<ActiveBoost>,
    pub counters: Counters,
    pub unlocked_achievements: BTreeSet<AchievementKind>,
    pub wallet_address: Option<String>,
    pub permanent_upgrades: BTreeSet<PermanentKind>,
    /// None means the stock look.
    pub active_skin: Option<SkinKind>,
    pub unlocked_skins: BTreeSet<SkinKind>,
    pub daily_login: DailyLoginState,
    pub missions: Vec<Mission>,
    pub missions_refreshed_at: TimestampMs,
    /// Newest first, at most MAX_TRANSACTIONS entries.
    pub transactions: Vec<LedgerEntry>,
    /// Next ledger sequence number.
    pub tx_seq: u64,
    pub total_ton_spent: f64,
    pub total_time_played_seconds: u64,
}

impl Profile {
    /// A fresh profile for a new user id. The first component comes
    /// pre-installed at level 1 so the rate is nonzero from the start.
    pub fn new(id: impl Into<UserId>, now: TimestampMs) -> Self {
        Self {
            id: id.into(),
            last_claim_at: now,
            upgrades: BTreeMap::from([(UpgradeKind::Core, 1)]),
            ..Default::default()
        }
    }

    pub fn upgrade_level(&self, kind: UpgradeKind) -> u8 {
        self.upgrades.get(&kind).copied().unwrap_or(0)
    }

    pub fn owns_permanent(&self, kind: PermanentKind) -> bool {
        self.permanent_upgrades.contains(&kind)
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            id: UserId::default(),
            claimed_balance: 0.0,
            total_mined: 0.0,
            last_claim_at: 0,
            upgrades: BTreeMap::new(),
            storage_tier: StorageTier::Base,
            friends: Vec::new(),
            active_boost: None,
            counters: Counters::default(),
            unlocked_achievements: BTreeSet::new(),
            wallet_address: None,
            permanent_upgrades: BTreeSet::new(),
            active_skin: None,
            unlocked_skins: BTreeSet::new(),
            daily_login: DailyLoginState::default(),
            missions: Vec::new(),
            missions_refreshed_at: 0,
            transactions: Vec::new(),
            tx_seq: 0,
            total_ton_spent: 0.0,
            total_time_played_seconds: 0,
        }
    }
}

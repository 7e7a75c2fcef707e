//! The game engine — command dispatch and query surface.
//!
//! RULES:
//!   - Every command is all-or-nothing: dispatch mutates a copy of the
//!     profile, and only a fully successful copy replaces the stored
//!     snapshot. An error leaves the previous snapshot untouched.
//!   - After every successful mutating command the full achievement
//!     set is re-evaluated; false→true transitions become events.
//!   - The store handle is passed in at construction and threaded
//!     through every entry point. There is no global state.

use crate::{
    accrual, boost,
    boost::BoostSource,
    command::GameCommand,
    config::{
        BoostKind, DailyReward, League, PermanentKind, SkinKind, UpgradeKind,
        DAILY_LOGIN_REWARDS, DAILY_STREAK_WINDOW_MS, MAX_UPGRADE_LEVEL,
    },
    error::{GameError, GameResult},
    event::{event_type_name, GameEvent},
    ledger::{self, Currency, LedgerEntry, TxKind},
    mission,
    profile::{Friend, Profile},
    progression::{self, AchievementKind},
    rate::{self, RateBreakdown},
    store::ProfileStore,
    types::{utc_day, TimestampMs},
};

pub struct GameEngine {
    pub store: ProfileStore,
}

impl GameEngine {
    pub fn new(store: ProfileStore) -> Self {
        Self { store }
    }

    /// Open a file-backed engine and apply migrations.
    pub fn open(path: &str) -> GameResult<Self> {
        let store = ProfileStore::open(path)?;
        store.migrate()?;
        Ok(Self::new(store))
    }

    /// In-memory engine (used in tests).
    pub fn in_memory() -> GameResult<Self> {
        let store = ProfileStore::in_memory()?;
        store.migrate()?;
        Ok(Self::new(store))
    }

    /// Apply one command to one profile. The profile is created on
    /// first reference. Returns the events the command produced.
    pub fn apply(
        &mut self,
        user_id: &str,
        command: GameCommand,
        now: TimestampMs,
    ) -> GameResult<Vec<GameEvent>> {
        let mut profile = self.store.get_or_create(user_id, now)?.clone();
        let mut events = dispatch(&mut profile, command, now)?;
        events.extend(check_achievements(&mut profile));
        for event in &events {
            log::debug!("{user_id}: {}", event_type_name(event));
        }
        self.store.commit(profile, now);
        Ok(events)
    }

    /// Advisory periodic recompute. Accrues played time and fires an
    /// automatic claim only when storage is full and the auto-claim
    /// upgrade is owned. Idempotent with respect to the unclaimed
    /// balance: it is re-derived here, never accumulated.
    pub fn tick(
        &mut self,
        user_id: &str,
        now: TimestampMs,
        elapsed_seconds: u64,
    ) -> GameResult<Vec<GameEvent>> {
        let mut profile = self.store.get_or_create(user_id, now)?.clone();
        profile.total_time_played_seconds += elapsed_seconds;

        let mut events = Vec::new();
        let r = rate::effective_rate(&profile, now);
        let cap = accrual::capacity_value(r, profile.storage_tier.capacity_seconds());
        let current = accrual::unclaimed_for(&profile, now);
        if profile.owns_permanent(PermanentKind::AutoClaim)
            && r > 0.0
            && accrual::is_full(current, cap)
        {
            if let Some(amount) = accrual::claim(&mut profile, now, true) {
                log::debug!("auto-claimed {amount:.4} for {user_id}");
                events.push(GameEvent::Claimed { amount, is_auto: true });
            }
        }

        events.extend(check_achievements(&mut profile));
        self.store.commit(profile, now);
        Ok(events)
    }

    // ── Queries ────────────────────────────────────────────────
    // Pure reads over the current snapshot; unknown ids are an error,
    // creation only ever happens on the command path.

    pub fn profile(&self, user_id: &str) -> GameResult<&Profile> {
        self.store
            .get(user_id)
            .ok_or_else(|| GameError::Validation(format!("unknown user '{user_id}'")))
    }

    pub fn current_rate(&self, user_id: &str, now: TimestampMs) -> GameResult<f64> {
        Ok(rate::effective_rate(self.profile(user_id)?, now))
    }

    pub fn rate_breakdown(&self, user_id: &str, now: TimestampMs) -> GameResult<RateBreakdown> {
        Ok(rate::breakdown(self.profile(user_id)?, now))
    }

    pub fn unclaimed_earnings(&self, user_id: &str, now: TimestampMs) -> GameResult<f64> {
        Ok(accrual::unclaimed_for(self.profile(user_id)?, now))
    }

    pub fn time_to_full(&self, user_id: &str, now: TimestampMs) -> GameResult<Option<f64>> {
        let profile = self.profile(user_id)?;
        Ok(accrual::time_to_full(
            now,
            profile.last_claim_at,
            rate::effective_rate(profile, now),
            profile.storage_tier.capacity_seconds(),
        ))
    }

    pub fn league(&self, user_id: &str) -> GameResult<&'static League> {
        Ok(progression::league(self.profile(user_id)?.total_mined))
    }

    pub fn halving_stage(&self, user_id: &str) -> GameResult<u8> {
        Ok(progression::halving_stage(self.profile(user_id)?.total_mined))
    }

    pub fn achievements(&self, user_id: &str) -> GameResult<Vec<AchievementKind>> {
        Ok(self
            .profile(user_id)?
            .unlocked_achievements
            .iter()
            .copied()
            .collect())
    }

    pub fn transaction_history(&self, user_id: &str) -> GameResult<&[LedgerEntry]> {
        Ok(&self.profile(user_id)?.transactions)
    }
}

fn check_achievements(profile: &mut Profile) -> Vec<GameEvent> {
    progression::unlock_new(profile)
        .into_iter()
        .map(|kind| {
            log::debug!("achievement unlocked for {}: {}", profile.id, kind.label());
            GameEvent::AchievementUnlocked { kind }
        })
        .collect()
}

fn dispatch(
    profile: &mut Profile,
    command: GameCommand,
    now: TimestampMs,
) -> GameResult<Vec<GameEvent>> {
    match command {
        GameCommand::Tap => {
            let amount = accrual::tap(profile, now)?;
            Ok(vec![GameEvent::TapRegistered { amount }])
        }
        GameCommand::Claim { is_auto } => Ok(accrual::claim(profile, now, is_auto)
            .map(|amount| GameEvent::Claimed { amount, is_auto })
            .into_iter()
            .collect()),
        GameCommand::PurchaseUpgrade { kind } => purchase_upgrade(profile, kind, now),
        GameCommand::PurchaseStorageTier => purchase_storage_tier(profile, now),
        GameCommand::ActivateBoost { kind } => activate_boost(profile, kind, now),
        GameCommand::PurchasePermanent { kind } => purchase_permanent(profile, kind, now),
        GameCommand::PurchaseSkin { kind } => purchase_skin(profile, kind, now),
        GameCommand::EquipSkin { kind } => equip_skin(profile, kind),
        GameCommand::InviteFriend => Ok(vec![invite_friend(profile)]),
        GameCommand::ClaimMissionReward { mission_id } => {
            claim_mission_reward(profile, &mission_id, now)
        }
        GameCommand::ClaimDailyLoginReward => claim_daily_login_reward(profile, now),
        GameCommand::ReplaceDailyMissions { missions } => {
            mission::validate(&missions)?;
            let count = missions.len();
            profile.missions = missions;
            profile.missions_refreshed_at = now;
            Ok(vec![GameEvent::MissionsReplaced { count }])
        }
        GameCommand::ConnectWallet { address } => {
            if address.trim().is_empty() {
                return Err(GameError::Validation("wallet address must not be empty".into()));
            }
            profile.wallet_address = Some(address.clone());
            Ok(vec![GameEvent::WalletConnected { address }])
        }
        GameCommand::DisconnectWallet => {
            profile.wallet_address = None;
            Ok(vec![GameEvent::WalletDisconnected])
        }
    }
}

/// Debit a purchase and record it in the ledger. TON purchases require
/// a connected wallet; the wallet balance itself lives off-engine, so
/// only the lifetime spend is tracked. Soft-currency purchases debit
/// the claimed balance.
fn charge(
    profile: &mut Profile,
    description: &str,
    cost: f64,
    currency: Currency,
    now: TimestampMs,
) -> GameResult<()> {
    match currency {
        Currency::Ton => {
            if profile.wallet_address.is_none() {
                return Err(GameError::WalletRequired);
            }
            profile.total_ton_spent += cost;
        }
        Currency::Qc => {
            if profile.claimed_balance < cost {
                return Err(GameError::InsufficientFunds {
                    needed: cost,
                    available: profile.claimed_balance,
                });
            }
            profile.claimed_balance -= cost;
        }
    }
    ledger::append(profile, TxKind::Purchase, description, cost, currency, now);
    Ok(())
}

fn purchase_upgrade(
    profile: &mut Profile,
    kind: UpgradeKind,
    now: TimestampMs,
) -> GameResult<Vec<GameEvent>> {
    let level = profile.upgrade_level(kind);
    if level >= MAX_UPGRADE_LEVEL {
        return Err(GameError::MaxLevelReached { kind: kind.spec().label });
    }
    let cost = kind.cost_at(level);
    let new_level = level + 1;
    let description = format!("{} Lvl {new_level}", kind.spec().label);
    charge(profile, &description, cost, Currency::Ton, now)?;
    profile.upgrades.insert(kind, new_level);
    profile.counters.upgrades_purchased += 1;
    Ok(vec![GameEvent::UpgradePurchased { kind, new_level, cost_ton: cost }])
}

fn purchase_storage_tier(profile: &mut Profile, now: TimestampMs) -> GameResult<Vec<GameEvent>> {
    let next = profile.storage_tier.next().ok_or(GameError::MaxTierReached)?;
    let cost = next.spec().cost_ton;
    charge(profile, next.spec().label, cost, Currency::Ton, now)?;
    profile.storage_tier = next;
    Ok(vec![GameEvent::StorageTierUpgraded { tier: next, cost_ton: cost }])
}

fn activate_boost(
    profile: &mut Profile,
    kind: BoostKind,
    now: TimestampMs,
) -> GameResult<Vec<GameEvent>> {
    let spec = kind.spec();
    // Slot check before the charge so a held slot can never cost TON.
    if let Some(current) = boost::active(&profile.active_boost, now) {
        return Err(GameError::BoostAlreadyActive { expires_at: current.expires_at });
    }
    charge(profile, spec.label, spec.cost_ton, Currency::Ton, now)?;
    let activated = boost::activate(
        &mut profile.active_boost,
        BoostSource::Purchased { kind },
        spec.multiplier,
        spec.duration_seconds,
        now,
    )?;
    profile.counters.boosts_activated += 1;
    Ok(vec![GameEvent::BoostActivated {
        source: activated.source,
        multiplier: activated.multiplier,
        expires_at: activated.expires_at,
    }])
}

fn purchase_permanent(
    profile: &mut Profile,
    kind: PermanentKind,
    now: TimestampMs,
) -> GameResult<Vec<GameEvent>> {
    if profile.owns_permanent(kind) {
        return Err(GameError::Validation(format!(
            "'{}' is already owned",
            kind.spec().label
        )));
    }
    let cost = kind.spec().cost_ton;
    charge(profile, kind.spec().label, cost, Currency::Ton, now)?;
    profile.permanent_upgrades.insert(kind);
    Ok(vec![GameEvent::PermanentUnlocked { kind, cost_ton: cost }])
}

fn purchase_skin(
    profile: &mut Profile,
    kind: SkinKind,
    now: TimestampMs,
) -> GameResult<Vec<GameEvent>> {
    if profile.unlocked_skins.contains(&kind) {
        return Err(GameError::Validation(format!(
            "skin '{}' is already unlocked",
            kind.spec().label
        )));
    }
    let cost = kind.spec().cost_ton;
    charge(profile, kind.spec().label, cost, Currency::Ton, now)?;
    profile.unlocked_skins.insert(kind);
    // Buying a skin also equips it.
    profile.active_skin = Some(kind);
    Ok(vec![GameEvent::SkinUnlocked { kind, cost_ton: cost }])
}

fn equip_skin(profile: &mut Profile, kind: SkinKind) -> GameResult<Vec<GameEvent>> {
    if !profile.unlocked_skins.contains(&kind) {
        return Err(GameError::Validation(format!(
            "skin '{}' is not unlocked",
            kind.spec().label
        )));
    }
    profile.active_skin = Some(kind);
    Ok(vec![GameEvent::SkinEquipped { kind }])
}

fn invite_friend(profile: &mut Profile) -> GameEvent {
    let id = profile.friends.len() as u64 + 1;
    let name = format!("Friend #{id}");
    profile.friends.push(Friend { id, name: name.clone() });
    GameEvent::FriendInvited { name, friend_count: profile.friends.len() }
}

fn claim_mission_reward(
    profile: &mut Profile,
    mission_id: &str,
    now: TimestampMs,
) -> GameResult<Vec<GameEvent>> {
    let index = profile
        .missions
        .iter()
        .position(|m| m.id == mission_id)
        .ok_or_else(|| GameError::Validation(format!("unknown mission '{mission_id}'")))?;
    if !mission::is_complete(profile, &profile.missions[index]) {
        return Err(GameError::Validation(format!(
            "mission '{mission_id}' is not complete"
        )));
    }
    let claimed = profile.missions.remove(index);
    profile.claimed_balance += claimed.reward;
    profile.counters.missions_completed += 1;
    ledger::append(
        profile,
        TxKind::Reward,
        format!("Mission: {}", claimed.title),
        claimed.reward,
        Currency::Qc,
        now,
    );
    Ok(vec![GameEvent::MissionRewardClaimed {
        mission_id: claimed.id,
        reward: claimed.reward,
    }])
}

fn claim_daily_login_reward(profile: &mut Profile, now: TimestampMs) -> GameResult<Vec<GameEvent>> {
    let last = profile.daily_login.last_login_at;
    if last > 0 && utc_day(now) == utc_day(last) {
        return Err(GameError::Validation(
            "daily reward already claimed today".into(),
        ));
    }

    // The streak continues when the previous claim was recent enough,
    // wrapping over the reward table; otherwise it restarts at day 1.
    let consecutive = last > 0 && now - last < DAILY_STREAK_WINDOW_MS;
    let day_index = if consecutive {
        profile.daily_login.streak % DAILY_LOGIN_REWARDS.len() as u32
    } else {
        0
    };
    let reward = DAILY_LOGIN_REWARDS[day_index as usize];

    match reward {
        DailyReward::Currency { amount } => {
            profile.claimed_balance += amount;
            ledger::append(
                profile,
                TxKind::Reward,
                format!("Daily login streak: day {}", day_index + 1),
                amount,
                Currency::Qc,
                now,
            );
        }
        DailyReward::Boost { multiplier, duration_seconds } => {
            // Same single slot as every other boost. A failure here
            // leaves the streak unconsumed for a later retry today.
            boost::activate(
                &mut profile.active_boost,
                BoostSource::DailyLogin,
                multiplier,
                duration_seconds,
                now,
            )?;
            profile.counters.boosts_activated += 1;
            ledger::append(
                profile,
                TxKind::Reward,
                format!(
                    "Daily login boost: x{multiplier} for {}h",
                    duration_seconds / 3600
                ),
                0.0,
                Currency::Qc,
                now,
            );
        }
    }

    profile.daily_login.streak = day_index + 1;
    profile.daily_login.last_login_at = now;
    Ok(vec![GameEvent::DailyRewardClaimed { day: day_index + 1, reward }])
}

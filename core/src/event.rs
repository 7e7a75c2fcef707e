//! One-shot notifications for the presentation layer.
//!
//! Every successful command returns the events it produced. The engine
//! never renders anything; a collaborator turns these into toasts,
//! haptics, or whatever the surface does with them.
//! Variants are added per release — never removed or reordered.

use crate::{
    boost::BoostSource,
    config::{DailyReward, PermanentKind, SkinKind, StorageTier, UpgradeKind},
    progression::AchievementKind,
    types::TimestampMs,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    TapRegistered {
        amount: f64,
    },
    /// `is_auto` claims are meant to be silent on the surface.
    Claimed {
        amount: f64,
        is_auto: bool,
    },
    UpgradePurchased {
        kind: UpgradeKind,
        new_level: u8,
        cost_ton: f64,
    },
    StorageTierUpgraded {
        tier: StorageTier,
        cost_ton: f64,
    },
    BoostActivated {
        source: BoostSource,
        multiplier: f64,
        expires_at: TimestampMs,
    },
    PermanentUnlocked {
        kind: PermanentKind,
        cost_ton: f64,
    },
    SkinUnlocked {
        kind: SkinKind,
        cost_ton: f64,
    },
    SkinEquipped {
        kind: SkinKind,
    },
    FriendInvited {
        name: String,
        friend_count: usize,
    },
    MissionRewardClaimed {
        mission_id: String,
        reward: f64,
    },
    MissionsReplaced {
        count: usize,
    },
    DailyRewardClaimed {
        day: u32,
        reward: DailyReward,
    },
    WalletConnected {
        address: String,
    },
    WalletDisconnected,
    AchievementUnlocked {
        kind: AchievementKind,
    },
}

/// Stable string name for a GameEvent variant, for logging and sinks
/// that key on event type.
pub fn event_type_name(event: &GameEvent) -> &'static str {
    match event {
        GameEvent::TapRegistered { .. } => "tap_registered",
        GameEvent::Claimed { .. } => "claimed",
        GameEvent::UpgradePurchased { .. } => "upgrade_purchased",
        GameEvent::StorageTierUpgraded { .. } => "storage_tier_upgraded",
        GameEvent::BoostActivated { .. } => "boost_activated",
        GameEvent::PermanentUnlocked { .. } => "permanent_unlocked",
        GameEvent::SkinUnlocked { .. } => "skin_unlocked",
        GameEvent::SkinEquipped { .. } => "skin_equipped",
        GameEvent::FriendInvited { .. } => "friend_invited",
        GameEvent::MissionRewardClaimed { .. } => "mission_reward_claimed",
        GameEvent::MissionsReplaced { .. } => "missions_replaced",
        GameEvent::DailyRewardClaimed { .. } => "daily_reward_claimed",
        GameEvent::WalletConnected { .. } => "wallet_connected",
        GameEvent::WalletDisconnected => "wallet_disconnected",
        GameEvent::AchievementUnlocked { .. } => "achievement_unlocked",
    }
}

use crate::{
    config::{BoostKind, PermanentKind, SkinKind, UpgradeKind},
    mission::Mission,
};
use serde::{Deserialize, Serialize};

/// All player-issued commands.
/// Variants added per release — never removed or reordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum GameCommand {
    // ── Core loop ─────────────────────────────────
    Tap,
    Claim {
        #[serde(default)]
        is_auto: bool,
    },

    // ── Shop ──────────────────────────────────────
    PurchaseUpgrade { kind: UpgradeKind },
    PurchaseStorageTier,
    ActivateBoost { kind: BoostKind },
    PurchasePermanent { kind: PermanentKind },
    PurchaseSkin { kind: SkinKind },
    EquipSkin { kind: SkinKind },

    // ── Social & retention ────────────────────────
    InviteFriend,
    ClaimMissionReward { mission_id: String },
    ClaimDailyLoginReward,
    ReplaceDailyMissions { missions: Vec<Mission> },

    // ── Wallet ────────────────────────────────────
    ConnectWallet { address: String },
    DisconnectWallet,
}

//! Statically enumerated game configuration.
//!
//! RULE: Every purchasable kind is a closed enum resolved at compile
//! time. No dynamically keyed tables — an unknown kind cannot exist
//! past deserialization, so command handlers never look anything up
//! by string.

use serde::{Deserialize, Serialize};

/// Total token supply; 70% of it is the mining reward pool that the
/// halving thresholds are expressed against.
pub const TOTAL_SUPPLY: f64 = 444_000_000.0;
pub const MINING_REWARD_POOL: f64 = TOTAL_SUPPLY * 0.7;

pub const MAX_UPGRADE_LEVEL: u8 = 5;

/// Each purchase of the same component costs 2.5x the previous level.
pub const UPGRADE_COST_GROWTH: f64 = 2.5;

/// Mining bonus per invited friend (5%), doubled by the amplifier.
pub const FRIEND_BONUS_PER_FRIEND: f64 = 0.05;

/// Base value credited by one tap, before rate multipliers.
pub const TAP_BASE_AMOUNT: f64 = 0.001;

/// Ledger retention: the 50 most recent entries.
pub const MAX_TRANSACTIONS: usize = 50;

/// A daily-login claim continues the streak when the previous claim
/// was less than 48 hours ago.
pub const DAILY_STREAK_WINDOW_MS: i64 = 48 * 3600 * 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Uncommon,
    Rare,
    Legendary,
    Ultra,
}

// ── Mining components ──────────────────────────────────────────────

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeKind {
    Core,
    Cooler,
    DataBus,
    Power,
}

pub struct UpgradeSpec {
    pub label: &'static str,
    pub base_cost_ton: f64,
    /// Production added per level, units per second.
    pub per_level_rate: f64,
    pub rarity: Rarity,
}

impl UpgradeKind {
    pub const ALL: [UpgradeKind; 4] = [
        UpgradeKind::Core,
        UpgradeKind::Cooler,
        UpgradeKind::DataBus,
        UpgradeKind::Power,
    ];

    pub fn spec(self) -> &'static UpgradeSpec {
        match self {
            UpgradeKind::Core => &UpgradeSpec {
                label: "Quantum Processor",
                base_cost_ton: 0.09,
                per_level_rate: 0.0005,
                rarity: Rarity::Uncommon,
            },
            UpgradeKind::Cooler => &UpgradeSpec {
                label: "Cryo Cooler",
                base_cost_ton: 0.54,
                per_level_rate: 0.0025,
                rarity: Rarity::Uncommon,
            },
            UpgradeKind::DataBus => &UpgradeSpec {
                label: "Neutrino Bus",
                base_cost_ton: 2.7,
                per_level_rate: 0.0110,
                rarity: Rarity::Rare,
            },
            UpgradeKind::Power => &UpgradeSpec {
                label: "Fusion Power Supply",
                base_cost_ton: 10.5,
                per_level_rate: 0.0525,
                rarity: Rarity::Rare,
            },
        }
    }

    /// Cost of buying the next level when `level` is already owned.
    pub fn cost_at(self, level: u8) -> f64 {
        self.spec().base_cost_ton * UPGRADE_COST_GROWTH.powi(level as i32)
    }
}

// ── Storage tiers ──────────────────────────────────────────────────

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum StorageTier {
    Base,
    Extended,
    HyperCore,
}

pub struct StorageSpec {
    pub label: &'static str,
    pub cost_ton: f64,
    pub capacity_hours: u64,
    pub rarity: Rarity,
}

impl StorageTier {
    pub fn spec(self) -> &'static StorageSpec {
        match self {
            StorageTier::Base => &StorageSpec {
                label: "Base Storage",
                cost_ton: 0.0,
                capacity_hours: 6,
                rarity: Rarity::Uncommon,
            },
            StorageTier::Extended => &StorageSpec {
                label: "Extended Array",
                cost_ton: 2.1,
                capacity_hours: 12,
                rarity: Rarity::Rare,
            },
            StorageTier::HyperCore => &StorageSpec {
                label: "Hyper-Core Bank",
                cost_ton: 10.5,
                capacity_hours: 24,
                rarity: Rarity::Legendary,
            },
        }
    }

    pub fn capacity_seconds(self) -> f64 {
        (self.spec().capacity_hours * 3600) as f64
    }

    pub fn next(self) -> Option<StorageTier> {
        match self {
            StorageTier::Base => Some(StorageTier::Extended),
            StorageTier::Extended => Some(StorageTier::HyperCore),
            StorageTier::HyperCore => None,
        }
    }
}

impl Default for StorageTier {
    fn default() -> Self {
        StorageTier::Base
    }
}

// ── Boosts ─────────────────────────────────────────────────────────

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum BoostKind {
    Turbo,
    Overdrive,
    Singularity,
}

pub struct BoostSpec {
    pub label: &'static str,
    pub cost_ton: f64,
    pub multiplier: f64,
    pub duration_seconds: u64,
    pub rarity: Rarity,
}

impl BoostKind {
    pub const ALL: [BoostKind; 3] =
        [BoostKind::Turbo, BoostKind::Overdrive, BoostKind::Singularity];

    pub fn spec(self) -> &'static BoostSpec {
        match self {
            BoostKind::Turbo => &BoostSpec {
                label: "TON Turbocharge",
                cost_ton: 0.45,
                multiplier: 3.0,
                duration_seconds: 4 * 3600,
                rarity: Rarity::Uncommon,
            },
            BoostKind::Overdrive => &BoostSpec {
                label: "TON Overdrive",
                cost_ton: 1.05,
                multiplier: 6.0,
                duration_seconds: 8 * 3600,
                rarity: Rarity::Rare,
            },
            BoostKind::Singularity => &BoostSpec {
                label: "TON Singularity",
                cost_ton: 2.1,
                multiplier: 12.0,
                duration_seconds: 12 * 3600,
                rarity: Rarity::Legendary,
            },
        }
    }
}

// ── Permanent upgrades ─────────────────────────────────────────────

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PermanentKind {
    AutoClaim,
    FriendBonusAmp,
}

pub struct PermanentSpec {
    pub label: &'static str,
    pub cost_ton: f64,
    pub rarity: Rarity,
}

impl PermanentKind {
    pub const ALL: [PermanentKind; 2] =
        [PermanentKind::AutoClaim, PermanentKind::FriendBonusAmp];

    pub fn spec(self) -> &'static PermanentSpec {
        match self {
            PermanentKind::AutoClaim => &PermanentSpec {
                label: "Auto-Claim Bot",
                cost_ton: 21.0,
                rarity: Rarity::Legendary,
            },
            PermanentKind::FriendBonusAmp => &PermanentSpec {
                label: "Friendship Amplifier",
                cost_ton: 15.0,
                rarity: Rarity::Legendary,
            },
        }
    }
}

// ── Skins ──────────────────────────────────────────────────────────

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SkinKind {
    FractalDimension,
    ChronoCore,
    DarkMatterReactor,
    CyberVortex,
}

pub struct SkinSpec {
    pub label: &'static str,
    pub cost_ton: f64,
    pub rarity: Rarity,
}

impl SkinKind {
    pub const ALL: [SkinKind; 4] = [
        SkinKind::FractalDimension,
        SkinKind::ChronoCore,
        SkinKind::DarkMatterReactor,
        SkinKind::CyberVortex,
    ];

    pub fn spec(self) -> &'static SkinSpec {
        match self {
            SkinKind::FractalDimension => &SkinSpec {
                label: "Fractal Dimension",
                cost_ton: 7.5,
                rarity: Rarity::Ultra,
            },
            SkinKind::ChronoCore => &SkinSpec {
                label: "ChronoCore",
                cost_ton: 7.5,
                rarity: Rarity::Ultra,
            },
            SkinKind::DarkMatterReactor => &SkinSpec {
                label: "Dark Matter Reactor",
                cost_ton: 10.5,
                rarity: Rarity::Ultra,
            },
            SkinKind::CyberVortex => &SkinSpec {
                label: "Cyber Vortex",
                cost_ton: 10.5,
                rarity: Rarity::Ultra,
            },
        }
    }
}

// ── Halving tiers ──────────────────────────────────────────────────

pub struct HalvingTier {
    /// Lifetime mined total at which this tier takes effect.
    pub threshold: f64,
    pub multiplier: f64,
    pub stage: u8,
}

/// Ascending by threshold. The highest tier reached wins; an exact
/// boundary counts as reached. Stage 1 (multiplier 1.0) is implicit.
pub const HALVING_TIERS: [HalvingTier; 5] = [
    HalvingTier { threshold: MINING_REWARD_POOL * 0.01, multiplier: 0.5, stage: 2 },
    HalvingTier { threshold: MINING_REWARD_POOL * 0.035, multiplier: 0.2, stage: 3 },
    HalvingTier { threshold: MINING_REWARD_POOL * 0.08, multiplier: 0.1, stage: 4 },
    HalvingTier { threshold: MINING_REWARD_POOL * 0.2, multiplier: 0.05, stage: 5 },
    HalvingTier { threshold: MINING_REWARD_POOL * 0.35, multiplier: 0.01, stage: 6 },
];

// ── Leagues ────────────────────────────────────────────────────────

pub struct League {
    pub name: &'static str,
    pub min_mined: f64,
}

/// Ascending by threshold; the highest threshold not exceeding the
/// lifetime mined total names the league.
pub const LEAGUES: [League; 6] = [
    League { name: "Bronze", min_mined: 0.0 },
    League { name: "Silver", min_mined: 10_000.0 },
    League { name: "Gold", min_mined: 100_000.0 },
    League { name: "Platinum", min_mined: 1_000_000.0 },
    League { name: "Diamond", min_mined: 10_000_000.0 },
    League { name: "Quantum", min_mined: 50_000_000.0 },
];

// ── Daily login rewards ────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reward", rename_all = "snake_case")]
pub enum DailyReward {
    Currency { amount: f64 },
    Boost { multiplier: f64, duration_seconds: u64 },
}

/// One entry per streak day; the streak wraps after the last entry.
pub const DAILY_LOGIN_REWARDS: [DailyReward; 7] = [
    DailyReward::Currency { amount: 500.0 },
    DailyReward::Currency { amount: 1_000.0 },
    DailyReward::Boost { multiplier: 1.5, duration_seconds: 3600 },
    DailyReward::Currency { amount: 2_500.0 },
    DailyReward::Currency { amount: 5_000.0 },
    DailyReward::Boost { multiplier: 2.0, duration_seconds: 7200 },
    DailyReward::Currency { amount: 15_000.0 },
];

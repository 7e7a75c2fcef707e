use crate::types::TimestampMs;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid command: {0}")]
    Validation(String),

    #[error("Insufficient funds: need {needed:.4}, have {available:.4}")]
    InsufficientFunds { needed: f64, available: f64 },

    #[error("Storage capacity exceeded")]
    CapacityExceeded,

    #[error("A boost is already active until {expires_at}")]
    BoostAlreadyActive { expires_at: TimestampMs },

    #[error("Component '{kind}' is already at max level")]
    MaxLevelReached { kind: &'static str },

    #[error("Storage is already at the highest tier")]
    MaxTierReached,

    #[error("A connected wallet is required for this purchase")]
    WalletRequired,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type GameResult<T> = Result<T, GameError>;

//! Externally supplied daily-mission descriptors.
//!
//! The engine never generates mission content. A collaborator hands
//! over a batch of descriptors; schema validation runs before anything
//! is stored, and progress is measured against the lifetime counters.

use crate::{
    error::{GameError, GameResult},
    profile::Profile,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionGoal {
    Taps,
    Claims,
    Upgrades,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub id: String,
    pub title: String,
    pub description: String,
    pub target: u64,
    #[serde(rename = "type")]
    pub goal: MissionGoal,
    pub reward: f64,
}

/// Schema validation for an incoming batch. All-or-nothing: one bad
/// descriptor rejects the whole batch before storage.
pub fn validate(missions: &[Mission]) -> GameResult<()> {
    let mut seen = HashSet::new();
    for m in missions {
        if m.id.trim().is_empty() {
            return Err(GameError::Validation("mission id must not be empty".into()));
        }
        if !seen.insert(m.id.as_str()) {
            return Err(GameError::Validation(format!("duplicate mission id '{}'", m.id)));
        }
        if m.title.trim().is_empty() {
            return Err(GameError::Validation(format!(
                "mission '{}' has an empty title",
                m.id
            )));
        }
        if m.target == 0 {
            return Err(GameError::Validation(format!(
                "mission '{}' target must be at least 1",
                m.id
            )));
        }
        if !m.reward.is_finite() || m.reward <= 0.0 {
            return Err(GameError::Validation(format!(
                "mission '{}' reward must be positive",
                m.id
            )));
        }
    }
    Ok(())
}

/// Lifetime counter the mission's goal is measured against.
pub fn progress(profile: &Profile, mission: &Mission) -> u64 {
    match mission.goal {
        MissionGoal::Taps => profile.counters.taps,
        MissionGoal::Claims => profile.counters.claims,
        MissionGoal::Upgrades => profile.counters.upgrades_purchased,
    }
}

pub fn is_complete(profile: &Profile, mission: &Mission) -> bool {
    progress(profile, mission) >= mission.target
}

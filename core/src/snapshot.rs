//! Profile snapshot serialization — full profile state to/from JSON.
//!
//! Loading is forward-compatible: any top-level field absent from the
//! stored payload is filled from the default profile via a shallow
//! structural merge. Fields that are present — including whole nested
//! objects — are taken verbatim. Payloads that are not JSON objects at
//! all degrade to the defaults rather than failing the load.

use crate::{error::GameResult, profile::Profile};
use serde_json::Value;

pub fn to_json(profile: &Profile) -> GameResult<String> {
    Ok(serde_json::to_string(profile)?)
}

/// Parse a persisted snapshot, filling missing top-level fields from
/// `defaults`. Not deep-recursive: a present-but-partial nested object
/// is handled by that type's own serde defaults.
pub fn from_json_merged(json: &str, defaults: &Profile) -> GameResult<Profile> {
    let stored: Value = match serde_json::from_str(json) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("unreadable profile snapshot, using defaults: {e}");
            return Ok(defaults.clone());
        }
    };

    let Value::Object(mut map) = stored else {
        log::warn!("profile snapshot is not an object, using defaults");
        return Ok(defaults.clone());
    };

    let Value::Object(default_map) = serde_json::to_value(defaults)? else {
        unreachable!("Profile always serializes to an object");
    };
    for (key, value) in default_map {
        map.entry(key).or_insert(value);
    }

    Ok(serde_json::from_value(Value::Object(map))?)
}

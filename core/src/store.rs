//! Profile store: authoritative in-memory snapshots plus the SQLite
//! durable layer.
//!
//! RULE: Only store.rs talks to the database. The engine calls store
//! methods — it never executes SQL directly.
//!
//! A command is applied to a copy of the profile and committed back as
//! one snapshot replace, so no partially mutated profile is ever
//! observable. The durable flush is decoupled: if it fails the command
//! still succeeds, the in-memory snapshot stays authoritative, and the
//! next successful flush catches up.

use crate::{
    error::GameResult,
    profile::Profile,
    snapshot,
    types::{TimestampMs, UserId},
};
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;

pub struct ProfileStore {
    profiles: HashMap<UserId, Profile>,
    conn: Connection,
}

impl ProfileStore {
    /// Open (or create) the profile database at `path`.
    pub fn open(path: &str) -> GameResult<Self> {
        let conn = Connection::open(path)?;
        // WAL mode: better concurrent read performance.
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        Ok(Self { profiles: HashMap::new(), conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> GameResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { profiles: HashMap::new(), conn })
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> GameResult<()> {
        self.conn
            .execute_batch(include_str!("../../migrations/001_profiles.sql"))?;
        Ok(())
    }

    // ── Snapshots ──────────────────────────────────────────────

    /// The profile for `user_id`, created exactly once on first
    /// reference: a cold durable snapshot is loaded (default-merged),
    /// otherwise a fresh default profile is created.
    pub fn get_or_create(&mut self, user_id: &str, now: TimestampMs) -> GameResult<&Profile> {
        if !self.profiles.contains_key(user_id) {
            let defaults = Profile::new(user_id, now);
            let profile = match self.load_snapshot(user_id)? {
                Some(json) => snapshot::from_json_merged(&json, &defaults)?,
                None => {
                    log::debug!("creating profile for {user_id}");
                    defaults
                }
            };
            self.profiles.insert(user_id.to_string(), profile);
        }
        Ok(&self.profiles[user_id])
    }

    pub fn get(&self, user_id: &str) -> Option<&Profile> {
        self.profiles.get(user_id)
    }

    /// Atomically replace the stored snapshot with a fully mutated
    /// copy, then flush. Flush failures are logged, never surfaced:
    /// the in-memory snapshot is authoritative until the next
    /// successful flush.
    pub fn commit(&mut self, profile: Profile, now: TimestampMs) {
        let user_id = profile.id.clone();
        self.profiles.insert(user_id.clone(), profile);
        if let Err(e) = self.flush(&user_id, now) {
            log::warn!("durable flush failed for {user_id}: {e}");
        }
    }

    fn flush(&self, user_id: &str, now: TimestampMs) -> GameResult<()> {
        let profile = &self.profiles[user_id];
        let json = snapshot::to_json(profile)?;
        self.save_snapshot(user_id, &json, now)?;
        Ok(())
    }

    // ── Durable rows ───────────────────────────────────────────

    pub fn save_snapshot(
        &self,
        user_id: &str,
        state_json: &str,
        now: TimestampMs,
    ) -> GameResult<()> {
        self.conn.execute(
            "INSERT INTO profile (user_id, state_json, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(user_id) DO UPDATE SET state_json = ?2, updated_at = ?3",
            params![user_id, state_json, now],
        )?;
        Ok(())
    }

    pub fn load_snapshot(&self, user_id: &str) -> GameResult<Option<String>> {
        let json = self
            .conn
            .query_row(
                "SELECT state_json FROM profile WHERE user_id = ?1",
                params![user_id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(json)
    }

    /// Drop the in-memory snapshot so the next access reloads from the
    /// durable row. Used by tests and recovery tooling.
    pub fn evict(&mut self, user_id: &str) {
        self.profiles.remove(user_id);
    }
}

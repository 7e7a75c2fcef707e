//! mine-runner: headless session driver for the AstroMine engine.
//!
//! Simulates a seeded player against a real engine and prints an
//! end-of-run summary. Useful for smoke-testing economy tuning
//! without any UI attached.
//!
//! Usage:
//!   mine-runner --seed 12345 --hours 48 --db run.db
//!   mine-runner --seed 12345 --json

use anyhow::Result;
use astromine_core::{
    command::GameCommand,
    config::{BoostKind, PermanentKind, UpgradeKind},
    engine::GameEngine,
    error::GameError,
    event::GameEvent,
};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use std::env;

/// Machine-readable end-of-run state for downstream tooling.
#[derive(serde::Serialize)]
struct RunSummary<'a> {
    user_id: &'a str,
    claimed_balance: f64,
    total_mined: f64,
    effective_rate: f64,
    halving_stage: u8,
    league: &'static str,
    taps: u64,
    claims: u64,
    upgrades_purchased: u64,
    boosts_activated: u64,
    friends: usize,
    ton_spent: f64,
    rejected_commands: u64,
    achievements: Vec<&'static str>,
}

/// Deterministic driver RNG. The engine itself is free of randomness;
/// only the simulated player rolls dice.
struct DriverRng {
    inner: Pcg64Mcg,
}

impl DriverRng {
    fn new(seed: u64) -> Self {
        Self { inner: Pcg64Mcg::seed_from_u64(seed) }
    }

    fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    fn below(&mut self, n: u64) -> u64 {
        use rand::RngCore;
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let hours = parse_arg(&args, "--hours", 48u64);
    let json_mode = args.iter().any(|a| a == "--json");
    let db = args
        .windows(2)
        .find(|w| w[0] == "--db")
        .map(|w| w[1].as_str());

    if !json_mode {
        println!("AstroMine — mine-runner");
        println!("  seed:  {seed}");
        println!("  hours: {hours}");
        println!("  db:    {}", db.unwrap_or(":memory:"));
        println!();
    }

    let mut engine = match db {
        Some(path) => GameEngine::open(path)?,
        None => GameEngine::in_memory()?,
    };

    let user_id = format!("sim-player-{seed}");
    let mut rng = DriverRng::new(seed);

    // Fixed start instant so identical seeds replay identically.
    let start_ms: i64 = 1_754_000_000_000;
    let step_s: u64 = 60;
    let steps = hours * 3600 / step_s;

    let mut now = start_ms;
    let mut rejected: u64 = 0;
    let mut notifications: u64 = 0;

    // The simulated player connects a wallet up front so TON
    // purchases can go through.
    engine.apply(
        &user_id,
        GameCommand::ConnectWallet { address: format!("UQsim{seed:016x}") },
        now,
    )?;

    for _ in 0..steps {
        now += (step_s * 1000) as i64;

        // The advisory recompute every step, like a live display would.
        notifications += count_visible(&engine.tick(&user_id, now, step_s)?);

        // A short tap burst most minutes.
        if rng.chance(0.7) {
            for _ in 0..rng.below(8) {
                match engine.apply(&user_id, GameCommand::Tap, now) {
                    Ok(events) => notifications += count_visible(&events),
                    Err(GameError::CapacityExceeded) => rejected += 1,
                    Err(e) => return Err(e.into()),
                }
            }
        }

        // Claim when the store is getting full.
        let unclaimed = engine.unclaimed_earnings(&user_id, now)?;
        let rate = engine.current_rate(&user_id, now)?;
        let cap = rate * engine.profile(&user_id)?.storage_tier.capacity_seconds();
        if cap > 0.0 && unclaimed / cap > 0.8 && rng.chance(0.5) {
            notifications +=
                count_visible(&engine.apply(&user_id, GameCommand::Claim { is_auto: false }, now)?);
        }

        // Occasional shopping spree.
        if rng.chance(0.02) {
            let kind = UpgradeKind::ALL[rng.below(UpgradeKind::ALL.len() as u64) as usize];
            match engine.apply(&user_id, GameCommand::PurchaseUpgrade { kind }, now) {
                Ok(events) => notifications += count_visible(&events),
                Err(GameError::MaxLevelReached { .. }) => rejected += 1,
                Err(e) => return Err(e.into()),
            }
        }
        if rng.chance(0.005) {
            let kind = BoostKind::ALL[rng.below(BoostKind::ALL.len() as u64) as usize];
            match engine.apply(&user_id, GameCommand::ActivateBoost { kind }, now) {
                Ok(events) => notifications += count_visible(&events),
                Err(GameError::BoostAlreadyActive { .. }) => rejected += 1,
                Err(e) => return Err(e.into()),
            }
        }
        if rng.chance(0.002) {
            match engine.apply(
                &user_id,
                GameCommand::PurchasePermanent { kind: PermanentKind::AutoClaim },
                now,
            ) {
                Ok(events) => notifications += count_visible(&events),
                Err(GameError::Validation(_)) => rejected += 1,
                Err(e) => return Err(e.into()),
            }
        }
        if rng.chance(0.01) {
            notifications += count_visible(&engine.apply(&user_id, GameCommand::InviteFriend, now)?);
        }
    }

    log::info!("session replay done: {steps} steps, {rejected} commands rejected");

    if json_mode {
        let profile = engine.profile(&user_id)?;
        let summary = RunSummary {
            user_id: &user_id,
            claimed_balance: profile.claimed_balance,
            total_mined: profile.total_mined,
            effective_rate: engine.current_rate(&user_id, now)?,
            halving_stage: engine.halving_stage(&user_id)?,
            league: engine.league(&user_id)?.name,
            taps: profile.counters.taps,
            claims: profile.counters.claims,
            upgrades_purchased: profile.counters.upgrades_purchased,
            boosts_activated: profile.counters.boosts_activated,
            friends: profile.friends.len(),
            ton_spent: profile.total_ton_spent,
            rejected_commands: rejected,
            achievements: engine
                .achievements(&user_id)?
                .into_iter()
                .map(|a| a.label())
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&engine, &user_id, now, rejected, notifications)?;
    }
    Ok(())
}

/// Events a surface would actually show; silent auto-claims excluded.
fn count_visible(events: &[GameEvent]) -> u64 {
    events
        .iter()
        .filter(|e| !matches!(e, GameEvent::Claimed { is_auto: true, .. }))
        .count() as u64
}

fn print_summary(
    engine: &GameEngine,
    user_id: &str,
    now: i64,
    rejected: u64,
    notifications: u64,
) -> Result<()> {
    let profile = engine.profile(user_id)?;
    let breakdown = engine.rate_breakdown(user_id, now)?;

    println!("=== RUN SUMMARY ===");
    println!("  user:           {user_id}");
    println!("  balance:        {:.4}", profile.claimed_balance);
    println!("  total mined:    {:.4}", profile.total_mined);
    println!("  rate:           {:.6}/s (stage {})", breakdown.effective, breakdown.halving_stage);
    println!("  league:         {}", engine.league(user_id)?.name);
    println!("  taps:           {}", profile.counters.taps);
    println!("  claims:         {}", profile.counters.claims);
    println!("  upgrades:       {}", profile.counters.upgrades_purchased);
    println!("  boosts:         {}", profile.counters.boosts_activated);
    println!("  friends:        {}", profile.friends.len());
    println!("  ton spent:      {:.2}", profile.total_ton_spent);
    println!("  rejected cmds:  {rejected}");
    println!("  notifications:  {notifications}");

    let achievements = engine.achievements(user_id)?;
    if achievements.is_empty() {
        println!("  achievements:   (none)");
    } else {
        let labels: Vec<_> = achievements.iter().map(|a| a.label()).collect();
        println!("  achievements:   {}", labels.join(", "));
    }

    println!();
    println!("=== RECENT LEDGER ===");
    for entry in engine.transaction_history(user_id)?.iter().take(10) {
        let when = chrono::DateTime::from_timestamp_millis(entry.created_at)
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| entry.created_at.to_string());
        println!(
            "  {when} | {:?} | {} | {:.4} {:?}",
            entry.kind, entry.description, entry.amount, entry.currency
        );
    }
    Ok(())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

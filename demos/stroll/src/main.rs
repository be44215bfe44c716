//! stroll — deterministic end-to-end demo of the hunt engine.
//!
//! Simulates one play session: a first GPS fix in lower Manhattan spawns
//! the world, then the player walks to every treasure and obstacle in
//! 25 m steps, collecting and clearing on arrival, and finally resets for
//! a fresh round.  Run with `RUST_LOG=debug` to see the session's tracing
//! events interleaved with the tables.

use anyhow::Result;

use hunt_core::{GeoPoint, UserLocation};
use hunt_session::{ClearOutcome, CollectOutcome, GameSession, LocationUpdate, SessionConfig};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:           u64 = 42;
const START_LAT:      f64 = 40.0;
const START_LON:      f64 = -74.0;
const GPS_ACCURACY_M: f64 = 5.0;
const STEP_M:         f64 = 25.0; // one simulated stride between fixes

// ── Walking ───────────────────────────────────────────────────────────────────

/// Feed position fixes along a straight line until `target` is within the
/// session's interaction radius.  Returns the number of fixes delivered.
fn walk_to(session: &mut GameSession, target: GeoPoint) -> usize {
    let radius = session.config().interaction_radius_m;
    let mut steps = 0;
    loop {
        let here = session.location().expect("fix delivered before walking").point;
        let remaining = here.distance_m(target);
        if remaining <= radius {
            return steps;
        }
        let next = here.offset(here.bearing_to(target), remaining.min(STEP_M));
        session.update_location(UserLocation::new(next.lat, next.lon, GPS_ACCURACY_M));
        steps += 1;
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== stroll — hunt engine demo ===");
    println!("Seed: {SEED}  |  Start: ({START_LAT}, {START_LON})");
    println!();

    // 1. Create the session and deliver the first fix.
    let mut session = GameSession::new(SessionConfig::new(SEED))?;
    let update = session.update_location(UserLocation::new(START_LAT, START_LON, GPS_ACCURACY_M));
    match update {
        LocationUpdate::FirstFix { treasures, obstacles } => {
            println!("World spawned: {treasures} treasures, {obstacles} obstacles");
        }
        other => anyhow::bail!("expected the first fix to spawn the world, got {other:?}"),
    }
    println!();

    // 2. Survey the spawned world.
    println!("{:<18} {:<10} {:>6} {:>10}", "Treasure", "Rarity", "Points", "Distance");
    println!("{}", "-".repeat(48));
    for t in session.treasures() {
        let d = session.distance_to(t.location).expect("fix is set");
        println!("{:<18} {:<10} {:>6} {:>8.0} m", t.name, t.rarity.as_str(), t.points, d);
    }
    println!();
    println!("{:<10} {:<8} {:>10}", "Obstacle", "Level", "Distance");
    println!("{}", "-".repeat(30));
    for o in session.obstacles() {
        let d = session.distance_to(o.location).expect("fix is set");
        println!("{:<10} {:<8} {:>8.0} m", o.kind.as_str(), o.difficulty.as_str(), d);
    }
    println!();

    // 3. Walk to each treasure and collect it.
    let targets: Vec<_> = session
        .treasures()
        .iter()
        .map(|t| (t.id, t.location))
        .collect();
    for (id, location) in targets {
        let steps = walk_to(&mut session, location);
        match session.collect_treasure(id)? {
            CollectOutcome::Collected { name, points } => {
                println!("Collected {name} (+{points} pts) after {steps} steps");
            }
            other => println!("Collect of {id} came back {other:?}"),
        }
    }
    println!();

    // 4. Clear the obstacles the same way.
    let targets: Vec<_> = session
        .obstacles()
        .iter()
        .map(|o| (o.id, o.location))
        .collect();
    for (id, location) in targets {
        let steps = walk_to(&mut session, location);
        match session.clear_obstacle(id)? {
            ClearOutcome::Cleared { kind, difficulty } => {
                println!("Cleared a {difficulty} {kind} (+10 pts) after {steps} steps");
            }
            other => println!("Clear of {id} came back {other:?}"),
        }
    }
    println!();

    // 5. Final tally, then prove reset regenerates a fresh round.
    println!("Final: {}", session.stats());
    session.reset();
    println!(
        "After reset: {} — {} new treasures on the map",
        session.stats(),
        session.treasures().len()
    );

    Ok(())
}

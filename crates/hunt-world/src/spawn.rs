//! Batch spawners — place fresh treasures and obstacles around a point.
//!
//! Both spawners are pure in their inputs: the only state they touch is
//! the rng they are handed, so the same rng state always reproduces the
//! same batch.  They never fail for valid inputs; a `count` of zero yields
//! an empty batch.

use hunt_core::{GeoPoint, ObstacleId, SessionRng, TreasureId};

use crate::{Catalog, Difficulty, Obstacle, ObstacleKind, Rarity, Treasure};

// Per-treasure distance band: the lower edge is re-rolled in
// [MIN_LOW, MIN_HIGH) and the upper edge in [MAX_LOW, MAX_HIGH), so every
// treasure lands 50–300 m out but the bands themselves vary item to item.
const TREASURE_MIN_LOW_M:  f64 = 50.0;
const TREASURE_MIN_HIGH_M: f64 = 150.0;
const TREASURE_MAX_LOW_M:  f64 = 150.0;
const TREASURE_MAX_HIGH_M: f64 = 300.0;

// Obstacles use one fixed band.
const OBSTACLE_MIN_M: f64 = 50.0;
const OBSTACLE_MAX_M: f64 = 200.0;

/// Spawn `count` treasures around `center`, all unfound.
///
/// Each treasure independently re-rolls its distance band, position,
/// rarity, point value, and flavour text.
pub fn spawn_treasures(
    center: GeoPoint,
    count: usize,
    catalog: &Catalog,
    rng: &mut SessionRng,
) -> Vec<Treasure> {
    (0..count)
        .map(|_| {
            let min_m = rng.gen_range(TREASURE_MIN_LOW_M..TREASURE_MIN_HIGH_M);
            let max_m = rng.gen_range(TREASURE_MAX_LOW_M..TREASURE_MAX_HIGH_M);
            let location = center.random_in_band(min_m, max_m, rng);

            let rarity = Rarity::roll(rng);
            let points = rarity.roll_points(rng);

            Treasure {
                id: TreasureId::mint(rng),
                name: catalog.pick_name(rng),
                description: catalog.pick_description(rng),
                points,
                rarity,
                location,
                found: false,
            }
        })
        .collect()
}

/// Spawn `count` obstacles 50–200 m from `center`, all uncleared.
pub fn spawn_obstacles(center: GeoPoint, count: usize, rng: &mut SessionRng) -> Vec<Obstacle> {
    (0..count)
        .map(|_| Obstacle {
            id: ObstacleId::mint(rng),
            kind: ObstacleKind::roll(rng),
            difficulty: Difficulty::roll(rng),
            location: center.random_in_band(OBSTACLE_MIN_M, OBSTACLE_MAX_M, rng),
            completed: false,
        })
        .collect()
}

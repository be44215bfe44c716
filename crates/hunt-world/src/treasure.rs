//! Treasure records and rarity rolls.

use hunt_core::{GeoPoint, SessionRng, TreasureId};

// ── Rarity ────────────────────────────────────────────────────────────────────

/// How rare a treasure is.  Ordered: `Common < … < Legendary`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// All rarities in ascending order.
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    /// Roll a rarity from one uniform [0, 1) draw.
    ///
    /// Cumulative thresholds: common 40 %, uncommon 30 %, rare 20 %,
    /// epic 8 %, legendary 2 %.
    pub fn roll(rng: &mut SessionRng) -> Rarity {
        let u: f64 = rng.random();
        if u < 0.40 {
            Rarity::Common
        } else if u < 0.70 {
            Rarity::Uncommon
        } else if u < 0.90 {
            Rarity::Rare
        } else if u < 0.98 {
            Rarity::Epic
        } else {
            Rarity::Legendary
        }
    }

    /// Point value band for this rarity: `(base, range)`.
    ///
    /// A roll awards `base + floor(u · range)`, i.e. integers in
    /// `[base, base + range)`.
    pub const fn points_band(self) -> (u32, u32) {
        match self {
            Rarity::Common    => (10, 10),
            Rarity::Uncommon  => (20, 20),
            Rarity::Rare      => (40, 30),
            Rarity::Epic      => (70, 50),
            Rarity::Legendary => (120, 80),
        }
    }

    /// Roll a point value within this rarity's band.
    pub fn roll_points(self, rng: &mut SessionRng) -> u32 {
        let (base, range) = self.points_band();
        base + (rng.random::<f64>() * range as f64).floor() as u32
    }

    /// Human-readable label, useful for tables and log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Rarity::Common    => "common",
            Rarity::Uncommon  => "uncommon",
            Rarity::Rare      => "rare",
            Rarity::Epic      => "epic",
            Rarity::Legendary => "legendary",
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Treasure ──────────────────────────────────────────────────────────────────

/// A collectable placed in the world.
///
/// The position is fixed at spawn time and never re-rolled as the player
/// moves; only the computed distance to the player changes.  `found`
/// flips `false → true` exactly once, when the session accepts a collect.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Treasure {
    pub id: TreasureId,
    pub name: String,
    pub description: String,
    pub points: u32,
    pub rarity: Rarity,
    pub location: GeoPoint,
    pub found: bool,
}

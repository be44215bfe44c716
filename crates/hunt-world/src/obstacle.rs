//! Obstacle records — barriers the player clears for a flat score bonus.

use hunt_core::{GeoPoint, ObstacleId, SessionRng};

// ── ObstacleKind ──────────────────────────────────────────────────────────────

/// What stands in the player's way.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObstacleKind {
    Barrier,
    Puzzle,
    Guardian,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 3] = [
        ObstacleKind::Barrier,
        ObstacleKind::Puzzle,
        ObstacleKind::Guardian,
    ];

    /// Uniform choice over all kinds.
    pub fn roll(rng: &mut SessionRng) -> ObstacleKind {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ObstacleKind::Barrier  => "barrier",
            ObstacleKind::Puzzle   => "puzzle",
            ObstacleKind::Guardian => "guardian",
        }
    }
}

impl std::fmt::Display for ObstacleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Difficulty ────────────────────────────────────────────────────────────────

/// How hard an obstacle is to clear.  Ordered: `Easy < Medium < Hard`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Uniform choice over all difficulties.
    pub fn roll(rng: &mut SessionRng) -> Difficulty {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy   => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard   => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Obstacle ──────────────────────────────────────────────────────────────────

/// A blocker placed in the world.  Same lifecycle shape as a treasure:
/// static position, `completed` flips `false → true` once.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    pub id: ObstacleId,
    pub kind: ObstacleKind,
    pub difficulty: Difficulty,
    pub location: GeoPoint,
    pub completed: bool,
}

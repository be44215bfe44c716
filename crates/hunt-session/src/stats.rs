//! Session score counters.

/// Flat score award for clearing any obstacle, regardless of difficulty.
pub const OBSTACLE_CLEAR_POINTS: u32 = 10;

/// Aggregate play-session counters.
///
/// All three values are monotonically non-decreasing between resets; the
/// only mutation paths are the crate-private `record_*` methods called by
/// accepted interactions, and [`reset`][GameStats::reset].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameStats {
    pub treasures_found: u32,
    pub obstacles_cleared: u32,
    pub score: u32,
}

impl GameStats {
    pub(crate) fn record_treasure(&mut self, points: u32) {
        self.treasures_found += 1;
        self.score += points;
    }

    pub(crate) fn record_obstacle(&mut self) {
        self.obstacles_cleared += 1;
        self.score += OBSTACLE_CLEAR_POINTS;
    }

    pub(crate) fn reset(&mut self) {
        *self = GameStats::default();
    }
}

impl std::fmt::Display for GameStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} treasures, {} obstacles, {} points",
            self.treasures_found, self.obstacles_cleared, self.score
        )
    }
}

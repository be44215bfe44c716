//! Session configuration.

/// Treasures spawned per world generation.
pub const DEFAULT_TREASURE_COUNT: usize = 5;
/// Obstacles spawned per world generation.
pub const DEFAULT_OBSTACLE_COUNT: usize = 3;
/// Maximum distance (metres) at which collect/clear actions are accepted.
pub const DEFAULT_INTERACTION_RADIUS_M: f64 = 30.0;

/// Top-level session configuration.
///
/// Plain data; validated once by
/// [`GameSession::new`][crate::GameSession::new].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionConfig {
    /// Master RNG seed.  The same seed always produces the same world.
    pub seed: u64,

    /// Treasures generated on the first fix and on every reset.
    pub treasure_count: usize,

    /// Obstacles generated on the first fix and on every reset.
    pub obstacle_count: usize,

    /// Inclusive proximity threshold for interactions, metres.
    /// Must be positive and finite.
    pub interaction_radius_m: f64,
}

impl SessionConfig {
    /// Config with the standard gameplay values and the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            treasure_count: DEFAULT_TREASURE_COUNT,
            obstacle_count: DEFAULT_OBSTACLE_COUNT,
            interaction_radius_m: DEFAULT_INTERACTION_RADIUS_M,
        }
    }
}

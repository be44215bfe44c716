//! The `GameSession` state container and its mutation entry points.

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use hunt_core::{GeoPoint, HuntError, HuntResult, ObstacleId, SessionRng, TreasureId, UserLocation};
use hunt_world::{Catalog, Difficulty, Obstacle, ObstacleKind, Treasure, spawn_obstacles, spawn_treasures};

use crate::{GameStats, SessionConfig};

// ── Entry-point outcomes ──────────────────────────────────────────────────────

/// What a position fix did to the session.
#[derive(Clone, Debug, PartialEq)]
pub enum LocationUpdate {
    /// First fix of the session: the world was spawned around it.
    FirstFix { treasures: usize, obstacles: usize },
    /// A later fix.  Objects stay where they are; only distances change.
    Moved { displacement_m: f64 },
}

/// Result of a collect attempt on an existing treasure.
///
/// Only [`Collected`][CollectOutcome::Collected] mutates the session.
/// The other variants are observations, not errors — the treasure exists,
/// the game state is simply not one in which it can be taken.
#[derive(Clone, Debug, PartialEq)]
pub enum CollectOutcome {
    Collected { name: String, points: u32 },
    AlreadyFound,
    OutOfRange { distance_m: f64 },
}

/// Result of a clear attempt on an existing obstacle.
#[derive(Clone, Debug, PartialEq)]
pub enum ClearOutcome {
    Cleared { kind: ObstacleKind, difficulty: Difficulty },
    AlreadyCleared,
    OutOfRange { distance_m: f64 },
}

// ── GameSession ───────────────────────────────────────────────────────────────

/// All mutable state of one play session.
///
/// Treasures, obstacles, score, selection, and the player's last fix live
/// here and nowhere else; every mutation goes through a named entry point
/// (`update_location`, `collect_treasure`, `clear_obstacle`, `select_*`,
/// `reset`).  The RNG is owned too, so a session is fully deterministic
/// from `SessionConfig::seed` and the sequence of calls made against it.
///
/// The session performs no I/O and never blocks; position fixes are pushed
/// in by whatever positioning layer the embedding application has.
pub struct GameSession {
    config: SessionConfig,
    rng: SessionRng,
    catalog: Catalog,

    location: Option<UserLocation>,
    treasures: Vec<Treasure>,
    obstacles: Vec<Obstacle>,

    // Id → index into the vectors above.  Rebuilt on every spawn.
    treasure_index: FxHashMap<TreasureId, usize>,
    obstacle_index: FxHashMap<ObstacleId, usize>,

    selected_treasure: Option<TreasureId>,
    selected_obstacle: Option<ObstacleId>,

    stats: GameStats,
}

impl GameSession {
    /// Create a session with the built-in flavour catalog.
    pub fn new(config: SessionConfig) -> HuntResult<Self> {
        Self::with_catalog(config, Catalog::default())
    }

    /// Create a session with a custom flavour catalog.
    ///
    /// # Errors
    ///
    /// `HuntError::Config` if the interaction radius is not positive and
    /// finite.
    pub fn with_catalog(config: SessionConfig, catalog: Catalog) -> HuntResult<Self> {
        if !config.interaction_radius_m.is_finite() || config.interaction_radius_m <= 0.0 {
            return Err(HuntError::Config(format!(
                "interaction radius must be positive and finite, got {}",
                config.interaction_radius_m
            )));
        }

        let rng = SessionRng::new(config.seed);
        Ok(Self {
            config,
            rng,
            catalog,
            location: None,
            treasures: Vec::new(),
            obstacles: Vec::new(),
            treasure_index: FxHashMap::default(),
            obstacle_index: FxHashMap::default(),
            selected_treasure: None,
            selected_obstacle: None,
            stats: GameStats::default(),
        })
    }

    // ── Mutation entry points ─────────────────────────────────────────────

    /// Record a position fix.
    ///
    /// The first fix spawns the world around the player.  Later fixes only
    /// move the player: objects are static points in space, so their
    /// distances change but their positions never do.
    pub fn update_location(&mut self, fix: UserLocation) -> LocationUpdate {
        match self.location.replace(fix) {
            None => {
                self.respawn();
                LocationUpdate::FirstFix {
                    treasures: self.treasures.len(),
                    obstacles: self.obstacles.len(),
                }
            }
            Some(prev) => LocationUpdate::Moved {
                displacement_m: prev.point.distance_m(fix.point),
            },
        }
    }

    /// Attempt to collect a treasure.
    ///
    /// Accepted iff the player has a fix, the treasure is unfound, and it
    /// lies within the interaction radius (inclusive).  On success the
    /// treasure is marked found — irreversibly — and the score grows by
    /// its point value.
    ///
    /// # Errors
    ///
    /// `HuntError::NoLocation` before the first fix;
    /// `HuntError::TreasureNotFound` for an id the session doesn't know.
    pub fn collect_treasure(&mut self, id: TreasureId) -> HuntResult<CollectOutcome> {
        let fix = self.location.ok_or(HuntError::NoLocation)?;
        let idx = *self
            .treasure_index
            .get(&id)
            .ok_or(HuntError::TreasureNotFound(id))?;

        let treasure = &mut self.treasures[idx];
        if treasure.found {
            return Ok(CollectOutcome::AlreadyFound);
        }

        let distance_m = fix.point.distance_m(treasure.location);
        if distance_m > self.config.interaction_radius_m {
            debug!(%id, distance_m, "collect rejected: out of range");
            return Ok(CollectOutcome::OutOfRange { distance_m });
        }

        treasure.found = true;
        let name = treasure.name.clone();
        let points = treasure.points;

        self.stats.record_treasure(points);
        if self.selected_treasure == Some(id) {
            self.selected_treasure = None;
        }
        info!(%id, %name, points, score = self.stats.score, "treasure collected");

        Ok(CollectOutcome::Collected { name, points })
    }

    /// Attempt to clear an obstacle.  Same gating as
    /// [`collect_treasure`][Self::collect_treasure]; success awards the
    /// flat [`OBSTACLE_CLEAR_POINTS`][crate::OBSTACLE_CLEAR_POINTS].
    ///
    /// # Errors
    ///
    /// `HuntError::NoLocation` before the first fix;
    /// `HuntError::ObstacleNotFound` for an unknown id.
    pub fn clear_obstacle(&mut self, id: ObstacleId) -> HuntResult<ClearOutcome> {
        let fix = self.location.ok_or(HuntError::NoLocation)?;
        let idx = *self
            .obstacle_index
            .get(&id)
            .ok_or(HuntError::ObstacleNotFound(id))?;

        let obstacle = &mut self.obstacles[idx];
        if obstacle.completed {
            return Ok(ClearOutcome::AlreadyCleared);
        }

        let distance_m = fix.point.distance_m(obstacle.location);
        if distance_m > self.config.interaction_radius_m {
            debug!(%id, distance_m, "clear rejected: out of range");
            return Ok(ClearOutcome::OutOfRange { distance_m });
        }

        obstacle.completed = true;
        let kind = obstacle.kind;
        let difficulty = obstacle.difficulty;

        self.stats.record_obstacle();
        if self.selected_obstacle == Some(id) {
            self.selected_obstacle = None;
        }
        info!(%id, %kind, %difficulty, score = self.stats.score, "obstacle cleared");

        Ok(ClearOutcome::Cleared { kind, difficulty })
    }

    /// Select a treasure for the detail surface, or pass `None` to clear
    /// the selection.  Unknown ids clear it too.
    pub fn select_treasure(&mut self, id: Option<TreasureId>) {
        self.selected_treasure = id.filter(|id| self.treasure_index.contains_key(id));
    }

    /// Select an obstacle for the detail surface, or pass `None` to clear
    /// the selection.  Unknown ids clear it too.
    pub fn select_obstacle(&mut self, id: Option<ObstacleId>) {
        self.selected_obstacle = id.filter(|id| self.obstacle_index.contains_key(id));
    }

    /// Start the game over: zero the counters, drop the selection, and
    /// regenerate the world at the current fix (if there is one — before
    /// the first fix this only clears the counters, and the first fix will
    /// spawn as usual).
    pub fn reset(&mut self) {
        self.stats.reset();
        self.selected_treasure = None;
        self.selected_obstacle = None;
        if self.location.is_some() {
            self.respawn();
        }
        info!("game reset");
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Unfound treasures within the interaction radius of the current fix.
    pub fn nearby_treasures(&self) -> Vec<&Treasure> {
        let Some(fix) = self.location else {
            return Vec::new();
        };
        self.treasures
            .iter()
            .filter(|t| !t.found)
            .filter(|t| fix.point.is_within(t.location, self.config.interaction_radius_m))
            .collect()
    }

    /// Uncleared obstacles within the interaction radius of the current fix.
    pub fn nearby_obstacles(&self) -> Vec<&Obstacle> {
        let Some(fix) = self.location else {
            return Vec::new();
        };
        self.obstacles
            .iter()
            .filter(|o| !o.completed)
            .filter(|o| fix.point.is_within(o.location, self.config.interaction_radius_m))
            .collect()
    }

    /// Distance from the current fix to `point`, if there is a fix yet.
    pub fn distance_to(&self, point: GeoPoint) -> Option<f64> {
        self.location.map(|fix| fix.point.distance_m(point))
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn location(&self) -> Option<UserLocation> {
        self.location
    }

    pub fn treasures(&self) -> &[Treasure] {
        &self.treasures
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn treasure(&self, id: TreasureId) -> Option<&Treasure> {
        self.treasure_index.get(&id).map(|&i| &self.treasures[i])
    }

    pub fn obstacle(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.obstacle_index.get(&id).map(|&i| &self.obstacles[i])
    }

    pub fn selected_treasure(&self) -> Option<&Treasure> {
        self.selected_treasure.and_then(|id| self.treasure(id))
    }

    pub fn selected_obstacle(&self) -> Option<&Obstacle> {
        self.selected_obstacle.and_then(|id| self.obstacle(id))
    }

    pub fn stats(&self) -> GameStats {
        self.stats
    }

    // ── World generation ──────────────────────────────────────────────────

    /// Replace both object sets with fresh batches around the current fix.
    ///
    /// Precondition: `self.location` is set.
    fn respawn(&mut self) {
        let Some(fix) = self.location else { return };

        self.treasures = spawn_treasures(
            fix.point,
            self.config.treasure_count,
            &self.catalog,
            &mut self.rng,
        );
        self.obstacles = spawn_obstacles(fix.point, self.config.obstacle_count, &mut self.rng);

        self.treasure_index = self
            .treasures
            .iter()
            .enumerate()
            .map(|(i, t)| (t.id, i))
            .collect();
        self.obstacle_index = self
            .obstacles
            .iter()
            .enumerate()
            .map(|(i, o)| (o.id, i))
            .collect();

        info!(
            treasures = self.treasures.len(),
            obstacles = self.obstacles.len(),
            at = %fix.point,
            "world spawned"
        );
    }
}

//! `hunt-session` — the play-session state container for the `hunt`
//! treasure-hunt engine.
//!
//! A [`GameSession`] owns everything one play session mutates: the
//! player's last position fix, the spawned treasures and obstacles, the
//! selection, and the score counters.  All mutation flows through named
//! entry points that gate on proximity, so presentation layers can stay
//! dumb: render state, forward taps, nothing else.
//!
//! # Crate layout
//!
//! | Module      | Contents                                               |
//! |-------------|--------------------------------------------------------|
//! | [`config`]  | `SessionConfig` + gameplay defaults                    |
//! | [`session`] | `GameSession`, entry-point outcome enums               |
//! | [`stats`]   | `GameStats` monotone counters                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` through the whole stack.    |

pub mod config;
pub mod session;
pub mod stats;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{
    DEFAULT_INTERACTION_RADIUS_M, DEFAULT_OBSTACLE_COUNT, DEFAULT_TREASURE_COUNT, SessionConfig,
};
pub use session::{ClearOutcome, CollectOutcome, GameSession, LocationUpdate};
pub use stats::{GameStats, OBSTACLE_CLEAR_POINTS};

//! `hunt-core` — foundational types for the `hunt` treasure-hunt engine.
//!
//! This crate is a dependency of every other `hunt-*` crate.  It has no
//! `hunt-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`geo`]     | `GeoPoint`, `UserLocation`, haversine + placement math  |
//! | [`ids`]     | `TreasureId`, `ObstacleId`                              |
//! | [`rng`]     | `SessionRng` (the injected randomness capability)       |
//! | [`error`]   | `HuntError`, `HuntResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{HuntError, HuntResult};
pub use geo::{EARTH_RADIUS_M, GeoPoint, UserLocation};
pub use ids::{ObstacleId, TreasureId};
pub use rng::SessionRng;

//! `hunt-world` — world objects and their generation for the `hunt`
//! treasure-hunt engine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`treasure`] | `Treasure`, `Rarity` (rolls + point bands)            |
//! | [`obstacle`] | `Obstacle`, `ObstacleKind`, `Difficulty`              |
//! | [`catalog`]  | `Catalog` flavour text + CSV loader                   |
//! | [`spawn`]    | `spawn_treasures`, `spawn_obstacles`                  |
//! | [`error`]    | `CatalogError`, `CatalogResult`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.      |

pub mod catalog;
pub mod error;
pub mod obstacle;
pub mod spawn;
pub mod treasure;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use catalog::{Catalog, load_catalog_csv, load_catalog_reader};
pub use error::{CatalogError, CatalogResult};
pub use obstacle::{Difficulty, Obstacle, ObstacleKind};
pub use spawn::{spawn_obstacles, spawn_treasures};
pub use treasure::{Rarity, Treasure};

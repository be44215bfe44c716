//! Engine error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `HuntError` via `From` impls, or keep them separate.  Non-fatal game
//! conditions (already collected, out of range) are NOT errors — they are
//! outcome values returned by the session's entry points.

use thiserror::Error;

use crate::{ObstacleId, TreasureId};

/// The top-level error type for the `hunt-*` crates.
#[derive(Debug, Error)]
pub enum HuntError {
    #[error("treasure {0} not found")]
    TreasureNotFound(TreasureId),

    #[error("obstacle {0} not found")]
    ObstacleNotFound(ObstacleId),

    #[error("no position fix yet")]
    NoLocation,

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `hunt-*` crates.
pub type HuntResult<T> = Result<T, HuntError>;

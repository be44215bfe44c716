//! Strongly typed identifier wrappers for world objects.
//!
//! Ids are opaque random 64-bit keys minted from the session RNG, not
//! array indices: two batches generated back to back must not collide,
//! and a collected treasure keeps its id for the life of the session.
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys
//! without ceremony.

use std::fmt;

use crate::SessionRng;

/// Generate a typed ID wrapper around a random `u64` key.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u64);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to `u64::MAX`.
            pub const INVALID: $name = $name(u64::MAX);

            /// Mint a fresh random id from the session RNG.
            ///
            /// Re-rolls the one-in-2⁶⁴ draw that would collide with the
            /// `INVALID` sentinel, so minted ids are always valid.
            pub fn mint(rng: &mut SessionRng) -> $name {
                loop {
                    let raw: u64 = rng.random();
                    if raw != u64::MAX {
                        return $name(raw);
                    }
                }
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({:016x})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Identifier of one treasure within a session.
    pub struct TreasureId;
}

typed_id! {
    /// Identifier of one obstacle within a session.
    pub struct ObstacleId;
}

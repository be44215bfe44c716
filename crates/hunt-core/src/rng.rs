//! Seedable session RNG — randomness as an injected capability.
//!
//! Every generating function in the workspace takes `&mut SessionRng`
//! rather than reaching for a thread-local or OS source.  The same seed
//! therefore always reproduces the same world: treasure placement, rarity
//! rolls, and minted ids all derive from this one stream, which is what
//! lets the statistical tests pin their inputs.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A seedable RNG owned by one play session.
///
/// Wraps `SmallRng`: not cryptographic, cheap to step, and entirely
/// deterministic from the seed.  The type is deliberately `!Sync` — a
/// session's random stream must never be shared between threads.
pub struct SessionRng(SmallRng);

impl SessionRng {
    /// Seed deterministically.  The same seed yields the same stream.
    pub fn new(seed: u64) -> Self {
        SessionRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed
    /// type (floats land in `[0, 1)`).
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}

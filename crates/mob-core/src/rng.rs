//! Deterministic per-mob RNG wrapper.
//!
//! # Determinism strategy
//!
//! Each mob gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (mob_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive mob IDs uniformly across the seed space.
//! This means:
//!
//! - Mobs never share RNG state, so one mob's random decisions cannot
//!   perturb another's regardless of tick ordering.
//! - Adding or removing mobs at the end of the list does not disturb the
//!   seeds of existing mobs — runs are reproducible even as populations grow.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::MobId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-mob deterministic RNG.
///
/// Create one per mob at setup; goals reach it through their context so that
/// random triggers (stroll chances, gaze durations) are reproducible.
pub struct MobRng(SmallRng);

impl MobRng {
    /// Seed deterministically from the run's global seed and a mob ID.
    pub fn new(global_seed: u64, mob: MobId) -> Self {
        let seed = global_seed ^ (mob.0 as u64).wrapping_mul(MIXING_CONSTANT);
        MobRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
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

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}

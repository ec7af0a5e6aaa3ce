//! Deterministic per-actor RNG, seeded from a global run seed.
//!
//! # Determinism strategy
//!
//! Each actor (Location or Vehicle) gets its own independent `SmallRng`
//! seeded by:
//!
//!   seed = global_seed XOR (actor_index * MIXING_CONSTANT)
//!
//! carried verbatim from `dt-core/src/rng.rs`'s `AgentRng`. The mixing
//! constant is the 64-bit fractional part of the golden ratio, which spreads
//! consecutive indices uniformly across the seed space. Actors never share
//! RNG state, so there is no contention and no cross-actor ordering
//! dependency on the random stream.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-actor deterministic RNG.
///
/// Create one per Location or Vehicle at spawn time from the run's global
/// seed and the actor's numeric index.
pub struct ActorRng(SmallRng);

impl ActorRng {
    /// Seed deterministically from the run's global seed and an actor index.
    pub fn new(global_seed: u64, actor_index: u64) -> Self {
        let seed = global_seed ^ actor_index.wrapping_mul(MIXING_CONSTANT);
        ActorRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
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

    /// `true` with probability `p` (clamped to `[0, 1]`) — used for the
    /// per-hour failure Bernoulli trial and the task-generation trial.
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a non-empty slice — uniform track/platform
    /// selection at a parallel bundle or a multi-platform station.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}

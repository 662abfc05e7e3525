//! The single shared simulation RNG.
//!
//! # Determinism strategy
//!
//! One `SimRng` is created from the configured seed at simulation start and
//! passed `&mut` into every component that draws from it.  The draw order
//! across a step is part of the reproducibility contract:
//!
//! 1. base-pain sampling, one draw per patient in id order (construction only)
//! 2. one shuffle of the activation order at the top of each step
//! 3. one pain-noise draw per patient, in activation order, as each patient's
//!    turn executes
//!
//! Any change to this order changes simulation outcomes, so components never
//! hold private generators and never reseed mid-run.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG shared by every drawing component.
///
/// Used only in the single-threaded step loop; the type is deliberately not
/// cloneable so there is exactly one stream per run.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
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

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}

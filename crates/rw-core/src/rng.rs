//! Deterministic per-model RNG wrapper.
//!
//! # Determinism strategy
//!
//! Each model gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (model_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive model IDs uniformly across the seed space.
//! This means:
//!
//! - Models never share RNG state, so the velocity sequence one model draws
//!   is independent of how many other models exist or when they resample.
//! - Adding models does not disturb the seeds of existing ones — runs are
//!   reproducible as populations grow.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::ModelId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-model deterministic RNG.
///
/// Create one per model at registration; store in a parallel `Vec<ModelRng>`
/// alongside the model slots.
pub struct ModelRng(SmallRng);

impl ModelRng {
    /// Seed deterministically from the run's global seed and a model ID.
    pub fn new(global_seed: u64, model: ModelId) -> Self {
        let seed = global_seed ^ (model.0 as u64).wrapping_mul(MIXING_CONSTANT);
        ModelRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Draw uniformly from the closed interval `[min, max]`.
    ///
    /// # Panics
    /// Panics if `min > max` or either bound is non-finite — bounds must be
    /// validated before they reach the draw site.
    #[inline]
    pub fn uniform(&mut self, min: f64, max: f64) -> f64 {
        self.0.gen_range(min..=max)
    }

    /// Draw a direction uniformly from `[0, 2π)` radians.
    #[inline]
    pub fn direction(&mut self) -> f64 {
        self.0.gen_range(0.0..std::f64::consts::TAU)
    }
}

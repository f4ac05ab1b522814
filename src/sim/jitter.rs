//! Injectable source of bounce jitter
//!
//! Play feel comes from small random velocity perturbations after bounces.
//! The simulation only sees this trait, so tests can swap in `NoJitter` and
//! assert exact trajectories.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of the velocity perturbation applied after bounces.
pub trait JitterSource {
    /// A sample in `[-amplitude, +amplitude]`.
    fn sample(&mut self, amplitude: f32) -> f32;
}

/// Seeded PCG-backed jitter used by the real game.
#[derive(Debug, Clone)]
pub struct PcgJitter {
    rng: Pcg32,
}

impl PcgJitter {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl JitterSource for PcgJitter {
    fn sample(&mut self, amplitude: f32) -> f32 {
        self.rng.random_range(-amplitude..=amplitude)
    }
}

/// Zero-valued source; keeps trajectories exact.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn sample(&mut self, _amplitude: f32) -> f32 {
        0.0
    }
}

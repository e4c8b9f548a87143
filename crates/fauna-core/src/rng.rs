//! Injectable random sources.
//!
//! Every stochastic behavior operation takes `&mut impl RandomSource` rather
//! than reaching for a process-wide generator.  Drivers pass a [`SimRng`]
//! (one stream for the whole run) or an [`AgentRng`] (one stream per agent);
//! tests may pass a scripted source to pin individual draws.
//!
//! # Determinism strategy
//!
//! Per-agent streams are seeded by:
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space, so
//! adding agents never disturbs the streams of existing ones.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── RandomSource ──────────────────────────────────────────────────────────────

/// The capability every stochastic operation draws from.
///
/// Only [`unit`](Self::unit) is required.  `uniform` and `normal` are derived
/// from it, and scripted test sources may override them to return fixed
/// values.
pub trait RandomSource {
    /// A uniform draw in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// A uniform draw in `[low, high)`.
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.unit()
    }

    /// A normal draw with the given mean and standard deviation.
    ///
    /// Box-Muller transform; one pair of unit draws per sample.
    fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.unit().max(f64::MIN_POSITIVE);
        let u2 = self.unit();
        let z = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
        mean + std_dev * z
    }
}

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and an agent ID.
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }
}

impl RandomSource for AgentRng {
    #[inline]
    fn unit(&mut self) -> f64 {
        self.0.r#gen()
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Driver-level RNG shared by every operation in a single-threaded tick.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn unit(&mut self) -> f64 {
        self.0.r#gen()
    }
}

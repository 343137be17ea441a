//! Random perturbation sources for midpoint displacement.
//!
//! The engine never constructs its own randomness: callers build a source
//! once and pass it into every subdivision call, so tests can substitute
//! constant or scripted sequences and runs are repeatable from a seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Capability producing one random scalar per call.
pub trait OffsetSource {
    fn next_offset(&mut self) -> f32;
}

/// Any `FnMut() -> f32` closure is a valid source.
impl<F: FnMut() -> f32> OffsetSource for F {
    fn next_offset(&mut self) -> f32 {
        self()
    }
}

/// The two standard perturbation distributions.
///
/// `Uniform01` pushes everything up, leaving low top and left edges;
/// `Centered` gives the IMSMap-style cloud noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OffsetDistribution {
    /// Each draw in [0, 1).
    Uniform01,
    /// Each draw in [-0.5, 0.5).
    Centered,
}

/// Seeded production source: a `StdRng` shaped by an [`OffsetDistribution`].
#[derive(Debug, Clone)]
pub struct RandomOffsets {
    rng: StdRng,
    distribution: OffsetDistribution,
}

impl RandomOffsets {
    pub fn new(seed: u64, distribution: OffsetDistribution) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            distribution,
        }
    }
}

impl OffsetSource for RandomOffsets {
    fn next_offset(&mut self) -> f32 {
        let v: f32 = self.rng.gen(); // [0, 1)
        match self.distribution {
            OffsetDistribution::Uniform01 => v,
            OffsetDistribution::Centered => v - 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform01_draws_stay_in_range() {
        let mut src = RandomOffsets::new(42, OffsetDistribution::Uniform01);
        for _ in 0..1000 {
            let v = src.next_offset();
            assert!((0.0..1.0).contains(&v), "draw {v} outside [0, 1)");
        }
    }

    #[test]
    fn centered_draws_stay_in_range() {
        let mut src = RandomOffsets::new(42, OffsetDistribution::Centered);
        for _ in 0..1000 {
            let v = src.next_offset();
            assert!((-0.5..0.5).contains(&v), "draw {v} outside [-0.5, 0.5)");
        }
    }

    #[test]
    fn distribution_means_are_where_they_should_be() {
        use approx::assert_abs_diff_eq;
        let mean = |dist: OffsetDistribution| {
            let mut src = RandomOffsets::new(3, dist);
            (0..10_000).map(|_| src.next_offset() as f64).sum::<f64>() / 10_000.0
        };
        assert_abs_diff_eq!(mean(OffsetDistribution::Uniform01), 0.5, epsilon = 0.02);
        assert_abs_diff_eq!(mean(OffsetDistribution::Centered), 0.0, epsilon = 0.02);
    }

    #[test]
    fn same_seed_yields_same_sequence() {
        let mut a = RandomOffsets::new(7, OffsetDistribution::Centered);
        let mut b = RandomOffsets::new(7, OffsetDistribution::Centered);
        for _ in 0..100 {
            assert_eq!(a.next_offset().to_bits(), b.next_offset().to_bits());
        }
    }

    #[test]
    fn closures_are_sources() {
        let mut constant = || 0.25f32;
        assert_eq!(constant.next_offset(), 0.25);

        let mut n = 0.0f32;
        let mut counting = move || {
            n += 1.0;
            n
        };
        assert_eq!(counting.next_offset(), 1.0);
        assert_eq!(counting.next_offset(), 2.0);
    }
}

//! Seeded Bernoulli sampling over a lattice
//!
//! Wraps `ChaCha8Rng` for cross-platform deterministic randomness. Nothing in
//! the crate draws from a thread-local or global generator, so two fields
//! built from the same seed and fed the same sequence of calls produce
//! identical samples.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core_types::{BoolField, Probability};
use crate::error::Result;

/// Deterministic source of per-cell Bernoulli trials
#[derive(Debug, Clone)]
pub struct RandomField {
    rng: ChaCha8Rng,
}

impl RandomField {
    /// Create a field seeded from the given `u64` value
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Wrap an existing generator, e.g. one restored from a snapshot
    #[must_use]
    pub fn from_rng(rng: ChaCha8Rng) -> Self {
        Self { rng }
    }

    /// Sample a boolean field where each cell is `true` with probability `p`
    ///
    /// # Errors
    ///
    /// Returns [`crate::ForestError::InvalidProbability`] if `p` is outside
    /// `[0, 1]`. No random state is consumed in that case.
    pub fn sample(&mut self, p: f64, shape: (usize, usize)) -> Result<BoolField> {
        let p = Probability::new(p)?;
        Ok(self.sample_with(p, shape))
    }

    /// Sample with an already validated probability
    ///
    /// Draws exactly one uniform `[0, 1)` value per cell in row-major order,
    /// regardless of `p`, so the stream position depends only on the number
    /// of cells sampled so far.
    pub fn sample_with(&mut self, p: Probability, shape: (usize, usize)) -> BoolField {
        let threshold = p.value();
        let (size_x, size_y) = shape;
        BoolField::from_fn(size_x, size_y, |_, _| self.rng.random::<f64>() < threshold)
    }
}

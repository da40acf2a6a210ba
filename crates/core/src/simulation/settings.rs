//! Simulation configuration
//!
//! `ForestConfig` is plain data: it can be built in code, deserialized from
//! any serde format, and validated before a simulation is constructed.

use serde::{Deserialize, Serialize};

use crate::core_types::Probability;
use crate::error::{ForestError, Result};
use crate::spread::FireSpreadPolicy;

/// Default seed used when no explicit seed is provided.
pub const DEFAULT_SEED: u64 = 42;

/// Default number of rows and columns
pub const DEFAULT_SIZE: usize = 100;

/// Default daily sapling probability
pub const DEFAULT_P_SAPLING: f64 = 0.02;

/// Default daily lightning probability
pub const DEFAULT_P_LIGHTNING: f64 = 0.01;

/// Everything needed to build a [`super::ForestSimulation`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForestConfig {
    /// Grid rows
    pub size_x: usize,
    /// Grid columns
    pub size_y: usize,
    /// Daily probability that a cell sprouts a tree
    pub p_sapling: f64,
    /// Daily probability that a tree is struck by lightning
    pub p_lightning: f64,
    /// Fire spread policy
    pub policy: FireSpreadPolicy,
    /// Random seed
    pub seed: u64,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            size_x: DEFAULT_SIZE,
            size_y: DEFAULT_SIZE,
            p_sapling: DEFAULT_P_SAPLING,
            p_lightning: DEFAULT_P_LIGHTNING,
            policy: FireSpreadPolicy::NeighborSpread,
            seed: DEFAULT_SEED,
        }
    }
}

impl ForestConfig {
    /// Set grid dimensions
    pub fn with_size(mut self, size_x: usize, size_y: usize) -> Self {
        self.size_x = size_x;
        self.size_y = size_y;
        self
    }

    /// Set growth and lightning probabilities
    pub fn with_probabilities(mut self, p_sapling: f64, p_lightning: f64) -> Self {
        self.p_sapling = p_sapling;
        self.p_lightning = p_lightning;
        self
    }

    /// Set the fire spread policy
    pub fn with_policy(mut self, policy: FireSpreadPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check dimensions and probabilities
    ///
    /// # Errors
    ///
    /// Returns [`ForestError::InvalidDimensions`] for a zero dimension and
    /// [`ForestError::InvalidProbability`] for a probability outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        self.probabilities()?;
        if self.size_x == 0 || self.size_y == 0 {
            return Err(ForestError::InvalidDimensions {
                size_x: self.size_x,
                size_y: self.size_y,
            });
        }
        Ok(())
    }

    pub(crate) fn probabilities(&self) -> Result<(Probability, Probability)> {
        Ok((
            Probability::named("p_sapling", self.p_sapling)?,
            Probability::named("p_lightning", self.p_lightning)?,
        ))
    }
}

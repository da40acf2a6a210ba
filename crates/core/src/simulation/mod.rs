//! Day-step orchestration
//!
//! `ForestSimulation` owns the grid, the random field and the active spread
//! policy. One call to [`ForestSimulation::advance`] is one simulated day:
//!
//! 1. growth ([`GrowthRule`])
//! 2. lightning ([`IgnitionRule`])
//! 3. spread ([`FireSpreadPolicy`]), fed with this day's strikes
//!
//! Ignition runs before spread so that `InstantBurn` can act on the same
//! day's strikes. Parameters may change between days but never during one.

mod report;
mod settings;

pub use report::{DayStats, SimulationStats};
pub use settings::{
    ForestConfig, DEFAULT_P_LIGHTNING, DEFAULT_P_SAPLING, DEFAULT_SEED, DEFAULT_SIZE,
};

use tracing::{debug, info};

use crate::core_types::{BoolField, Probability};
use crate::error::Result;
use crate::grid::{CellState, Grid};
use crate::rules::{GrowthRule, IgnitionRule, RandomField};
use crate::spread::FireSpreadPolicy;

/// Forest fire cellular automaton
#[derive(Debug, Clone)]
pub struct ForestSimulation {
    grid: Grid,
    policy: FireSpreadPolicy,
    p_sapling: Probability,
    p_lightning: Probability,
    field: RandomField,
    seed: u64,
    stats: SimulationStats,
}

impl ForestSimulation {
    /// Create a simulation on an empty `size_x × size_y` grid
    ///
    /// # Errors
    ///
    /// Returns [`crate::ForestError::InvalidDimensions`] if a dimension is zero
    /// and [`crate::ForestError::InvalidProbability`] if a probability is
    /// outside `[0, 1]`.
    pub fn new(
        size_x: usize,
        size_y: usize,
        p_sapling: f64,
        p_lightning: f64,
        policy: FireSpreadPolicy,
        seed: u64,
    ) -> Result<Self> {
        Self::from_config(&ForestConfig {
            size_x,
            size_y,
            p_sapling,
            p_lightning,
            policy,
            seed,
        })
    }

    /// Create a simulation from a configuration
    ///
    /// # Errors
    ///
    /// Same conditions as [`ForestConfig::validate`].
    pub fn from_config(config: &ForestConfig) -> Result<Self> {
        let (p_sapling, p_lightning) = config.probabilities()?;
        let grid = Grid::new(config.size_x, config.size_y)?;

        info!(
            "Forest simulation initialized: {}x{} grid, policy={}, p_sapling={}, p_lightning={}, seed={}",
            config.size_x, config.size_y, config.policy, p_sapling, p_lightning, config.seed
        );

        Ok(Self {
            grid,
            policy: config.policy,
            p_sapling,
            p_lightning,
            field: RandomField::from_seed(config.seed),
            seed: config.seed,
            stats: SimulationStats::default(),
        })
    }

    /// Advance the forest by one day
    ///
    /// # Returns
    ///
    /// Counters for the day just simulated
    pub fn advance(&mut self) -> DayStats {
        let grown = GrowthRule::apply(&mut self.grid, self.p_sapling, &mut self.field);
        let struck = IgnitionRule::apply(&self.grid, self.p_lightning, &mut self.field);
        let outcome = self.policy.apply(&mut self.grid, &struck);

        debug_assert!(
            self.grid.check_exclusion(),
            "tree and fire overlap after day step"
        );

        let day = DayStats {
            day: self.stats.days + 1,
            grown,
            struck: struck.count_true(),
            burned: outcome.burned,
            trees: self.grid.tree_count(),
            burning: outcome.burning,
        };
        self.stats.record(day);

        debug!(
            "Day {}: +{} trees, {} strikes, {} burned, {} trees, {} burning",
            day.day, day.grown, day.struck, day.burned, day.trees, day.burning
        );
        day
    }

    /// Advance `days` days, returning the counters of the last one
    pub fn advance_days(&mut self, days: u64) -> Option<DayStats> {
        let mut last = None;
        for _ in 0..days {
            last = Some(self.advance());
        }
        last
    }

    /// Number of completed days
    #[must_use]
    pub fn day(&self) -> u64 {
        self.stats.days
    }

    /// Running totals and the most recent day's counters
    #[must_use]
    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    /// Lattice state
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable lattice access for seeding scenarios between days
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Living trees
    #[must_use]
    pub fn trees(&self) -> &BoolField {
        self.grid.trees()
    }

    /// Active fire
    #[must_use]
    pub fn fire(&self) -> &BoolField {
        self.grid.fire()
    }

    /// Composite per-cell view in row-major order
    #[must_use]
    pub fn cell_states(&self) -> Vec<CellState> {
        self.grid.cell_states()
    }

    /// Set a cell on fire by hand, consuming any tree there
    ///
    /// Under [`FireSpreadPolicy::InstantBurn`] the next `advance()` resets
    /// `fire` before burning struck stands, so a hand-lit fire goes out
    /// without spreading.
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    pub fn ignite(&mut self, i: usize, j: usize) {
        info!("Igniting cell ({}, {})", i, j);
        self.grid.set_tree(i, j, false);
        self.grid.set_fire(i, j, true);
    }

    /// Daily sapling probability
    #[must_use]
    pub fn p_sapling(&self) -> Probability {
        self.p_sapling
    }

    /// Daily lightning probability
    #[must_use]
    pub fn p_lightning(&self) -> Probability {
        self.p_lightning
    }

    /// Change the sapling probability from the next day on
    ///
    /// # Errors
    ///
    /// Returns [`crate::ForestError::InvalidProbability`] if `p` is outside
    /// `[0, 1]`; the current value is kept.
    pub fn set_p_sapling(&mut self, p: f64) -> Result<()> {
        self.p_sapling = Probability::named("p_sapling", p)?;
        info!("p_sapling set to {}", self.p_sapling);
        Ok(())
    }

    /// Change the lightning probability from the next day on
    ///
    /// # Errors
    ///
    /// Returns [`crate::ForestError::InvalidProbability`] if `p` is outside
    /// `[0, 1]`; the current value is kept.
    pub fn set_p_lightning(&mut self, p: f64) -> Result<()> {
        self.p_lightning = Probability::named("p_lightning", p)?;
        info!("p_lightning set to {}", self.p_lightning);
        Ok(())
    }

    /// Active spread policy
    #[must_use]
    pub fn policy(&self) -> FireSpreadPolicy {
        self.policy
    }

    /// Switch spread policy from the next day on
    pub fn set_policy(&mut self, policy: FireSpreadPolicy) {
        info!("Spread policy changed: {} -> {}", self.policy, policy);
        self.policy = policy;
    }

    /// Current parameters as a configuration
    ///
    /// The seed is the one the simulation was created with, not the current
    /// generator position.
    #[must_use]
    pub fn config(&self) -> ForestConfig {
        ForestConfig {
            size_x: self.grid.size_x(),
            size_y: self.grid.size_y(),
            p_sapling: self.p_sapling.value(),
            p_lightning: self.p_lightning.value(),
            policy: self.policy,
            seed: self.seed,
        }
    }
}

//! Forest Fire Core Library
//!
//! A discrete-time cellular automaton for wildfire dynamics on a 2-D lattice.
//! Trees sprout stochastically, lightning strikes tree-bearing cells
//! stochastically, and fire either creeps one cell per day through
//! cardinal neighbors or consumes a whole connected stand at once.
//!
//! ## Day step
//!
//! Every call to [`ForestSimulation::advance`] runs, in order:
//! - [`GrowthRule`]: Bernoulli sapling growth over the whole grid
//! - [`IgnitionRule`]: Bernoulli lightning restricted to tree cells
//! - [`FireSpreadPolicy`]: `NeighborSpread` or `InstantBurn`
//!
//! All randomness comes from a seeded [`RandomField`] owned by the
//! simulation, so identical seeds replay identical histories.
//!
//! Rendering, tick scheduling and statistics dashboards are left to the host;
//! see the `forest-fire-headless` demo for a minimal driver.

// Core types and utilities
pub mod core_types;
pub mod error;

// Lattice state
pub mod grid;

// Stochastic day rules and fire spread policies
pub mod rules;
pub mod spread;

// Orchestration
pub mod simulation;

// Re-export core types
pub use core_types::{BoolField, Probability};
pub use error::{ForestError, Result};

pub use grid::{CellState, Grid};
pub use rules::{GrowthRule, IgnitionRule, RandomField};
pub use spread::{ComponentLabeler, FireSpreadPolicy, SpreadOutcome, StandLabels};

pub use simulation::{DayStats, ForestConfig, ForestSimulation, SimulationStats};
pub use simulation::{DEFAULT_P_LIGHTNING, DEFAULT_P_SAPLING, DEFAULT_SEED, DEFAULT_SIZE};

//! Fire spread policies
//!
//! A policy turns this day's lightning strikes plus the previous day's fire
//! into the next `fire` matrix, removing the trees that burn. Two policies
//! exist and the set is closed, so they are modelled as an enum rather than
//! a trait object.
//!
//! - [`FireSpreadPolicy::NeighborSpread`]: fire moves one cell per day into
//!   cardinal tree neighbors and goes out behind itself.
//! - [`FireSpreadPolicy::InstantBurn`]: a strike anywhere in a stand burns the
//!   whole 4-connected stand in the same day.

mod front;
mod labeling;
mod stand;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core_types::BoolField;
use crate::grid::Grid;

pub use labeling::{ComponentLabeler, StandLabels, BACKGROUND};

/// How fire propagates once lightning has struck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FireSpreadPolicy {
    /// One cell per day through north/south/east/west neighbors
    #[default]
    NeighborSpread,
    /// Whole connected stand burns on the day it is struck
    InstantBurn,
}

/// What a spread step did to the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpreadOutcome {
    /// Cells burning once the step completes
    pub burning: usize,
    /// Trees removed by fire during the step
    pub burned: usize,
}

impl FireSpreadPolicy {
    /// Apply this policy to `grid` given this day's struck cells
    ///
    /// # Panics
    ///
    /// Panics if `struck` does not have the grid's shape
    pub fn apply(self, grid: &mut Grid, struck: &BoolField) -> SpreadOutcome {
        grid.fire().assert_same_shape(struck);
        match self {
            Self::NeighborSpread => front::advance_front(grid, struck),
            Self::InstantBurn => stand::burn_struck_stands(grid, struck),
        }
    }

    /// Stable kebab-case identifier
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NeighborSpread => "neighbor-spread",
            Self::InstantBurn => "instant-burn",
        }
    }
}

impl fmt::Display for FireSpreadPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Lightning strikes

use tracing::trace;

use crate::core_types::{BoolField, Probability};
use crate::grid::Grid;
use crate::rules::RandomField;

/// Stochastic lightning: each tree is struck with probability `p_lightning`
pub struct IgnitionRule;

impl IgnitionRule {
    /// Sample lightning over the whole grid and keep strikes that hit a tree
    ///
    /// The grid is not modified; the returned mask is handed to the active
    /// spread policy, which decides what burns.
    ///
    /// # Returns
    ///
    /// Mask of struck tree cells
    pub fn apply(grid: &Grid, p_lightning: Probability, field: &mut RandomField) -> BoolField {
        let mut struck = field.sample_with(p_lightning, grid.shape());
        struck.and_assign(grid.trees());

        trace!("Lightning: {} strikes (p={})", struck.count_true(), p_lightning);
        struck
    }
}

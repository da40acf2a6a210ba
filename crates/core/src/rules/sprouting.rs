//! Sapling growth

use tracing::trace;

use crate::core_types::Probability;
use crate::grid::Grid;
use crate::rules::RandomField;

/// Stochastic tree growth: each cell sprouts a tree with probability `p_sapling`
pub struct GrowthRule;

impl GrowthRule {
    /// Grow saplings across the grid
    ///
    /// Growing on a cell that already has a tree is a no-op. Fire is left
    /// untouched, so a sapling may land on a burning cell; the spread policy
    /// removes it later in the same day.
    ///
    /// # Returns
    ///
    /// Number of cells that gained a tree
    pub fn apply(grid: &mut Grid, p_sapling: Probability, field: &mut RandomField) -> usize {
        let mut sprouts = field.sample_with(p_sapling, grid.shape());
        sprouts.and_not_assign(grid.trees());
        let grown = sprouts.count_true();
        grid.set_trees_where(&sprouts, true);

        trace!("Growth: {} new saplings (p={})", grown, p_sapling);
        grown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_probability_grows_nothing() {
        let mut grid = Grid::new(10, 10).unwrap();
        let mut field = RandomField::from_seed(3);
        assert_eq!(GrowthRule::apply(&mut grid, Probability::ZERO, &mut field), 0);
        assert_eq!(grid.tree_count(), 0);
    }

    #[test]
    fn test_certain_growth_fills_grid() {
        let mut grid = Grid::new(6, 4).unwrap();
        let mut field = RandomField::from_seed(3);
        assert_eq!(GrowthRule::apply(&mut grid, Probability::ONE, &mut field), 24);
        assert_eq!(grid.tree_count(), 24);
    }

    #[test]
    fn test_growth_is_idempotent_and_leaves_fire() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_tree(1, 1, true);
        grid.set_fire(0, 0, true);
        let mut field = RandomField::from_seed(3);

        let grown = GrowthRule::apply(&mut grid, Probability::ONE, &mut field);

        assert_eq!(grown, 8, "existing tree must not be counted again");
        assert_eq!(grid.tree_count(), 9);
        assert_eq!(grid.fire_count(), 1);
        assert!(grid.is_burning(0, 0));
    }
}

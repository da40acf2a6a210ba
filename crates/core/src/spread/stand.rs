//! Whole-stand burning
//!
//! A strike anywhere in a stand burns every tree of that stand on the same
//! day. Fire never carries over: each day starts from a clean `fire` matrix,
//! and the resulting burn mask stays visible only until the next step.

use rustc_hash::FxHashSet;
use tracing::trace;

use super::labeling::{ComponentLabeler, BACKGROUND};
use super::SpreadOutcome;
use crate::core_types::BoolField;
use crate::grid::Grid;

/// Burn every stand containing a struck cell
pub(super) fn burn_struck_stands(grid: &mut Grid, struck: &BoolField) -> SpreadOutcome {
    let stands = ComponentLabeler::label(grid.trees());

    let ignited: FxHashSet<u32> = struck
        .iter_true()
        .map(|(i, j)| stands.label_at(i, j))
        .filter(|&id| id != BACKGROUND)
        .collect();

    let labels = stands.as_slice();
    let (size_x, size_y) = grid.shape();
    let burn = BoolField::from_fn(size_x, size_y, |i, j| {
        let id = labels[i * size_y + j];
        id != BACKGROUND && ignited.contains(&id)
    });

    let burned = burn.count_true();
    grid.set_trees_where(&burn, false);
    grid.replace_fire(burn);

    trace!(
        "Instant burn: {} of {} stands ignited, {} trees burned",
        ignited.len(),
        stands.count(),
        burned
    );
    SpreadOutcome {
        burning: burned,
        burned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_grid() -> Grid {
        // 3x3 stand in the corner of a 5x5 grid, plus an isolated tree
        let mut grid = Grid::new(5, 5).unwrap();
        let block = BoolField::from_fn(5, 5, |i, j| i < 3 && j < 3);
        grid.set_trees_where(&block, true);
        grid.set_tree(4, 4, true);
        grid
    }

    #[test]
    fn test_single_strike_burns_whole_stand() {
        let mut grid = block_grid();
        let struck = BoolField::from_cells(5, 5, &[(1, 1)]);

        let outcome = burn_struck_stands(&mut grid, &struck);

        assert_eq!(outcome, SpreadOutcome { burning: 9, burned: 9 });
        for i in 0..3 {
            for j in 0..3 {
                assert!(grid.is_burning(i, j));
                assert!(!grid.has_tree(i, j));
            }
        }
        assert!(grid.has_tree(4, 4), "unconnected tree must survive");
        assert!(!grid.is_burning(4, 4));
    }

    #[test]
    fn test_fire_does_not_persist() {
        let mut grid = block_grid();
        burn_struck_stands(&mut grid, &BoolField::from_cells(5, 5, &[(0, 0)]));
        assert_eq!(grid.fire_count(), 9);

        let outcome = burn_struck_stands(&mut grid, &BoolField::new(5, 5));

        assert_eq!(outcome, SpreadOutcome::default());
        assert!(!grid.fire().any());
    }

    #[test]
    fn test_multiple_strikes_same_stand() {
        let mut grid = block_grid();
        let struck = BoolField::from_cells(5, 5, &[(0, 0), (2, 2), (4, 4)]);

        let outcome = burn_struck_stands(&mut grid, &struck);

        assert_eq!(outcome.burned, 10);
        assert_eq!(grid.tree_count(), 0);
        assert!(grid.check_exclusion());
    }

    #[test]
    fn test_strike_on_empty_cell_is_ignored() {
        let mut grid = block_grid();
        let struck = BoolField::from_cells(5, 5, &[(3, 3)]);

        let outcome = burn_struck_stands(&mut grid, &struck);

        assert_eq!(outcome.burned, 0);
        assert_eq!(grid.tree_count(), 10);
    }
}

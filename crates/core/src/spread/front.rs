//! Neighbor-to-neighbor fire front
//!
//! One synchronous transition per day. Every decision reads the pre-step
//! `fire` snapshot, never a value already updated this day:
//!
//! 1. struck cells ignite
//! 2. tree cells with a burning cardinal neighbor ignite
//! 3. trees under yesterday's fire and under the new fire are removed
//! 4. `fire` becomes the newly ignited set
//!
//! Cells outside the grid count as never burning (absorbing boundary, no
//! wraparound).

use rayon::prelude::*;
use tracing::trace;

use super::SpreadOutcome;
use crate::core_types::BoolField;
use crate::grid::Grid;

/// Run one day of neighbor spread
pub(super) fn advance_front(grid: &mut Grid, struck: &BoolField) -> SpreadOutcome {
    let snapshot = grid.fire().clone();

    let mut next = neighbor_on_fire(&snapshot);
    next.and_assign(grid.trees());
    next.or_assign(struck);

    let mut consumed = snapshot;
    consumed.or_assign(&next);
    let burned = consumed.count_overlap(grid.trees());
    grid.set_trees_where(&consumed, false);

    let burning = next.count_true();
    grid.replace_fire(next);

    trace!("Neighbor spread: {} burning, {} trees burned", burning, burned);
    SpreadOutcome { burning, burned }
}

/// Mask of cells with at least one burning north/south/east/west neighbor
///
/// Rows are computed in parallel; each row reads only the immutable input, so
/// the result does not depend on scheduling.
fn neighbor_on_fire(fire: &BoolField) -> BoolField {
    let (size_x, size_y) = fire.shape();
    let mut out = BoolField::new(size_x, size_y);

    out.as_mut_slice()
        .par_chunks_mut(size_y)
        .enumerate()
        .for_each(|(i, row)| {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (i > 0 && fire.get(i - 1, j))
                    || (i + 1 < size_x && fire.get(i + 1, j))
                    || (j > 0 && fire.get(i, j - 1))
                    || (j + 1 < size_y && fire.get(i, j + 1));
            }
        });

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbor_mask_interior() {
        let fire = BoolField::from_cells(3, 3, &[(1, 1)]);
        let mask = neighbor_on_fire(&fire);
        assert_eq!(
            mask.iter_true().collect::<Vec<_>>(),
            vec![(0, 1), (1, 0), (1, 2), (2, 1)]
        );
    }

    #[test]
    fn test_neighbor_mask_corners_do_not_wrap() {
        let fire = BoolField::from_cells(4, 4, &[(0, 0)]);
        let mask = neighbor_on_fire(&fire);
        assert_eq!(mask.iter_true().collect::<Vec<_>>(), vec![(0, 1), (1, 0)]);
        assert!(!mask.get(3, 0));
        assert!(!mask.get(0, 3));

        let fire = BoolField::from_cells(4, 4, &[(3, 3)]);
        let mask = neighbor_on_fire(&fire);
        assert_eq!(mask.iter_true().collect::<Vec<_>>(), vec![(2, 3), (3, 2)]);
    }

    #[test]
    fn test_edge_cells_see_all_in_grid_neighbors() {
        // Middle of the top edge has three in-grid neighbors
        let fire = BoolField::from_cells(3, 3, &[(0, 0), (0, 2), (1, 1)]);
        let mask = neighbor_on_fire(&fire);
        assert!(mask.get(0, 1));
        assert!(!mask.get(2, 0));
    }

    #[test]
    fn test_single_column_grid() {
        let fire = BoolField::from_cells(5, 1, &[(2, 0)]);
        let mask = neighbor_on_fire(&fire);
        assert_eq!(mask.iter_true().collect::<Vec<_>>(), vec![(1, 0), (3, 0)]);
    }

    #[test]
    fn test_corner_fire_without_fuel_goes_out() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_fire(0, 0, true);

        let outcome = advance_front(&mut grid, &BoolField::new(5, 5));

        assert_eq!(outcome, SpreadOutcome { burning: 0, burned: 0 });
        assert!(!grid.fire().any());
    }

    #[test]
    fn test_front_moves_one_cell_per_day() {
        let mut grid = Grid::new(1, 6).unwrap();
        grid.set_trees_where(&BoolField::with_value(1, 6, true), true);
        let none = BoolField::new(1, 6);

        advance_front(&mut grid, &BoolField::from_cells(1, 6, &[(0, 0)]));
        for day in 1..6 {
            assert_eq!(grid.fire().iter_true().collect::<Vec<_>>(), vec![(0, day - 1)]);
            assert_eq!(grid.tree_count(), 6 - day);
            assert!(grid.check_exclusion());
            advance_front(&mut grid, &none);
        }
        assert_eq!(grid.fire().iter_true().collect::<Vec<_>>(), vec![(0, 5)]);
        advance_front(&mut grid, &none);
        assert!(!grid.fire().any());
        assert_eq!(grid.tree_count(), 0);
    }

    #[test]
    fn test_update_is_synchronous() {
        // Two fires flank a tree; a sequential in-place scan would let the
        // new fire at (0,1) spread to (0,2) within the same day.
        let mut grid = Grid::new(1, 4).unwrap();
        grid.set_fire(0, 0, true);
        grid.set_tree(0, 1, true);
        grid.set_tree(0, 2, true);
        grid.set_tree(0, 3, true);

        advance_front(&mut grid, &BoolField::new(1, 4));

        assert_eq!(grid.fire().iter_true().collect::<Vec<_>>(), vec![(0, 1)]);
        assert!(grid.has_tree(0, 2));
        assert!(grid.has_tree(0, 3));
    }

    #[test]
    fn test_sapling_under_old_fire_burns() {
        let mut grid = Grid::new(1, 1).unwrap();
        grid.set_fire(0, 0, true);
        grid.set_tree(0, 0, true);

        let outcome = advance_front(&mut grid, &BoolField::new(1, 1));

        assert_eq!(outcome.burned, 1);
        assert!(!grid.has_tree(0, 0));
        assert!(!grid.is_burning(0, 0));
    }
}

//! Spread policies and stand labeling through the public API

use forest_fire_core::{
    BoolField, ComponentLabeler, FireSpreadPolicy, GrowthRule, Grid, IgnitionRule, Probability,
    RandomField, SpreadOutcome,
};

fn grid_with_trees(size_x: usize, size_y: usize, cells: &[(usize, usize)]) -> Grid {
    let mut grid = Grid::new(size_x, size_y).unwrap();
    grid.set_trees_where(&BoolField::from_cells(size_x, size_y, cells), true);
    grid
}

#[test]
fn test_single_strike_burns_three_by_three_stand() {
    let block: Vec<_> = (0..3).flat_map(|i| (0..3).map(move |j| (i, j))).collect();
    let mut grid = grid_with_trees(3, 3, &block);
    let struck = BoolField::from_cells(3, 3, &[(2, 1)]);

    let outcome = FireSpreadPolicy::InstantBurn.apply(&mut grid, &struck);

    assert_eq!(outcome, SpreadOutcome { burning: 9, burned: 9 });
    assert_eq!(grid.tree_count(), 0);
    assert_eq!(grid.fire_count(), 9);

    FireSpreadPolicy::InstantBurn.apply(&mut grid, &BoolField::new(3, 3));
    assert_eq!(grid.fire_count(), 0);
}

#[test]
fn test_instant_burn_respects_diagonal_gaps() {
    // Two stands touching only at a corner
    let mut grid = grid_with_trees(4, 4, &[(0, 0), (0, 1), (1, 0), (2, 2), (2, 3), (3, 2)]);
    let struck = BoolField::from_cells(4, 4, &[(0, 1)]);

    let outcome = FireSpreadPolicy::InstantBurn.apply(&mut grid, &struck);

    assert_eq!(outcome.burned, 3);
    assert!(grid.has_tree(2, 2));
    assert!(grid.has_tree(3, 2));
}

#[test]
fn test_diagonal_neighbors_get_distinct_stand_ids() {
    let trees = BoolField::from_cells(3, 3, &[(0, 1), (1, 2)]);
    let labels = ComponentLabeler::label(&trees);

    assert_eq!(labels.count(), 2);
    assert_ne!(labels.label_at(0, 1), labels.label_at(1, 2));
}

#[test]
fn test_labels_follow_grouping() {
    // ##.#
    // ...#
    // #..#
    let cells = [(0, 0), (0, 1), (0, 3), (1, 3), (2, 0), (2, 3)];
    let labels = ComponentLabeler::label(&BoolField::from_cells(3, 4, &cells));

    assert_eq!(labels.count(), 3);
    assert_eq!(labels.label_at(0, 0), labels.label_at(0, 1));
    assert_eq!(labels.label_at(0, 3), labels.label_at(2, 3));
    assert_ne!(labels.label_at(0, 0), labels.label_at(2, 0));
    assert_ne!(labels.label_at(0, 0), labels.label_at(0, 3));

    let mut sizes = labels.stand_sizes();
    sizes.sort_unstable();
    assert_eq!(sizes, vec![1, 2, 3]);
}

#[test]
fn test_neighbor_spread_burns_cross_pattern() {
    //  .#.
    //  #*#
    //  .#.
    let mut grid = grid_with_trees(3, 3, &[(0, 1), (1, 0), (1, 2), (2, 1), (0, 0)]);
    grid.set_fire(1, 1, true);

    let outcome = FireSpreadPolicy::NeighborSpread.apply(&mut grid, &BoolField::new(3, 3));

    assert_eq!(outcome.burning, 4);
    assert_eq!(outcome.burned, 4);
    assert!(!grid.is_burning(1, 1), "fire goes out behind the front");
    assert!(grid.has_tree(0, 0), "diagonal tree is not reached on day one");

    FireSpreadPolicy::NeighborSpread.apply(&mut grid, &BoolField::new(3, 3));
    assert!(grid.is_burning(0, 0));
    assert!(!grid.has_tree(0, 0));
}

#[test]
fn test_rules_share_one_deterministic_stream() {
    let run = || {
        let mut grid = Grid::new(16, 16).unwrap();
        let mut field = RandomField::from_seed(77);
        let p = Probability::new(0.3).unwrap();
        GrowthRule::apply(&mut grid, p, &mut field);
        let struck = IgnitionRule::apply(&grid, p, &mut field);
        (grid, struck)
    };

    let (grid_a, struck_a) = run();
    let (grid_b, struck_b) = run();
    assert_eq!(grid_a, grid_b);
    assert_eq!(struck_a, struck_b);
    assert_eq!(struck_a.count_overlap(grid_a.trees()), struck_a.count_true());
}

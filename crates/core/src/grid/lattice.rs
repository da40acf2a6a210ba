//! Forest lattice holding the `trees` and `fire` matrices
//!
//! The grid is the only mutable state of a simulation. Dimensions are fixed
//! at construction; both matrices always share the same shape.
//!
//! After every completed day the two matrices are mutually exclusive: a cell
//! never holds a living tree and an active fire at once.

use serde::{Deserialize, Serialize};

use crate::core_types::BoolField;
use crate::error::{ForestError, Result};

/// Composite view of a single cell for display collaborators
///
/// The numeric [`CellState::code`] matches `tree + 2 * fire`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Bare ground
    Empty,
    /// Living tree
    Tree,
    /// Active fire
    Fire,
}

impl CellState {
    /// Plot code: 0 = empty, 1 = tree, 2 = fire
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Tree => 1,
            Self::Fire => 2,
        }
    }
}

/// Two same-shaped boolean matrices: living trees and active fire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    trees: BoolField,
    fire: BoolField,
}

impl Grid {
    /// Create an empty grid (no trees, no fire)
    ///
    /// # Errors
    ///
    /// Returns [`ForestError::InvalidDimensions`] if either dimension is zero.
    pub fn new(size_x: usize, size_y: usize) -> Result<Self> {
        if size_x == 0 || size_y == 0 {
            return Err(ForestError::InvalidDimensions { size_x, size_y });
        }
        Ok(Self {
            trees: BoolField::new(size_x, size_y),
            fire: BoolField::new(size_x, size_y),
        })
    }

    /// Number of rows
    #[must_use]
    pub fn size_x(&self) -> usize {
        self.trees.size_x()
    }

    /// Number of columns
    #[must_use]
    pub fn size_y(&self) -> usize {
        self.trees.size_y()
    }

    /// Shape as `(size_x, size_y)`
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.trees.shape()
    }

    /// Living trees
    #[must_use]
    pub fn trees(&self) -> &BoolField {
        &self.trees
    }

    /// Active fire
    #[must_use]
    pub fn fire(&self) -> &BoolField {
        &self.fire
    }

    /// Whether `(i, j)` holds a living tree
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    #[must_use]
    pub fn has_tree(&self, i: usize, j: usize) -> bool {
        self.trees.get(i, j)
    }

    /// Whether `(i, j)` is burning
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    #[must_use]
    pub fn is_burning(&self, i: usize, j: usize) -> bool {
        self.fire.get(i, j)
    }

    /// Place or remove a tree at `(i, j)`
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    pub fn set_tree(&mut self, i: usize, j: usize, value: bool) {
        self.trees.set(i, j, value);
    }

    /// Light or extinguish `(i, j)`
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    pub fn set_fire(&mut self, i: usize, j: usize, value: bool) {
        self.fire.set(i, j, value);
    }

    /// Assign `value` to `trees` wherever `mask` is set
    ///
    /// # Panics
    ///
    /// Panics if `mask` has a different shape
    pub fn set_trees_where(&mut self, mask: &BoolField, value: bool) {
        self.trees.set_where(mask, value);
    }

    /// Assign `value` to `fire` wherever `mask` is set
    ///
    /// # Panics
    ///
    /// Panics if `mask` has a different shape
    pub fn set_fire_where(&mut self, mask: &BoolField, value: bool) {
        self.fire.set_where(mask, value);
    }

    /// Replace the whole `fire` matrix
    ///
    /// # Panics
    ///
    /// Panics if `fire` has a different shape
    pub fn replace_fire(&mut self, fire: BoolField) {
        self.fire.assert_same_shape(&fire);
        self.fire = fire;
    }

    /// Number of living trees
    #[must_use]
    pub fn tree_count(&self) -> usize {
        self.trees.count_true()
    }

    /// Number of burning cells
    #[must_use]
    pub fn fire_count(&self) -> usize {
        self.fire.count_true()
    }

    /// Composite state of `(i, j)`
    ///
    /// Fire takes precedence, which only matters mid-step.
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    #[must_use]
    pub fn cell_state(&self, i: usize, j: usize) -> CellState {
        if self.fire.get(i, j) {
            CellState::Fire
        } else if self.trees.get(i, j) {
            CellState::Tree
        } else {
            CellState::Empty
        }
    }

    /// Composite state of every cell in row-major order
    #[must_use]
    pub fn cell_states(&self) -> Vec<CellState> {
        let (size_x, size_y) = self.shape();
        (0..size_x)
            .flat_map(|i| (0..size_y).map(move |j| (i, j)))
            .map(|(i, j)| self.cell_state(i, j))
            .collect()
    }

    /// Whether no cell holds both a tree and a fire
    #[must_use]
    pub fn check_exclusion(&self) -> bool {
        self.trees.count_overlap(&self.fire) == 0
    }
}

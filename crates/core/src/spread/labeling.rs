//! Connected-component labeling of tree stands
//!
//! A stand is a maximal set of tree cells joined through shared edges
//! (north/south/east/west). Diagonal contact does not join stands.

use crate::core_types::BoolField;

/// Label assigned to cells without a tree
pub const BACKGROUND: u32 = 0;

/// Stand id per cell, row-major, plus the number of stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandLabels {
    labels: Vec<u32>,
    size_x: usize,
    size_y: usize,
    count: u32,
}

impl StandLabels {
    /// Stand id at `(i, j)`, or [`BACKGROUND`] for empty cells
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    #[must_use]
    pub fn label_at(&self, i: usize, j: usize) -> u32 {
        assert!(
            i < self.size_x && j < self.size_y,
            "Coordinates out of bounds: ({i}, {j}) in {}x{} labels",
            self.size_x,
            self.size_y
        );
        self.labels[i * self.size_y + j]
    }

    /// Number of stands; ids run from 1 to `count` inclusive
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Row-major label matrix
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.labels
    }

    /// Shape as `(size_x, size_y)`
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.size_x, self.size_y)
    }

    /// Cell count of each stand, indexed by `id - 1`
    #[must_use]
    pub fn stand_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.count as usize];
        for &label in &self.labels {
            if label != BACKGROUND {
                sizes[label as usize - 1] += 1;
            }
        }
        sizes
    }

    /// Consume into the raw `(labels, count)` pair
    #[must_use]
    pub fn into_parts(self) -> (Vec<u32>, u32) {
        (self.labels, self.count)
    }
}

/// 4-connected flood-fill labeler
pub struct ComponentLabeler;

impl ComponentLabeler {
    /// Label every 4-connected group of `true` cells in `trees`
    ///
    /// Cells are scanned in row-major order and each unlabeled tree starts a
    /// new stand, so ids are assigned in order of each stand's first cell.
    /// The fill uses an explicit stack and never recurses.
    #[must_use]
    pub fn label(trees: &BoolField) -> StandLabels {
        let (size_x, size_y) = trees.shape();
        let cells = trees.as_slice();
        let mut labels = vec![BACKGROUND; cells.len()];
        let mut count = 0;
        let mut stack = Vec::new();

        for start in 0..cells.len() {
            if !cells[start] || labels[start] != BACKGROUND {
                continue;
            }

            count += 1;
            labels[start] = count;
            stack.push(start);

            while let Some(idx) = stack.pop() {
                let (i, j) = (idx / size_y, idx % size_y);

                let mut visit = |n: usize| {
                    if cells[n] && labels[n] == BACKGROUND {
                        labels[n] = count;
                        stack.push(n);
                    }
                };

                if i > 0 {
                    visit(idx - size_y);
                }
                if i + 1 < size_x {
                    visit(idx + size_y);
                }
                if j > 0 {
                    visit(idx - 1);
                }
                if j + 1 < size_y {
                    visit(idx + 1);
                }
            }
        }

        StandLabels {
            labels,
            size_x,
            size_y,
            count,
        }
    }
}

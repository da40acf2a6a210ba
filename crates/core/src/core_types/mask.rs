//! Boolean lattice fields
//!
//! `BoolField` stores one `bool` per grid cell as a flat `Vec<bool>` in
//! row-major order. Cell `(i, j)` lives at index `i * size_y + j`, where
//! `i` runs over `0..size_x` and `j` over `0..size_y`.
//!
//! The same type backs the `trees` and `fire` matrices, Bernoulli samples,
//! and struck-cell sets, so every rule composes masks with the same
//! element-wise operations.

use rayon::prelude::*;

/// Row-major boolean matrix of shape `size_x × size_y`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoolField {
    data: Vec<bool>,
    size_x: usize,
    size_y: usize,
}

impl BoolField {
    /// Create a field with the given shape, every cell `false`
    #[must_use]
    pub fn new(size_x: usize, size_y: usize) -> Self {
        Self::with_value(size_x, size_y, false)
    }

    /// Create a field with the given shape, every cell set to `value`
    #[must_use]
    pub fn with_value(size_x: usize, size_y: usize, value: bool) -> Self {
        Self {
            data: vec![value; size_x * size_y],
            size_x,
            size_y,
        }
    }

    /// Build a field by evaluating `f(i, j)` for every cell in row-major order
    pub fn from_fn(size_x: usize, size_y: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut data = Vec::with_capacity(size_x * size_y);
        for i in 0..size_x {
            for j in 0..size_y {
                data.push(f(i, j));
            }
        }
        Self {
            data,
            size_x,
            size_y,
        }
    }

    /// Build a field from the listed `true` cells
    ///
    /// # Panics
    ///
    /// Panics if any cell lies outside the shape
    #[must_use]
    pub fn from_cells(size_x: usize, size_y: usize, cells: &[(usize, usize)]) -> Self {
        let mut field = Self::new(size_x, size_y);
        for &(i, j) in cells {
            field.set(i, j, true);
        }
        field
    }

    /// Number of rows
    #[must_use]
    pub fn size_x(&self) -> usize {
        self.size_x
    }

    /// Number of columns
    #[must_use]
    pub fn size_y(&self) -> usize {
        self.size_y
    }

    /// Shape as `(size_x, size_y)`
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.size_x, self.size_y)
    }

    #[inline]
    fn index(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.size_x && j < self.size_y,
            "Coordinates out of bounds: ({i}, {j}) in {}x{} field",
            self.size_x,
            self.size_y
        );
        i * self.size_y + j
    }

    /// Value at `(i, j)`
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> bool {
        self.data[self.index(i, j)]
    }

    /// Set the value at `(i, j)`
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: bool) {
        let idx = self.index(i, j);
        self.data[idx] = value;
    }

    /// Fill the whole field with `value`
    pub fn fill(&mut self, value: bool) {
        self.data.fill(value);
    }

    /// Flat row-major view of the cells
    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [bool] {
        &mut self.data
    }

    /// Iterate rows as slices of length `size_y`
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.data.chunks(self.size_y.max(1))
    }

    /// Copy out as a nested `Vec`, indexed `[i][j]`
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.rows().map(<[bool]>::to_vec).collect()
    }

    /// Coordinates of every `true` cell in row-major order
    pub fn iter_true(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size_y = self.size_y;
        self.data
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell)
            .map(move |(idx, _)| (idx / size_y, idx % size_y))
    }

    /// Number of `true` cells
    #[must_use]
    pub fn count_true(&self) -> usize {
        self.data.par_iter().filter(|&&cell| cell).count()
    }

    /// Whether any cell is `true`
    #[must_use]
    pub fn any(&self) -> bool {
        self.data.par_iter().any(|&cell| cell)
    }

    /// Number of cells that are `true` in both fields
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ
    #[must_use]
    pub fn count_overlap(&self, other: &BoolField) -> usize {
        self.assert_same_shape(other);
        self.data
            .par_iter()
            .zip(other.data.par_iter())
            .filter(|&(&a, &b)| a && b)
            .count()
    }

    /// Keep only cells that are also `true` in `other`
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ
    pub fn and_assign(&mut self, other: &BoolField) {
        self.assert_same_shape(other);
        for (cell, &mask) in self.data.iter_mut().zip(&other.data) {
            *cell &= mask;
        }
    }

    /// Set cells that are `true` in `other`
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ
    pub fn or_assign(&mut self, other: &BoolField) {
        self.assert_same_shape(other);
        for (cell, &mask) in self.data.iter_mut().zip(&other.data) {
            *cell |= mask;
        }
    }

    /// Clear cells that are `true` in `other`
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ
    pub fn and_not_assign(&mut self, other: &BoolField) {
        self.assert_same_shape(other);
        for (cell, &mask) in self.data.iter_mut().zip(&other.data) {
            *cell &= !mask;
        }
    }

    /// Assign `value` to every cell where `mask` is `true`
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ
    pub fn set_where(&mut self, mask: &BoolField, value: bool) {
        self.assert_same_shape(mask);
        for (cell, &hit) in self.data.iter_mut().zip(&mask.data) {
            if hit {
                *cell = value;
            }
        }
    }

    pub(crate) fn assert_same_shape(&self, other: &BoolField) {
        assert!(
            self.shape() == other.shape(),
            "Field shape mismatch: {:?} vs {:?}",
            self.shape(),
            other.shape()
        );
    }
}

//! Error types for the forest fire core
//!
//! Only configuration problems are reported as errors. Indexing outside the
//! grid or combining masks of different shapes is a programming error and
//! panics instead.

use thiserror::Error;

/// Errors raised when constructing or reconfiguring a simulation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ForestError {
    /// A probability parameter was outside `[0, 1]` or not finite
    #[error("{name} must be a probability in [0, 1], got {value}")]
    InvalidProbability {
        /// Parameter name (e.g. `"p_sapling"`)
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// A grid dimension was zero
    #[error("grid dimensions must be positive, got {size_x}x{size_y}")]
    InvalidDimensions {
        /// Requested number of rows
        size_x: usize,
        /// Requested number of columns
        size_y: usize,
    },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ForestError>;

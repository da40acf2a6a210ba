//! Forest lattice state

pub mod lattice;

// Re-export main types
pub use lattice::{CellState, Grid};

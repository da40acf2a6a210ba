//! Core value types shared by every simulation module

pub mod mask;
pub mod units;

pub use mask::BoolField;
pub use units::Probability;

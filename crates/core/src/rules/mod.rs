//! Stochastic day rules
//!
//! Growth and lightning are both independent Bernoulli trials per cell,
//! drawn from a single seeded [`RandomField`] owned by the simulation.

mod lightning;
mod sampling;
mod sprouting;

pub use lightning::IgnitionRule;
pub use sampling::RandomField;
pub use sprouting::GrowthRule;

//! Validated unit types
//!
//! Probabilities enter the simulation from configuration and setters. They
//! are validated once, at that boundary, so the day step itself never has to
//! fail.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ForestError, Result};

/// Probability of a Bernoulli event, guaranteed finite and within `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
#[repr(transparent)]
pub struct Probability(f64);

impl Probability {
    /// Event never happens
    pub const ZERO: Probability = Probability(0.0);

    /// Event always happens
    pub const ONE: Probability = Probability(1.0);

    /// Validate a raw probability
    ///
    /// # Errors
    ///
    /// Returns [`ForestError::InvalidProbability`] if `value` is NaN, infinite
    /// or outside `[0, 1]`.
    pub fn new(value: f64) -> Result<Self> {
        Self::named("probability", value)
    }

    /// Validate a raw probability, reporting `name` on failure
    ///
    /// # Errors
    ///
    /// Returns [`ForestError::InvalidProbability`] if `value` is NaN, infinite
    /// or outside `[0, 1]`.
    pub fn named(name: &'static str, value: f64) -> Result<Self> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(Probability(value))
        } else {
            Err(ForestError::InvalidProbability { name, value })
        }
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

impl TryFrom<f64> for Probability {
    type Error = ForestError;

    fn try_from(value: f64) -> Result<Self> {
        Probability::new(value)
    }
}

impl From<Probability> for f64 {
    fn from(p: Probability) -> f64 {
        p.0
    }
}

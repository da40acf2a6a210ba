//! Per-day and cumulative counters

use serde::{Deserialize, Serialize};

/// What happened during one call to `advance()`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStats {
    /// Day number, starting at 1 for the first step
    pub day: u64,
    /// Cells that gained a tree
    pub grown: usize,
    /// Trees struck by lightning
    pub struck: usize,
    /// Trees removed by fire
    pub burned: usize,
    /// Living trees at the end of the day
    pub trees: usize,
    /// Burning cells at the end of the day
    pub burning: usize,
}

/// Running totals since the simulation was created
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Completed days
    pub days: u64,
    /// Saplings grown over all days
    pub total_grown: u64,
    /// Lightning strikes on trees over all days
    pub total_struck: u64,
    /// Trees removed by fire over all days
    pub total_burned: u64,
    /// Largest number of cells burning at the end of any day
    pub peak_burning: usize,
    /// Counters of the most recent day
    pub last_day: DayStats,
}

impl SimulationStats {
    pub(crate) fn record(&mut self, day: DayStats) {
        self.days = day.day;
        self.total_grown += day.grown as u64;
        self.total_struck += day.struck as u64;
        self.total_burned += day.burned as u64;
        self.peak_burning = self.peak_burning.max(day.burning);
        self.last_day = day;
    }
}

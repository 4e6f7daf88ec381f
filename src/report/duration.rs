//! Total and average trip duration.
use super::{Report, or_no_data};
use crate::dataset::TripTable;
use crate::stats::sum_and_mean;
use std::fmt;

/// Aggregate trip durations, in seconds
#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    /// The number of trips aggregated
    pub trip_count: usize,
    /// Total duration of all trips
    pub total: Option<f64>,
    /// Mean duration of a trip
    pub mean: Option<f64>,
}

impl Report for DurationStats {
    const DESCRIPTION: &'static str = "trip duration";

    fn compute(table: &TripTable) -> Self {
        let totals = sum_and_mean(table.trips().iter().map(|trip| trip.duration));
        Self {
            trip_count: table.len(),
            total: totals.map(|(total, _)| total),
            mean: totals.map(|(_, mean)| mean),
        }
    }
}

impl fmt::Display for DurationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds =
            |value: Option<f64>| or_no_data(value.map(|value| format!("{value} seconds")));

        writeln!(f, "Number of trips: {}", self.trip_count)?;
        writeln!(f, "Total travel time: {}", seconds(self.total))?;
        writeln!(f, "Mean travel time: {}", seconds(self.mean))
    }
}

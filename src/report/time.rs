//! The most frequent times of travel.
use super::{Report, or_no_data};
use crate::catalog::weekday_name;
use crate::dataset::TripTable;
use crate::stats::mode;
use chrono::{Month, Weekday};
use std::fmt;

/// The most common month, day of week and start hour
#[derive(Debug, Clone, PartialEq)]
pub struct TimeStats {
    /// The most common month
    pub month: Option<Month>,
    /// The most common day of the week
    pub weekday: Option<Weekday>,
    /// The most common hour of the day (0-23) at which trips start
    pub hour: Option<u32>,
}

impl Report for TimeStats {
    const DESCRIPTION: &'static str = "the most frequent times of travel";

    fn compute(table: &TripTable) -> Self {
        let trips = table.trips();
        Self {
            month: mode(trips.iter().map(|trip| trip.month)),
            weekday: mode(trips.iter().map(|trip| trip.weekday)),
            hour: mode(trips.iter().map(|trip| trip.hour)),
        }
    }
}

impl fmt::Display for TimeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Most common month: {}",
            or_no_data(self.month.map(|month| month.name()))
        )?;
        writeln!(
            f,
            "Most common day of week: {}",
            or_no_data(self.weekday.map(weekday_name))
        )?;
        writeln!(f, "Most common start hour: {}", or_no_data(self.hour))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{chicago_table, empty_table};
    use crate::report::NO_DATA;
    use rstest::rstest;

    #[rstest]
    fn test_time_stats(chicago_table: TripTable) {
        let stats = TimeStats::compute(&chicago_table);
        assert_eq!(
            stats,
            TimeStats {
                month: Some(Month::March),
                weekday: Some(Weekday::Mon),
                hour: Some(8),
            }
        );
        assert_eq!(
            stats.to_string(),
            "Most common month: March
Most common day of week: Monday
Most common start hour: 8
"
        );
    }

    #[rstest]
    fn test_time_stats_empty(empty_table: TripTable) {
        let stats = TimeStats::compute(&empty_table);
        assert_eq!(
            stats,
            TimeStats {
                month: None,
                weekday: None,
                hour: None
            }
        );
        assert_eq!(stats.to_string().matches(NO_DATA).count(), 3);
    }
}

//! The most popular stations and trips.
use super::{Report, or_no_data};
use crate::dataset::TripTable;
use crate::stats::mode;
use std::fmt;

/// Separator placed between the start and end station names of a trip
const STATION_PAIR_SEPARATOR: &str = " to ";

/// Combine a start and end station into a single key.
///
/// NB: This is plain string concatenation, so two different pairs of stations could in principle
/// produce the same key if a station name contains the separator.
fn station_pair(start: &str, end: &str) -> String {
    format!("{start}{STATION_PAIR_SEPARATOR}{end}")
}

/// The most commonly used stations
#[derive(Debug, Clone, PartialEq)]
pub struct StationStats {
    /// The most common start station
    pub start_station: Option<String>,
    /// The most common end station
    pub end_station: Option<String>,
    /// The most common combination of start and end station
    pub trip: Option<String>,
}

impl Report for StationStats {
    const DESCRIPTION: &'static str = "the most popular stations and trip";

    fn compute(table: &TripTable) -> Self {
        let trips = table.trips();
        Self {
            start_station: mode(trips.iter().map(|trip| trip.start_station.as_str()))
                .map(ToString::to_string),
            end_station: mode(trips.iter().map(|trip| trip.end_station.as_str()))
                .map(ToString::to_string),
            trip: mode(
                trips
                    .iter()
                    .map(|trip| station_pair(&trip.start_station, &trip.end_station)),
            ),
        }
    }
}

impl fmt::Display for StationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Most common start station: {}",
            or_no_data(self.start_station.as_ref())
        )?;
        writeln!(
            f,
            "Most common end station: {}",
            or_no_data(self.end_station.as_ref())
        )?;
        writeln!(f, "Most frequent trip: {}", or_no_data(self.trip.as_ref()))
    }
}

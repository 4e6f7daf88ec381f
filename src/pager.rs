//! Showing the raw trip data a few rows at a time.
use crate::console::Console;
use crate::dataset::{OptionalColumn, Trip, TripTable};
use anyhow::{Result, ensure};
use std::io::{BufRead, Write};

/// The default number of rows shown at a time
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Shown in place of blank values
const MISSING_VALUE: &str = "-";

/// Write one trip, with one field per line
fn write_trip<W: Write>(out: &mut W, trip: &Trip, table: &TripTable) -> Result<()> {
    let optional = |value: Option<String>| value.unwrap_or_else(|| MISSING_VALUE.to_string());

    writeln!(out, "Row {}", trip.index)?;
    writeln!(out, "  Start Time: {}", trip.start_time)?;
    if let Some(end_time) = trip.end_time {
        writeln!(out, "  End Time: {end_time}")?;
    }
    writeln!(out, "  Trip Duration: {}", trip.duration)?;
    writeln!(out, "  Start Station: {}", trip.start_station)?;
    writeln!(out, "  End Station: {}", trip.end_station)?;
    writeln!(out, "  User Type: {}", optional(trip.user_type.clone()))?;
    if table.schema().has(OptionalColumn::Gender) {
        writeln!(out, "  Gender: {}", optional(trip.gender.clone()))?;
    }
    if table.schema().has(OptionalColumn::BirthYear) {
        writeln!(
            out,
            "  Birth Year: {}",
            optional(trip.birth_year.map(|year| year.to_string()))
        )?;
    }

    Ok(())
}

/// Offer to show the trips in `table`, `page_size` rows at a time.
///
/// Paging stops as soon as the user answers anything other than "yes", or when there are no more
/// rows. Returns the number of rows shown.
pub fn page_raw_data<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
    page_size: usize,
) -> Result<usize> {
    ensure!(page_size > 0, "Page size must be at least 1");

    let mut start = 0;
    let mut end = page_size;
    while start < table.len() {
        let prompt = format!(
            "Would you like to see the next {page_size} rows of raw data? Enter yes or no."
        );
        if !console.confirm(&prompt)? {
            break;
        }

        for trip in &table.trips()[start..end.min(table.len())] {
            write_trip(console.output(), trip, table)?;
        }
        start = start.saturating_add(page_size);
        end = end.saturating_add(page_size);
    }

    Ok(start.min(table.len()))
}

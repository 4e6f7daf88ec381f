//! Statistics reported to the user about a table of trips.
use crate::dataset::TripTable;
use crate::filter::SECTION_SEPARATOR;
use anyhow::Result;
use std::fmt;
use std::io::Write;
use std::time::Instant;

pub mod duration;
pub mod station;
pub mod time;
pub mod user;
use duration::DurationStats;
use station::StationStats;
use time::TimeStats;
use user::UserStats;

/// Placeholder shown when a statistic cannot be computed because there are no trips
pub const NO_DATA: &str = "no data";

/// A set of statistics computed over a [`TripTable`]
pub trait Report: fmt::Display + Sized {
    /// What is being calculated, e.g. "the most frequent times of travel"
    const DESCRIPTION: &'static str;

    /// Compute the statistics for `table`
    fn compute(table: &TripTable) -> Self;
}

/// Write a value if there is one, otherwise [`NO_DATA`]
pub(crate) fn or_no_data<T: fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| NO_DATA.to_string(), |value| value.to_string())
}

/// Write a list of value counts, one per line
pub(crate) fn write_value_counts(
    f: &mut fmt::Formatter<'_>,
    counts: &[(String, usize)],
) -> fmt::Result {
    if counts.is_empty() {
        return writeln!(f, "  {NO_DATA}");
    }

    for (value, count) in counts {
        writeln!(f, "  {value}: {count}")?;
    }

    Ok(())
}

/// Compute a report, write it to `out` and say how long it took
pub fn run_report<R: Report, W: Write>(table: &TripTable, out: &mut W) -> Result<R> {
    writeln!(out, "\nCalculating {}...\n", R::DESCRIPTION)?;
    let start = Instant::now();

    let report = R::compute(table);
    write!(out, "{report}")?;

    writeln!(
        out,
        "\nThis took {:.6} seconds.",
        start.elapsed().as_secs_f64()
    )?;
    writeln!(out, "{SECTION_SEPARATOR}")?;

    Ok(report)
}

/// Run all of the reports in turn
pub fn run_all_reports<W: Write>(table: &TripTable, out: &mut W) -> Result<()> {
    run_report::<TimeStats, _>(table, out)?;
    run_report::<StationStats, _>(table, out)?;
    run_report::<DurationStats, _>(table, out)?;
    run_report::<UserStats, _>(table, out)?;

    Ok(())
}

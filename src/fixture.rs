//! Fixtures for tests
use crate::catalog::{Catalog, City};
use crate::dataset::{OptionalColumn, Schema, Trip, TripTable, read_trips};
use chrono::{Duration, NaiveDate};
use rstest::fixture;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// Assert that an error with the given message occurs
macro_rules! assert_error {
    ($result:expr, $msg:expr) => {
        assert_eq!(
            $result.unwrap_err().chain().next().unwrap().to_string(),
            $msg
        );
    };
}
pub(crate) use assert_error;

/// Ten trips in Chicago.
///
/// Most common: month March, day Monday, hour 8, start station Streeter Dr & Grand Ave, end station
/// Lake Shore Dr & Monroe St.
pub const CHICAGO_CSV: &str = include_str!("../tests/data/chicago.csv");

/// Four trips in Washington, which has no gender or birth year columns
pub const WASHINGTON_CSV: &str = include_str!("../tests/data/washington.csv");

/// Write a data file for `city` into `dir`, returning its path
pub fn write_data_file(dir: &Path, city: City, contents: &str) -> PathBuf {
    let path = Catalog::new(dir).data_file(city).to_path_buf();
    fs::write(&path, contents).unwrap();
    path
}

/// A catalog whose data files are in `dir`
pub fn catalog_in(dir: &Path) -> Catalog {
    Catalog::new(dir)
}

/// Read a table for `city` from CSV text
fn table_from_csv(city: City, contents: &str) -> TripTable {
    let dir = tempdir().unwrap();
    let path = write_data_file(dir.path(), city, contents);
    read_trips(city, &path).unwrap()
}

#[fixture]
pub fn catalog() -> Catalog {
    Catalog::new(Path::new("."))
}

#[fixture]
pub fn chicago_table() -> TripTable {
    table_from_csv(City::Chicago, CHICAGO_CSV)
}

#[fixture]
pub fn washington_table() -> TripTable {
    table_from_csv(City::Washington, WASHINGTON_CSV)
}

#[fixture]
pub fn empty_table() -> TripTable {
    TripTable::new(
        City::Chicago,
        Schema::new(&[OptionalColumn::Gender, OptionalColumn::BirthYear]),
        Vec::new(),
    )
}

/// A table with `len` trips, one hour apart, each starting from "Station {index}"
pub fn numbered_table(len: usize) -> TripTable {
    let start = NaiveDate::from_ymd_opt(2017, 1, 2)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let trips = (0..len)
        .map(|index| {
            Trip::new(
                index,
                start + Duration::hours(i64::try_from(index).unwrap()),
                None,
                60.0,
                format!("Station {index}"),
                "Terminus".into(),
                Some("Subscriber".into()),
                None,
                None,
            )
            .unwrap()
        })
        .collect();

    TripTable::new(City::Washington, Schema::default(), trips)
}

//! Loading and filtering of bikeshare trip records.
use crate::catalog::{Catalog, City};
use crate::filter::FilterSelection;
use anyhow::{Context, Result, ensure};
use chrono::{Datelike, Month, NaiveDateTime, Timelike, Weekday};
use csv::StringRecord;
use log::{debug, info};
use serde::Deserialize;
use std::path::Path;
use strum::{Display, EnumIter, IntoEnumIterator};

/// Columns which every data file must contain
const REQUIRED_COLUMNS: [&str; 5] = [
    "Start Time",
    "Start Station",
    "End Station",
    "Trip Duration",
    "User Type",
];

/// Accepted formats for timestamps in data files
const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Columns which are only present in some cities' data files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum OptionalColumn {
    /// The rider's gender
    #[strum(to_string = "Gender")]
    Gender,
    /// The rider's year of birth
    #[strum(to_string = "Birth Year")]
    BirthYear,
}

/// Which of the optional columns a data file contains
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    has_gender: bool,
    has_birth_year: bool,
}

impl Schema {
    /// Create a schema from the optional columns which are present
    pub fn new(columns: &[OptionalColumn]) -> Self {
        Self {
            has_gender: columns.contains(&OptionalColumn::Gender),
            has_birth_year: columns.contains(&OptionalColumn::BirthYear),
        }
    }

    /// Probe a CSV header row for the optional columns
    fn from_headers(headers: &StringRecord) -> Self {
        let present: Vec<_> = OptionalColumn::iter()
            .filter(|column| has_column(headers, &column.to_string()))
            .collect();
        Self::new(&present)
    }

    /// Whether the given column is present
    pub fn has(&self, column: OptionalColumn) -> bool {
        match column {
            OptionalColumn::Gender => self.has_gender,
            OptionalColumn::BirthYear => self.has_birth_year,
        }
    }
}

fn has_column(headers: &StringRecord, name: &str) -> bool {
    headers.iter().any(|header| header == name)
}

/// A trip record as it appears in a data file
#[derive(Debug, Deserialize)]
struct TripRaw {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type")]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

impl TripRaw {
    fn into_trip(self, index: usize) -> Result<Trip> {
        let start_time = parse_timestamp(&self.start_time)?;
        let end_time = self
            .end_time
            .filter(|s| !s.trim().is_empty())
            .map(|s| parse_timestamp(&s))
            .transpose()?;
        let birth_year = self.birth_year.map(parse_birth_year).transpose()?;

        Trip::new(
            index,
            start_time,
            end_time,
            self.duration,
            self.start_station,
            self.end_station,
            non_empty(self.user_type),
            non_empty(self.gender),
            birth_year,
        )
    }
}

/// Treat blank strings as missing values
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Parse a timestamp in any of the accepted formats
fn parse_timestamp(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .with_context(|| format!("Invalid timestamp: {s}"))
}

/// Birth years are sometimes stored as floats (e.g. 1992.0), but must be whole years
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_birth_year(value: f64) -> Result<u16> {
    ensure!(
        value.fract() == 0.0 && (0.0..=f64::from(u16::MAX)).contains(&value),
        "Invalid birth year: {value}"
    );
    Ok(value as u16)
}

/// A single bikeshare trip
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    /// Position of the trip in its data file (zero-based, excluding the header)
    pub index: usize,
    /// When the trip started
    pub start_time: NaiveDateTime,
    /// When the trip ended
    pub end_time: Option<NaiveDateTime>,
    /// Duration of the trip in seconds
    pub duration: f64,
    /// Where the trip started
    pub start_station: String,
    /// Where the trip ended
    pub end_station: String,
    /// The type of user, e.g. "Subscriber"
    pub user_type: Option<String>,
    /// The rider's gender
    pub gender: Option<String>,
    /// The rider's year of birth
    pub birth_year: Option<u16>,
    /// Month in which the trip started
    pub month: Month,
    /// Day of the week on which the trip started
    pub weekday: Weekday,
    /// Hour of the day (0-23) at which the trip started
    pub hour: u32,
}

impl Trip {
    /// Create a new [`Trip`], deriving the month, day and hour from the start time
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        index: usize,
        start_time: NaiveDateTime,
        end_time: Option<NaiveDateTime>,
        duration: f64,
        start_station: String,
        end_station: String,
        user_type: Option<String>,
        gender: Option<String>,
        birth_year: Option<u16>,
    ) -> Result<Self> {
        let month = u8::try_from(start_time.month())
            .ok()
            .and_then(|month| Month::try_from(month).ok())
            .with_context(|| format!("Invalid month in timestamp {start_time}"))?;

        Ok(Self {
            index,
            start_time,
            end_time,
            duration,
            start_station,
            end_station,
            user_type,
            gender,
            birth_year,
            month,
            weekday: start_time.weekday(),
            hour: start_time.hour(),
        })
    }
}

/// The trips for one city, possibly filtered by month and day
#[derive(Debug, Clone, PartialEq)]
pub struct TripTable {
    city: City,
    schema: Schema,
    trips: Vec<Trip>,
}

impl TripTable {
    /// Create a new [`TripTable`]
    pub fn new(city: City, schema: Schema, trips: Vec<Trip>) -> Self {
        Self {
            city,
            schema,
            trips,
        }
    }

    /// The city the trips were taken in
    pub fn city(&self) -> City {
        self.city
    }

    /// The optional columns available for this table
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The trips, in file order
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// The number of trips
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    /// Whether there are no trips
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Keep only trips starting in `month` (if given) and on `day` (if given)
    pub fn apply_filters(&mut self, month: Option<Month>, day: Option<Weekday>) {
        if let Some(month) = month {
            self.trips.retain(|trip| trip.month == month);
        }
        if let Some(day) = day {
            self.trips.retain(|trip| trip.weekday == day);
        }
    }
}

/// Read all trips for `city` from the CSV file at `file_path`
pub fn read_trips(city: City, file_path: &Path) -> Result<TripTable> {
    let mut reader = csv::Reader::from_path(file_path)
        .with_context(|| format!("Could not open data file {}", file_path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("Could not read header of {}", file_path.display()))?
        .clone();
    for column in REQUIRED_COLUMNS {
        ensure!(
            has_column(&headers, column),
            "Missing required column \"{column}\" in {}",
            file_path.display()
        );
    }
    let schema = Schema::from_headers(&headers);
    debug!("Schema for {city}: {schema:?}");

    let mut trips = Vec::new();
    for (index, result) in reader.deserialize::<TripRaw>().enumerate() {
        let trip = result
            .map_err(anyhow::Error::from)
            .and_then(|raw| raw.into_trip(index))
            .with_context(|| {
                format!("Invalid trip in row {index} of {}", file_path.display())
            })?;
        trips.push(trip);
    }

    Ok(TripTable::new(city, schema, trips))
}

/// Load the trips for the selected city and apply the month and day filters
pub fn load_data(catalog: &Catalog, selection: &FilterSelection) -> Result<TripTable> {
    let file_path = catalog.data_file(selection.city);
    let mut table = read_trips(selection.city, file_path)?;
    info!(
        "Loaded {} trips for {} from {}",
        table.len(),
        selection.city,
        file_path.display()
    );

    table.apply_filters(selection.month, selection.day);
    info!("{} trips remain after filtering ({selection})", table.len());

    Ok(table)
}

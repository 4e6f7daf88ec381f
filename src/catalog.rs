//! The fixed set of cities, months and days which the user can choose between.
use chrono::{Month, Weekday};
use indexmap::IndexMap;
use std::fmt;
use std::path::{Path, PathBuf};
use strum::{EnumIter, IntoEnumIterator};
use unicase::UniCase;

/// A city for which bikeshare data is available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum City {
    /// Chicago
    Chicago,
    /// New York City
    NewYorkCity,
    /// Washington
    Washington,
}

impl City {
    /// The canonical (lowercase) key for the city, e.g. "new york city"
    pub fn key(self) -> &'static str {
        match self {
            Self::Chicago => "chicago",
            Self::NewYorkCity => "new york city",
            Self::Washington => "washington",
        }
    }

    /// The city's name in title case, for use in messages
    pub fn title(self) -> &'static str {
        match self {
            Self::Chicago => "Chicago",
            Self::NewYorkCity => "New York City",
            Self::Washington => "Washington",
        }
    }

    /// The name of the CSV file containing the city's trips
    fn file_name(self) -> &'static str {
        match self {
            Self::Chicago => "chicago.csv",
            Self::NewYorkCity => "new_york_city.csv",
            Self::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Get the full English name for a day of the week (e.g. "Monday")
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Immutable configuration describing what can be explored.
///
/// This is constructed once at start up and handed to the filter collector and dataset loader.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    /// Path to the CSV file for each city
    cities: IndexMap<City, PathBuf>,
    /// The months for which data is available, in calendar order
    months: Vec<Month>,
    /// The days of the week, starting on Sunday
    days: Vec<Weekday>,
}

impl Catalog {
    /// Create a catalog whose data files live in `data_dir`
    pub fn new(data_dir: &Path) -> Self {
        Self {
            cities: City::iter()
                .map(|city| (city, data_dir.join(city.file_name())))
                .collect(),
            months: vec![
                Month::January,
                Month::February,
                Month::March,
                Month::April,
                Month::May,
                Month::June,
            ],
            days: vec![
                Weekday::Sun,
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
                Weekday::Sat,
            ],
        }
    }

    /// The cities in the catalog
    pub fn cities(&self) -> impl Iterator<Item = City> + '_ {
        self.cities.keys().copied()
    }

    /// The months which can be used as a filter
    pub fn months(&self) -> &[Month] {
        &self.months
    }

    /// The days which can be used as a filter
    pub fn days(&self) -> &[Weekday] {
        &self.days
    }

    /// Path to the data file for `city`
    pub fn data_file(&self, city: City) -> &Path {
        // Every city is inserted in the constructor
        &self.cities[&city]
    }

    /// Look up a city by name, ignoring case and surrounding whitespace
    pub fn find_city(&self, name: &str) -> Option<City> {
        let name = UniCase::new(name.trim());
        self.cities().find(|city| UniCase::new(city.key()) == name)
    }

    /// Look up a month by its full name, ignoring case and surrounding whitespace
    pub fn find_month(&self, name: &str) -> Option<Month> {
        let name = UniCase::new(name.trim());
        self.months
            .iter()
            .copied()
            .find(|month| UniCase::new(month.name()) == name)
    }

    /// Look up a day by its full name, ignoring case and surrounding whitespace
    pub fn find_day(&self, name: &str) -> Option<Weekday> {
        let name = UniCase::new(name.trim());
        self.days
            .iter()
            .copied()
            .find(|day| UniCase::new(weekday_name(*day)) == name)
    }
}

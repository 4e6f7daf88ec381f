//! Interactive collection of the city, month and day to explore.
use crate::catalog::{Catalog, City, weekday_name};
use crate::console::Console;
use anyhow::Result;
use chrono::{Month, Weekday};
use itertools::Itertools;
use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;
use strum::EnumString;

/// Separator printed between sections of output
pub const SECTION_SEPARATOR: &str = "--------------------------------------------------";

/// Which of the optional filters the user wants to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
enum FilterChoice {
    #[strum(serialize = "month")]
    Month,
    #[strum(serialize = "day")]
    Day,
    #[strum(serialize = "both")]
    Both,
    #[strum(serialize = "all")]
    All,
}

impl FilterChoice {
    fn wants_month(self) -> bool {
        matches!(self, Self::Month | Self::Both)
    }

    fn wants_day(self) -> bool {
        matches!(self, Self::Day | Self::Both)
    }
}

/// The user's choice of data to explore
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    /// The city whose trips will be loaded
    pub city: City,
    /// Only include trips starting in this month (`None` for all months)
    pub month: Option<Month>,
    /// Only include trips starting on this day of the week (`None` for all days)
    pub day: Option<Weekday>,
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "city: {}, month: {}, day: {}",
            self.city,
            self.month.map_or("all", |month| month.name()),
            self.day.map_or("all", weekday_name)
        )
    }
}

/// Ask the user to specify a city, and optionally a month and day, to analyse.
///
/// Invalid answers are met with another prompt until the user provides a valid one.
pub fn get_filters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &Catalog,
) -> Result<FilterSelection> {
    writeln!(console.output(), "Hello! Let's explore some US bikeshare data!")?;

    let city_names = catalog.cities().map(City::title).join(", ");
    let city = console.ask_until(
        &format!("Enter a city: {city_names}:"),
        &format!("Please enter a valid city: {city_names}."),
        |s| catalog.find_city(s),
    )?;

    let choice = console.ask_until(
        "You can filter the data by month, day, both, or not at all (type 'all' for this option).",
        "Please enter month, day, both or all.",
        |s| FilterChoice::from_str(s.trim()).ok(),
    )?;

    let month = if choice.wants_month() {
        let month_names = catalog.months().iter().map(Month::name).join(", ");
        Some(console.ask_until(
            &format!("Enter a month: {month_names}:"),
            "Please enter one of the months that data is currently available for.",
            |s| catalog.find_month(s),
        )?)
    } else {
        None
    };

    let day = if choice.wants_day() {
        let day_names = catalog.days().iter().copied().map(weekday_name).join(", ");
        Some(console.ask_until(
            &format!("Enter a day: {day_names}:"),
            "Please enter a valid day.",
            |s| catalog.find_day(s),
        )?)
    } else {
        None
    };

    writeln!(console.output(), "{SECTION_SEPARATOR}")?;

    Ok(FilterSelection { city, month, day })
}

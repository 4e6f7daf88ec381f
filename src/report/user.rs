//! Statistics about bikeshare users.
use super::{NO_DATA, Report, write_value_counts};
use crate::catalog::City;
use crate::dataset::{OptionalColumn, TripTable};
use crate::stats::{mode, value_counts};
use std::fmt;

/// Statistics for a column which only some data files have
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnStats<T> {
    /// The data file has no such column
    Missing,
    /// Statistics computed from the column
    Present(T),
}

impl<T> ColumnStats<T> {
    /// Compute statistics with `f` only if `column` is in the table's schema
    fn probe<F>(table: &TripTable, column: OptionalColumn, f: F) -> Self
    where
        F: FnOnce() -> T,
    {
        if table.schema().has(column) {
            Self::Present(f())
        } else {
            Self::Missing
        }
    }
}

/// The earliest, most recent and most common birth years
#[derive(Debug, Clone, PartialEq)]
pub struct BirthYearStats {
    /// The earliest birth year
    pub earliest: u16,
    /// The most recent birth year
    pub latest: u16,
    /// The most common birth year
    pub most_common: u16,
}

impl BirthYearStats {
    /// Compute from a list of birth years, or `None` if there are none
    fn from_years(years: &[u16]) -> Option<Self> {
        Some(Self {
            earliest: *years.iter().min()?,
            latest: *years.iter().max()?,
            most_common: mode(years.iter().copied())?,
        })
    }
}

/// Counts of user types and, where available, gender and birth year statistics
#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    /// The city the trips were taken in
    pub city: City,
    /// The number of trips by each type of user
    pub user_types: Vec<(String, usize)>,
    /// The number of trips by riders of each gender
    pub genders: ColumnStats<Vec<(String, usize)>>,
    /// Birth year statistics (`None` inside if no trips have a birth year)
    pub birth_years: ColumnStats<Option<BirthYearStats>>,
}

impl Report for UserStats {
    const DESCRIPTION: &'static str = "user statistics";

    fn compute(table: &TripTable) -> Self {
        let trips = table.trips();
        Self {
            city: table.city(),
            user_types: value_counts(trips.iter().filter_map(|trip| trip.user_type.clone())),
            genders: ColumnStats::probe(table, OptionalColumn::Gender, || {
                value_counts(trips.iter().filter_map(|trip| trip.gender.clone()))
            }),
            birth_years: ColumnStats::probe(table, OptionalColumn::BirthYear, || {
                let years: Vec<_> = trips.iter().filter_map(|trip| trip.birth_year).collect();
                BirthYearStats::from_years(&years)
            }),
        }
    }
}

impl fmt::Display for UserStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of trips by user type:")?;
        write_value_counts(f, &self.user_types)?;

        match &self.genders {
            ColumnStats::Present(genders) => {
                writeln!(f, "\nNumber of trips by gender:")?;
                write_value_counts(f, genders)?;
            }
            ColumnStats::Missing => {
                writeln!(f, "\n{} does not have gender information", self.city.title())?;
            }
        }

        match &self.birth_years {
            ColumnStats::Present(Some(years)) => {
                writeln!(f, "\nEarliest birth year: {}", years.earliest)?;
                writeln!(f, "Most recent birth year: {}", years.latest)?;
                writeln!(f, "Most common birth year: {}", years.most_common)?;
            }
            ColumnStats::Present(None) => {
                writeln!(f, "\nBirth years: {NO_DATA}")?;
            }
            ColumnStats::Missing => {
                writeln!(
                    f,
                    "\n{} does not have birth year information",
                    self.city.title()
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{chicago_table, empty_table, washington_table};
    use rstest::rstest;

    #[rstest]
    fn test_user_stats(chicago_table: TripTable) {
        let stats = UserStats::compute(&chicago_table);
        assert_eq!(
            stats,
            UserStats {
                city: City::Chicago,
                user_types: vec![("Subscriber".into(), 7), ("Customer".into(), 2)],
                genders: ColumnStats::Present(vec![("Male".into(), 5), ("Female".into(), 3)]),
                birth_years: ColumnStats::Present(Some(BirthYearStats {
                    earliest: 1960,
                    latest: 2001,
                    most_common: 1992
                })),
            }
        );
        assert_eq!(
            stats.to_string(),
            "Number of trips by user type:
  Subscriber: 7
  Customer: 2

Number of trips by gender:
  Male: 5
  Female: 3

Earliest birth year: 1960
Most recent birth year: 2001
Most common birth year: 1992
"
        );
    }

    #[rstest]
    fn test_user_stats_washington(washington_table: TripTable) {
        let stats = UserStats::compute(&washington_table);
        assert_eq!(stats.genders, ColumnStats::Missing);
        assert_eq!(stats.birth_years, ColumnStats::Missing);

        let output = stats.to_string();
        assert!(output.contains("Washington does not have gender information"));
        assert!(output.contains("Washington does not have birth year information"));
    }

    #[rstest]
    fn test_user_stats_empty(empty_table: TripTable) {
        let stats = UserStats::compute(&empty_table);
        assert!(stats.user_types.is_empty());
        assert_eq!(stats.genders, ColumnStats::Present(Vec::new()));
        assert_eq!(stats.birth_years, ColumnStats::Present(None));
        assert_eq!(
            stats.to_string(),
            "Number of trips by user type:
  no data

Number of trips by gender:
  no data

Birth years: no data
"
        );
    }

    #[test]
    fn test_birth_year_stats_from_years() {
        assert_eq!(BirthYearStats::from_years(&[]), None);
        assert_eq!(
            BirthYearStats::from_years(&[1990, 1980, 1990, 2000]),
            Some(BirthYearStats {
                earliest: 1980,
                latest: 2000,
                most_common: 1990
            })
        );
    }
}

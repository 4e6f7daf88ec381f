//! Integration tests for exploring the sample data in `tests/data`.
use bikeshare::catalog::Catalog;
use bikeshare::cli::{ExploreOpts, handle_explore_command};
use bikeshare::console::Console;
use bikeshare::log::is_logger_initialised;
use bikeshare::session::{SessionOptions, run_session};
use bikeshare::settings::Settings;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Get the path to the sample data files.
fn get_data_dir() -> PathBuf {
    PathBuf::from("tests/data")
}

/// Run a whole session with the given input, returning everything written to the console
fn run_scripted_session(data_dir: &Path, input: &str) -> String {
    let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let options = SessionOptions { page_size: 5 };
    run_session(&mut console, &Catalog::new(data_dir), &options).unwrap();
    String::from_utf8(console.into_output()).unwrap()
}

/// An integration test for the `explore` command.
///
/// We also check that the logger is initialised after it is run.
#[test]
fn test_handle_explore_command() {
    unsafe { std::env::set_var("BIKESHARE_LOG_LEVEL", "off") };

    assert!(!is_logger_initialised());

    let opts = ExploreOpts {
        data_dir: Some(get_data_dir()),
        page_size: Some(3),
    };
    let input = b"Chicago\nall\nyes\nno\nno\n".to_vec();
    let mut console = Console::new(Cursor::new(input), Vec::new());
    handle_explore_command(&mut console, &opts, Some(Settings::default())).unwrap();

    assert!(is_logger_initialised());

    // The page size from the command line is used
    let output = String::from_utf8(console.into_output()).unwrap();
    assert!(output.contains("next 3 rows of raw data"));
    assert!(output.contains("Row 2\n"));
    assert!(!output.contains("Row 3\n"));
}

#[test]
fn test_explore_chicago() {
    let output = run_scripted_session(&get_data_dir(), "chicago\nall\nno\nno\n");
    assert!(output.contains("Most common month: March"));
    assert!(output.contains("Most common day of week: Monday"));
    assert!(output.contains("Most common start hour: 8"));
    assert!(output.contains("Most common start station: Streeter Dr & Grand Ave"));
    assert!(output.contains("Most common end station: Lake Shore Dr & Monroe St"));
    assert!(output.contains("Total travel time: 5996 seconds"));
    assert!(output.contains("Mean travel time: 599.6 seconds"));
    assert!(output.contains("Most common birth year: 1992"));
}

#[test]
fn test_explore_new_york_city_ties() {
    // Months and hours are all tied, so the first trip's values win
    let output = run_scripted_session(&get_data_dir(), "NEW YORK CITY\nall\nno\nno\n");
    assert!(output.contains("Most common month: June"));
    assert!(output.contains("Most common day of week: Wednesday"));
    assert!(output.contains("Most common start hour: 14"));
    assert!(output.contains("Most frequent trip: 1 Pl & Clinton St to Henry St & Degraw St"));
    assert!(output.contains("  Male: 5\n  Female: 1\n"));
}

#[test]
fn test_explore_washington() {
    let output = run_scripted_session(&get_data_dir(), "washington\nday\nsunday\nyes\nno\n");
    assert!(output.contains("Number of trips: 1"));
    assert!(output.contains("Most common day of week: Sunday"));
    assert!(output.contains("Washington does not have gender information"));
    assert!(output.contains("Washington does not have birth year information"));
    assert!(output.contains("Row 3\n"));
}

#[test]
fn test_explore_missing_data_dir() {
    let mut console = Console::new(Cursor::new(b"chicago\nall\n".to_vec()), Vec::new());
    let options = SessionOptions { page_size: 5 };
    let catalog = Catalog::new(Path::new("tests/no_such_dir"));
    assert!(run_session(&mut console, &catalog, &options).is_err());
}

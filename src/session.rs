//! The interactive exploration loop.
use crate::catalog::Catalog;
use crate::console::Console;
use crate::dataset::load_data;
use crate::filter::get_filters;
use crate::pager::page_raw_data;
use crate::report::run_all_reports;
use anyhow::{Context, Result};
use log::info;
use std::io::{BufRead, Write};

/// Whether the user wants to keep exploring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Active,
    Terminated,
}

/// Options which stay the same for every iteration of the session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOptions {
    /// The number of raw data rows shown at a time
    pub page_size: usize,
}

/// Run one full pass: choose filters, load data, show statistics and optionally raw data
fn run_iteration<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &Catalog,
    options: &SessionOptions,
) -> Result<()> {
    let selection = get_filters(console, catalog)?;
    info!("Exploring {selection}");

    let table = load_data(catalog, &selection)
        .with_context(|| format!("Failed to load data for {}", selection.city))?;
    run_all_reports(&table, console.output())?;
    page_raw_data(console, &table, options.page_size)?;

    Ok(())
}

/// Keep exploring data until the user chooses not to restart.
///
/// Each iteration starts afresh; nothing is carried over from the previous one.
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &Catalog,
    options: &SessionOptions,
) -> Result<()> {
    let mut state = SessionState::Active;
    let mut iterations = 0u32;
    while state == SessionState::Active {
        run_iteration(console, catalog, options)?;
        iterations += 1;

        if !console.confirm("\nWould you like to restart? Enter yes or no.")? {
            state = SessionState::Terminated;
        }
    }

    info!("Session finished after {iterations} iteration(s)");
    Ok(())
}

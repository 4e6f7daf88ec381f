//! Common functionality for bikeshare, a tool for exploring bikeshare trip data.
#![warn(missing_docs)]
use std::path::PathBuf;

pub mod catalog;
pub mod cli;
pub mod console;
pub mod dataset;
pub mod filter;
pub mod log;
pub mod pager;
pub mod report;
pub mod session;
pub mod settings;
pub mod stats;

#[cfg(test)]
mod fixture;

/// Get the directory in which bikeshare's configuration files are stored
pub fn get_bikeshare_config_dir() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_default();
    path.push("bikeshare");

    path
}

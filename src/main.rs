//! Provides the main entry point to the program.
use ::log::error;
use bikeshare::cli::run_cli;
use bikeshare::log::are_errors_logged;
use human_panic::setup_panic;
use std::process::ExitCode;

fn main() -> ExitCode {
    setup_panic!();

    if let Err(err) = run_cli() {
        if are_errors_logged() {
            error!("{err:?}");
        } else {
            eprintln!("Error: {err:?}");
        }

        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

//! The command line interface for the program.
use crate::catalog::Catalog;
use crate::console::Console;
use crate::log;
use crate::session::{SessionOptions, run_session};
use crate::settings::Settings;
use ::log::info;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub mod settings;
use settings::SettingsSubcommands;

/// The command line interface for the program.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// The available commands.
    #[command(subcommand)]
    command: Option<Commands>,
    /// Flag to provide the CLI docs as markdown
    #[arg(long, hide = true)]
    markdown_help: bool,
}

/// Options for the explore command
#[derive(Args, Default)]
pub struct ExploreOpts {
    /// Directory containing the city data files
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,
    /// Number of rows of raw data to show at a time
    #[arg(long)]
    pub page_size: Option<usize>,
}

/// The available commands.
#[derive(Subcommand)]
enum Commands {
    /// Interactively explore bikeshare data (the default).
    Explore {
        /// Other explore options
        #[command(flatten)]
        opts: ExploreOpts,
    },
    /// Manage settings file.
    Settings {
        /// The subcommands for managing the settings file.
        #[command(subcommand)]
        subcommand: SettingsSubcommands,
    },
}

impl Commands {
    /// Execute the supplied CLI command
    fn execute(self) -> Result<()> {
        match self {
            Self::Explore { opts } => handle_explore_command(&mut Console::stdio(), &opts, None),
            Self::Settings { subcommand } => subcommand.execute(),
        }
    }
}

/// Parse CLI arguments and start the program
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // Invoked as: `$ bikeshare --markdown-help`
    if cli.markdown_help {
        clap_markdown::print_help_markdown::<Cli>();
        return Ok(());
    }

    let command = cli.command.unwrap_or(Commands::Explore {
        opts: ExploreOpts::default(),
    });

    command.execute()
}

/// Handle the `explore` command.
pub fn handle_explore_command<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    opts: &ExploreOpts,
    settings: Option<Settings>,
) -> Result<()> {
    // Load program settings, if not provided
    let mut settings = if let Some(settings) = settings {
        settings
    } else {
        Settings::load().context("Failed to load settings.")?
    };

    // These settings can be overridden by command-line arguments
    if let Some(data_dir) = &opts.data_dir {
        settings.data_dir.clone_from(data_dir);
    }
    if let Some(page_size) = opts.page_size {
        settings.page_size = page_size;
    }
    settings.validate().context("Invalid settings.")?;

    // Initialise program logger
    log::init(Some(&settings.log_level)).context("Failed to initialise logging.")?;

    let catalog = Catalog::new(&settings.data_dir);
    info!("Reading data files from {}", settings.data_dir.display());

    let options = SessionOptions {
        page_size: settings.page_size,
    };
    run_session(console, &catalog, &options)
}

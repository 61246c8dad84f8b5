//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use puzzlebox::output::OutputMode;

/// puzzlebox - Binary Diagnostic and Worksheet puzzle solvers
#[derive(Parser, Debug)]
#[command(
    name = "puzzlebox",
    version,
    about = "Binary Diagnostic and Worksheet puzzle solvers",
    long_about = "Solve two puzzles from their text input.\n\n\
                  The binary diagnostic reads rows of bits by column majority.\n\
                  The worksheet totals problems written across rows and down columns."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Power consumption and life support rating of a diagnostic report
    Diagnostic {
        /// Report file, or '-' for stdin (defaults to the cached 2021-03 input)
        file: Option<PathBuf>,

        /// Fail when a column has as many 0s as 1s
        #[arg(long)]
        reject_ties: bool,
    },

    /// Row-wise and column-wise totals of a worksheet
    Worksheet {
        /// Worksheet file, or '-' for stdin (defaults to the cached 2025-06 input)
        file: Option<PathBuf>,
    },

    /// Manage cached puzzle inputs
    Input {
        #[command(subcommand)]
        action: InputAction,
    },

    /// Inspect the configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum InputAction {
    /// Print where a puzzle's input is cached
    Path {
        /// Event year
        year: u16,
        /// Day of the event
        day: u8,
    },

    /// Print a cached puzzle input
    Show {
        /// Event year
        year: u16,
        /// Day of the event
        day: u8,
    },

    /// Store a puzzle input in the cache
    Save {
        /// Event year
        year: u16,
        /// Day of the event
        day: u8,
        /// File to store, or '-' for stdin
        #[arg(default_value = "-")]
        file: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Print the config file path
    Path,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Diagnostic { file, reject_ties }) => {
            commands::diagnostic(file.as_deref(), reject_ties, output_mode)
        },
        Some(Command::Worksheet { file }) => commands::worksheet(file.as_deref(), output_mode),
        Some(Command::Input { action }) => commands::input(action, output_mode),
        Some(Command::Config { action }) => commands::config(&action, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("puzzlebox v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("puzzlebox v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'puzzlebox --help' for usage");
                println!("Run 'puzzlebox diagnostic <FILE>' to solve a report");
            }
            Ok(())
        },
    }
}

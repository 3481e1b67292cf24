//! CLI argument parsing for pathkit
//!
//! Supports global flags: --format, --quiet, --verbose, --log-level,
//! --log-json, --config

pub mod args;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{Algorithm, LevelsArgs, MixArgs, PathArgs};
pub use output::OutputFormat;

/// Pathkit - graph search and ring mixing for puzzle inputs
#[derive(Parser, Debug)]
#[command(name = "pathkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log search progress at debug level
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `trace`, `pathkit_core::search=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Grid legend configuration file (TOML)
    #[arg(long, global = true, env = "PATHKIT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find a path from the start cell to the goal cell of a grid
    Path(PathArgs),

    /// Count the cells first reached at each BFS level of a grid
    Levels(LevelsArgs),

    /// Mix a list of integers on a circular list
    Mix(MixArgs),
}

//! Command-line interface definitions.
//!
//! Defines the CLI structure for the hoopedge application using `clap`.
//! Every subcommand reads the same optional TOML configuration; without
//! one the built-in defaults apply.

pub mod check;
pub mod normalize;
pub mod output;
pub mod picks;
pub mod strategies;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::Config;
use crate::error::Result;

/// Model-vs-market spread edges and monthly strategy picks
#[derive(Parser, Debug)]
#[command(name = "hoopedge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Override log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the hoopedge CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Match a slate against market lines and report strategy picks
    Picks(PicksArgs),

    /// List the strategy rules for each month
    Strategies(StrategiesArgs),

    /// Show the canonical form of team names
    Normalize(NormalizeArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `hoopedge check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file syntax and semantics.
    Config(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file [default: hoopedge.toml if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Output format for `picks`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Terminal table
    #[default]
    Table,
    /// Comma-separated values with a header row
    Csv,
    /// The full report as JSON
    Json,
}

/// Arguments for the `picks` subcommand.
#[derive(Parser, Debug)]
pub struct PicksArgs {
    /// Path to configuration file [default: hoopedge.toml if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Slate date (YYYYMMDD or YYYY-MM-DD) [default: today, UTC]
    #[arg(long)]
    pub date: Option<String>,

    /// Rule month to apply (1-12) [default: the slate date's month]
    #[arg(long)]
    pub month: Option<u32>,

    /// JSON file of model predictions
    #[arg(long)]
    pub predictions: PathBuf,

    /// Saved odds feed response (spreads market)
    #[arg(long)]
    pub odds: PathBuf,

    /// JSON snapshot mapping team name to conference tier
    #[arg(long)]
    pub teams: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Table)]
    pub format: ReportFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `strategies` subcommand.
#[derive(Parser, Debug)]
pub struct StrategiesArgs {
    /// Path to configuration file [default: hoopedge.toml if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Only show this month (1-12)
    #[arg(long)]
    pub month: Option<u32>,
}

/// Arguments for the `normalize` subcommand.
#[derive(Parser, Debug)]
pub struct NormalizeArgs {
    /// Path to configuration file [default: hoopedge.toml if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Team names to normalize
    #[arg(required = true)]
    pub names: Vec<String>,
}

impl Commands {
    /// Config file path given to the subcommand, if any.
    pub fn config_path(&self) -> Option<&Path> {
        match self {
            Self::Picks(args) => args.config.as_deref(),
            Self::Strategies(args) => args.config.as_deref(),
            Self::Normalize(args) => args.config.as_deref(),
            Self::Check(CheckCommand::Config(args)) => args.config.as_deref(),
        }
    }
}

impl Cli {
    /// Load configuration for the chosen subcommand and apply the global
    /// logging overrides.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::discover(self.command.config_path())?;
        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }
        if self.json_logs {
            config.logging.format = "json".into();
        }
        Ok(config)
    }
}

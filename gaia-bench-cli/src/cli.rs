//! Command-line argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::config::ConfigCommands;
use crate::commands::report::ReportArgs;
use crate::commands::run::RunArgs;
use crate::output::OutputFormat;

/// Evaluate language models on GAIA benchmark problems
#[derive(Debug, Parser)]
#[command(name = "gaia-bench", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ./gaia-bench.toml when present)
    #[arg(short, long, global = true, env = "GAIA_BENCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Evaluate models on a slice of the dataset and print the report tables
    Run(RunArgs),

    /// Re-render the report tables from a saved results file
    Report(ReportArgs),

    /// Inspect or create the configuration file
    Config(ConfigCommands),
}

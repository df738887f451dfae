//! `config` commands

use anyhow::{bail, Context as _, Result};
use clap::{Args, Subcommand};
use std::fs;
use std::path::PathBuf;

use crate::config::BenchConfig;
use crate::context::Context;

/// Configuration commands
#[derive(Debug, Args)]
pub struct ConfigCommands {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Print the effective configuration as TOML (API key masked)
    Show,

    /// Write a configuration file populated with the defaults
    Init {
        /// Destination file
        #[arg(default_value = "gaia-bench.toml")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

pub async fn execute(ctx: &Context, cmd: ConfigCommands) -> Result<()> {
    match cmd.command {
        ConfigSubcommand::Show => show(ctx),
        ConfigSubcommand::Init { path, force } => init(ctx, path, force),
    }
}

fn show(ctx: &Context) -> Result<()> {
    print!("{}", ctx.config.redacted().to_toml()?);
    Ok(())
}

fn init(ctx: &Context, path: PathBuf, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists; pass --force to overwrite", path.display());
    }

    let content = BenchConfig::default().to_toml()?;
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    ctx.output
        .success(&format!("Wrote default configuration to {}", path.display()));
    Ok(())
}

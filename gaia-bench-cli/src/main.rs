//! `gaia-bench`: evaluate language models on GAIA benchmark problems

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod context;
mod output;

use cli::{Cli, Commands};
use context::Context;

#[tokio::main]
async fn main() -> Result<()> {
    // a missing .env is fine; real environment variables take precedence
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.log_json);

    let ctx = Context::new(&cli)?;

    let result = match cli.command {
        Commands::Run(args) => commands::run::execute(&ctx, args).await,
        Commands::Report(args) => commands::report::execute(&ctx, args).await,
        Commands::Config(cmd) => commands::config::execute(&ctx, cmd).await,
    };

    if let Err(e) = &result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(verbose: bool, json: bool) {
    let default_filter = if verbose {
        "gaia_bench=debug"
    } else {
        "gaia_bench=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let registry = tracing_subscriber::registry().with(filter);

    // stdout carries tables and JSON; logs go to stderr
    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

//! CLI execution context

use anyhow::{Context as _, Result};
use gaia_bench_sdk::{HttpCompletionClient, SdkConfig};
use gaia_bench_workflow::GatedSolver;
use std::time::Duration;

use crate::cli::Cli;
use crate::config::BenchConfig;
use crate::output::OutputWriter;

/// Execution context for CLI commands
pub struct Context {
    /// Effective configuration
    pub config: BenchConfig,

    /// Output writer
    pub output: OutputWriter,

    /// Verbose mode
    pub verbose: bool,
}

impl Context {
    /// Create a new context from CLI arguments
    pub fn new(cli: &Cli) -> Result<Self> {
        let config = BenchConfig::load(cli.config.as_deref())?;

        Ok(Self {
            config,
            output: OutputWriter::new(cli.output, cli.no_color),
            verbose: cli.verbose,
        })
    }

    /// Create the chat-completions client
    pub fn create_client(&self) -> Result<HttpCompletionClient> {
        let mut config = SdkConfig::new(&self.config.api_base_url)
            .with_timeout(Duration::from_secs(self.config.request_timeout_secs))
            .with_max_retries(self.config.max_retries);

        match &self.config.api_key {
            Some(api_key) => config = config.with_api_key(api_key),
            None => tracing::warn!("No API key configured; requests are sent unauthenticated"),
        }

        if self.verbose {
            config = config.with_logging(true);
        }

        HttpCompletionClient::new(config).context("Failed to create completion client")
    }

    /// Create the provider-gated solver
    pub fn create_solver(&self) -> Result<GatedSolver<HttpCompletionClient>> {
        let solver = GatedSolver::new(self.create_client()?, &self.config.provider_limits)
            .context("Invalid provider limits")?;

        Ok(match &self.config.system_prompt {
            Some(prompt) => solver.with_system_prompt(prompt),
            None => solver,
        })
    }
}

//! Benchmark configuration
//!
//! Values are layered: built-in defaults, then `gaia-bench.toml` (or the
//! file given with `--config`), then `GAIA_BENCH__*` environment variables.

use anyhow::{Context as _, Result};
use config::{Config, Environment, File};
use gaia_bench_core::{ModelId, ProviderLimits};
use gaia_bench_sdk::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory (any supported extension)
pub const DEFAULT_CONFIG_NAME: &str = "gaia-bench";

/// Environment variable prefix; nested keys use `__`
pub const ENV_PREFIX: &str = "GAIA_BENCH";

/// Fallback source for the API key
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Benchmark settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BenchConfig {
    /// Models to evaluate
    pub models: Vec<ModelId>,

    /// GAIA dataset file (JSON array or JSON lines)
    pub dataset_path: Option<PathBuf>,

    /// Index of the first problem to evaluate
    pub start: usize,

    /// Number of problems to evaluate
    pub limit: usize,

    /// Base URL of the chat-completions endpoint
    pub api_base_url: String,

    /// API key sent as a bearer token
    pub api_key: Option<String>,

    /// Retries per request after the first attempt
    pub max_retries: u32,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,

    /// Upper bound on pairs awaiting the solver at once
    pub max_concurrency: Option<usize>,

    /// Replaces the built-in GAIA system prompt
    pub system_prompt: Option<String>,

    /// In-flight request limits per provider
    pub provider_limits: ProviderLimits,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            models: vec![
                ModelId::from("gpt-5"),
                ModelId::from("gpt-5-mini"),
                ModelId::from("anthropic/claude-sonnet-4-5"),
                ModelId::from("anthropic/claude-haiku-4-5"),
            ],
            dataset_path: None,
            start: 0,
            limit: 20,
            api_base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            max_retries: 2,
            request_timeout_secs: 120,
            max_concurrency: None,
            system_prompt: None,
            provider_limits: ProviderLimits::default(),
        }
    }
}

impl BenchConfig {
    /// Load configuration, reading `path` if given and `./gaia-bench.*` otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let settings = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("models"),
            )
            .build()
            .context("Failed to load configuration")?;

        let mut config: BenchConfig = settings
            .try_deserialize()
            .context("Failed to parse configuration")?;

        if config.api_key.is_none() {
            config.api_key = std::env::var(OPENAI_API_KEY_VAR)
                .ok()
                .filter(|key| !key.is_empty());
        }

        config.provider_limits.validate()?;

        Ok(config)
    }

    /// Copy with secrets masked, for display
    pub fn redacted(&self) -> Self {
        Self {
            api_key: self.api_key.as_ref().map(|_| "********".to_string()),
            ..self.clone()
        }
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

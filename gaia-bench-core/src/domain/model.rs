use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::ModelId;
use crate::error::{CoreError, Result};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenAI,
    Anthropic,
    Google,
    Local,
}

/// Model-id prefixes that route to a non-default provider. Anything
/// unmatched is served by OpenAI.
const PROVIDER_PREFIXES: &[(&str, Provider)] = &[
    ("anthropic/", Provider::Anthropic),
    ("gemini/", Provider::Google),
    ("ollama/", Provider::Local),
];

impl Provider {
    pub const ALL: [Provider; 4] = [
        Provider::OpenAI,
        Provider::Anthropic,
        Provider::Google,
        Provider::Local,
    ];

    pub fn classify(model: &ModelId) -> Self {
        PROVIDER_PREFIXES
            .iter()
            .find(|(prefix, _)| model.as_str().starts_with(prefix))
            .map(|(_, provider)| *provider)
            .unwrap_or(Provider::OpenAI)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAI => "openai",
            Provider::Anthropic => "anthropic",
            Provider::Google => "google",
            Provider::Local => "local",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Largest accepted per-provider limit; the permit ceiling of a tokio semaphore.
pub const MAX_PROVIDER_LIMIT: usize = usize::MAX >> 3;

/// Maximum number of in-flight completion requests per provider.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProviderLimits {
    pub openai: usize,
    pub anthropic: usize,
    pub google: usize,
    pub local: usize,
}

impl Default for ProviderLimits {
    fn default() -> Self {
        Self {
            openai: 30,
            anthropic: 10,
            google: 10,
            local: 4,
        }
    }
}

impl ProviderLimits {
    pub fn limit(&self, provider: Provider) -> usize {
        match provider {
            Provider::OpenAI => self.openai,
            Provider::Anthropic => self.anthropic,
            Provider::Google => self.google,
            Provider::Local => self.local,
        }
    }

    pub fn with_limit(mut self, provider: Provider, limit: usize) -> Self {
        match provider {
            Provider::OpenAI => self.openai = limit,
            Provider::Anthropic => self.anthropic = limit,
            Provider::Google => self.google = limit,
            Provider::Local => self.local = limit,
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        for provider in Provider::ALL {
            let limit = self.limit(provider);
            if limit == 0 {
                return Err(CoreError::Validation(format!(
                    "concurrency limit for provider {} must be at least 1",
                    provider
                )));
            }
            if limit > MAX_PROVIDER_LIMIT {
                return Err(CoreError::Validation(format!(
                    "concurrency limit for provider {} must not exceed {}",
                    provider, MAX_PROVIDER_LIMIT
                )));
            }
        }
        Ok(())
    }
}

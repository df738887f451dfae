//! HTTP client implementation
//!
//! This module provides the chat-completions client with retry logic,
//! rate limit handling, and request/response logging.

use crate::config::SdkConfig;
use crate::error::{SdkError, SdkResult};
use crate::types::{ChatCompletionRequest, ChatCompletionResponse};
use async_trait::async_trait;
use gaia_bench_core::{Completion, CompletionClient, CompletionRequest, SolveError};
use reqwest::{header, Client, Response, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

const CHAT_COMPLETIONS_PATH: &str = "chat/completions";

/// Client for an OpenAI-compatible chat-completions endpoint
#[derive(Debug, Clone)]
pub struct HttpCompletionClient {
    client: Client,
    config: Arc<SdkConfig>,
}

impl HttpCompletionClient {
    /// Create a new client with the given configuration
    pub fn new(config: SdkConfig) -> SdkResult<Self> {
        config.validate()?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        if let Some(api_key) = &config.api_key {
            let mut value = header::HeaderValue::try_from(format!("Bearer {}", api_key))
                .map_err(|e| SdkError::ConfigurationError(format!("Invalid API key: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .gzip(true)
            .brotli(true)
            .build()
            .map_err(SdkError::NetworkError)?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    /// Build the full URL for an endpoint
    pub fn url(&self, path: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Request a chat completion and return its first choice
    pub async fn chat_completion(&self, request: &CompletionRequest) -> SdkResult<Completion> {
        let body = serde_json::to_string(&ChatCompletionRequest::from(request))?;

        let response = self.execute_with_retry(&body).await?;
        let status = response.status();
        let text = response.text().await.map_err(SdkError::NetworkError)?;

        if self.config.enable_logging {
            debug!("Response body: {}", text);
        }

        if !status.is_success() {
            return Err(SdkError::from_response(status.as_u16(), &text));
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&text)?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(Completion::from)
            .ok_or_else(|| SdkError::InvalidResponse("response contained no choices".to_string()))
    }

    /// Execute a request with retry logic
    async fn execute_with_retry(&self, body: &str) -> SdkResult<Response> {
        let url = self.url(CHAT_COMPLETIONS_PATH);

        let mut attempts = 0;
        let mut last_error: Option<SdkError> = None;
        let mut backoff = self.config.retry_initial_backoff;

        while attempts <= self.config.max_retries {
            if attempts > 0 {
                info!(
                    "Retrying request (attempt {}/{}), waiting {:?}",
                    attempts, self.config.max_retries, backoff
                );
                tokio::time::sleep(backoff).await;
                backoff = std::cmp::min(backoff * 2, self.config.retry_max_backoff);
            }

            if self.config.enable_logging {
                debug!("Request: POST {}", url);
                debug!("Request body: {}", body);
            }

            let request = self.client.post(&url).body(body.to_string());

            match request.send().await {
                Ok(response) => {
                    let status = response.status();

                    if status == StatusCode::TOO_MANY_REQUESTS {
                        let retry_after = response
                            .headers()
                            .get(header::RETRY_AFTER)
                            .and_then(|v| v.to_str().ok())
                            .and_then(|v| v.parse::<u64>().ok())
                            .unwrap_or(60);

                        warn!("Rate limited, retry after {} seconds", retry_after);

                        if attempts < self.config.max_retries {
                            last_error = Some(SdkError::RateLimited { retry_after });
                            backoff = Duration::from_secs(retry_after);
                            attempts += 1;
                            continue;
                        }

                        return Err(SdkError::RateLimited { retry_after });
                    }

                    if status.is_server_error() && attempts < self.config.max_retries {
                        warn!("Server error {}, will retry", status);
                        last_error = Some(SdkError::ServerError(format!("Status: {}", status)));
                        attempts += 1;
                        continue;
                    }

                    return Ok(response);
                }
                Err(e) => {
                    error!("Request failed: {}", e);

                    if e.is_timeout() {
                        last_error = Some(SdkError::Timeout(self.config.timeout.as_secs()));
                    } else if e.is_connect() || e.is_request() {
                        last_error = Some(SdkError::NetworkError(e));
                    } else {
                        return Err(SdkError::NetworkError(e));
                    }

                    attempts += 1;
                }
            }
        }

        Err(last_error.unwrap_or_else(|| SdkError::Unknown("Request failed".to_string())))
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, SolveError> {
        Ok(self.chat_completion(&request).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = HttpCompletionClient::new(SdkConfig::new("http://localhost:8080/v1/")).unwrap();
        assert_eq!(
            client.url(CHAT_COMPLETIONS_PATH),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(HttpCompletionClient::new(SdkConfig::new("")).is_err());
    }
}

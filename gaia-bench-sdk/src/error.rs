//! SDK error types and handling
//!
//! Errors raised while talking to a chat-completions endpoint, with a
//! conversion into the harness-level [`SolveError`].

use gaia_bench_core::SolveError;
use thiserror::Error;

/// The main error type for the SDK
#[derive(Error, Debug)]
pub enum SdkError {
    /// API returned an error response
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message extracted from the body
        message: String,
        /// Provider-specific error code, if any
        error_code: Option<String>,
    },

    /// Network or connection error
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Request timed out
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// Rate limit exceeded
    #[error("Rate limit exceeded. Retry after {retry_after} seconds")]
    RateLimited {
        /// Seconds the server asked us to wait
        retry_after: u64,
    },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// URL parsing error
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// The response parsed but carried no usable choice
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Server error
    #[error("Server error: {0}")]
    ServerError(String),

    /// Unknown error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Result type alias for SDK operations
pub type SdkResult<T> = Result<T, SdkError>;

/// Error body returned by OpenAI-compatible endpoints
#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorResponse {
    /// Error details
    pub error: ApiErrorDetail,
}

/// Inner error object
#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorDetail {
    /// Human-readable message
    pub message: String,
    /// Machine-readable code
    #[serde(default)]
    pub code: Option<String>,
    /// Error category
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl SdkError {
    /// Create an API error from a response
    pub fn from_response(status: u16, body: &str) -> Self {
        let (message, error_code) = match serde_json::from_str::<ApiErrorResponse>(body) {
            Ok(response) => (
                response.error.message,
                response.error.code.or(response.error.kind),
            ),
            Err(_) => (body.to_string(), None),
        };

        match status {
            401 | 403 => SdkError::AuthenticationError(message),
            429 => SdkError::RateLimited { retry_after: 60 },
            500..=599 => SdkError::ServerError(message),
            _ => SdkError::ApiError {
                status,
                message,
                error_code,
            },
        }
    }

    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            SdkError::NetworkError(_)
                | SdkError::Timeout(_)
                | SdkError::RateLimited { .. }
                | SdkError::ServerError(_)
        )
    }

    /// Get the HTTP status code if available
    pub fn status_code(&self) -> Option<u16> {
        match self {
            SdkError::ApiError { status, .. } => Some(*status),
            SdkError::RateLimited { .. } => Some(429),
            SdkError::AuthenticationError(_) => Some(401),
            SdkError::ServerError(_) => Some(500),
            _ => None,
        }
    }
}

impl From<SdkError> for SolveError {
    fn from(err: SdkError) -> Self {
        match err {
            SdkError::RateLimited { retry_after } => SolveError::RateLimited { retry_after },
            SdkError::Timeout(secs) => SolveError::Timeout(secs),
            SdkError::NetworkError(e) if e.is_timeout() => SolveError::Timeout(0),
            SdkError::NetworkError(e) => SolveError::Transport(e.to_string()),
            SdkError::ServerError(message) => SolveError::Api {
                status: 500,
                message,
            },
            SdkError::ApiError {
                status, message, ..
            } => SolveError::Api { status, message },
            SdkError::AuthenticationError(message) => SolveError::Api {
                status: 401,
                message,
            },
            SdkError::SerializationError(e) => SolveError::MalformedResponse(e.to_string()),
            SdkError::InvalidResponse(message) => SolveError::MalformedResponse(message),
            other => SolveError::Other(other.to_string()),
        }
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        CoreError::Io(err.to_string())
    }
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(err: validator::ValidationErrors) -> Self {
        CoreError::Validation(err.to_string())
    }
}

/// Failure of a single solver invocation.
///
/// These never abort an experiment; the runner records them on the
/// failing (problem, model) pair.
#[derive(Error, Debug)]
pub enum SolveError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Rate limited (retry after {retry_after}s)")]
    RateLimited { retry_after: u64 },

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("{0}")]
    Other(String),
}

impl SolveError {
    /// Whether retrying the same request may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            SolveError::Transport(_) | SolveError::RateLimited { .. } | SolveError::Timeout(_) => {
                true
            }
            SolveError::Api { status, .. } => *status >= 500,
            SolveError::MalformedResponse(_) | SolveError::Other(_) => false,
        }
    }
}

impl From<serde_json::Error> for SolveError {
    fn from(err: serde_json::Error) -> Self {
        SolveError::MalformedResponse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(SolveError::Transport("reset".to_string()).is_transient());
        assert!(SolveError::RateLimited { retry_after: 3 }.is_transient());
        assert!(SolveError::Api { status: 503, message: "busy".to_string() }.is_transient());
        assert!(!SolveError::Api { status: 400, message: "bad".to_string() }.is_transient());
        assert!(!SolveError::MalformedResponse("eof".to_string()).is_transient());
    }

    #[test]
    fn test_json_error_becomes_malformed_response() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let solve_err: SolveError = err.into();
        assert!(matches!(solve_err, SolveError::MalformedResponse(_)));
    }
}

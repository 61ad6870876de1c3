use thiserror::Error;
use tracing::warn;

/// Ways the one-time task fetch can fail.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Endpoint answered with status {0}")]
    Status(u16),

    #[error("Response body is not a task list: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Task source unavailable: {0}")]
    Unavailable(String),
}

impl LoadError {
    /// Short machine-friendly tag for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::Request(e) if e.is_timeout() => "timeout",
            LoadError::Request(e) if e.is_connect() => "connect",
            LoadError::Request(_) => "request",
            LoadError::Status(_) => "status",
            LoadError::Decode(_) => "decode",
            LoadError::Unavailable(_) => "unavailable",
        }
    }
}

pub fn log_load_failure(endpoint: &str, error: &LoadError) {
    warn!(
        endpoint = %endpoint,
        kind = error.kind(),
        error = %error,
        "Initial task load failed, continuing with an empty list"
    );
}

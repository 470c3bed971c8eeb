//! Upstream error types.

use thiserror::Error;

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// Errors that can occur while talking to the market-data provider.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    Client(String),

    /// The configured base URL cannot be used to build request URLs.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The request timed out.
    #[error("Request to {path} timed out")]
    Timeout { path: String },

    /// The request could not be sent or the connection failed.
    #[error("Request to {path} failed: {message}")]
    Request { path: String, message: String },

    /// The provider answered with a non-success status.
    #[error("Upstream returned {status} for {path}")]
    Status { path: String, status: u16 },

    /// The response body was not valid JSON.
    #[error("Malformed response from {path}: {message}")]
    Decode { path: String, message: String },
}

impl UpstreamError {
    /// Create a client construction error.
    pub fn client(msg: impl Into<String>) -> Self {
        Self::Client(msg.into())
    }

    /// Create an invalid base URL error.
    pub fn invalid_base_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBaseUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Classify a transport-level reqwest failure.
    pub fn from_reqwest(path: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                path: path.to_string(),
            }
        } else if err.is_connect() {
            Self::Request {
                path: path.to_string(),
                message: "Connection failed".to_string(),
            }
        } else {
            Self::Request {
                path: path.to_string(),
                message: err.to_string(),
            }
        }
    }

    /// HTTP status code, when the failure came from a non-success response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

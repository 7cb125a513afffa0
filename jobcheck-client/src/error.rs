//! Error types for the jobs client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the jobs endpoint
///
/// Only transport-level problems live here. Unexpected status codes are not
/// errors at this layer; the caller inspects the envelope and decides.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection refused, DNS failure, timeout, ...)
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The configured base URL cannot address a job
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Check if the server could not be reached at all
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::RequestFailed(e) if e.is_connect())
    }

    /// Check if the request timed out
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::RequestFailed(e) if e.is_timeout())
    }
}

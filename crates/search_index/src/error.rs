//! Search service error types

use thiserror::Error;

/// Errors that can occur talking to the search service
#[derive(Debug, Error)]
pub enum IndexError {
    /// Connection to the search service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the search service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The named index does not exist
    #[error("Index not found: {index}")]
    IndexNotFound {
        /// The index that was requested
        index: String,
    },

    /// Server answered with a non-success status
    #[error("Server error: status {status}: {body}")]
    ServerError { status: u16, body: String },

    /// Failed to parse a response from the search service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },
}

impl From<reqwest::Error> for IndexError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout { timeout_secs: 30 }
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}

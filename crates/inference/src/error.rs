//! Inference errors

use thiserror::Error;

/// Errors that can occur when talking to the inference server
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Failed to connect to the inference server
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the inference server failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Server answered with a non-success status
    #[error("Server error: status {status}: {body}")]
    ServerError { status: u16, body: String },

    /// Response body could not be parsed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout during inference
    #[error("Inference timeout after {0}ms")]
    Timeout(u64),
}

impl From<reqwest::Error> for InferenceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(60000)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}

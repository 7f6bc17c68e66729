//! Assistant error types

use thiserror::Error;

/// Errors that can occur while answering a question
#[derive(Debug, Error)]
pub enum AssistantError {
    /// The inference service call failed
    #[error("Inference failed: {0}")]
    Inference(#[from] inference::InferenceError),

    /// The search service call failed
    #[error("Index operation failed: {0}")]
    Index(#[from] search_index::IndexError),

    /// The model's query proposal was not valid JSON
    #[error("Could not parse a valid query from the model response: {raw}")]
    UnparsableQuery {
        /// The raw model output that failed to parse
        raw: String,
    },
}

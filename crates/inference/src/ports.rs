//! Port definitions for text generation
//!
//! Defines the trait that generation transports implement, plus the
//! request/response types shared by all of them.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::InferenceError;

/// A single text generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Prompt text sent to the model
    pub prompt: String,
    /// Model to use (overrides the configured default)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Whether to stream the response; always false for this workload,
    /// but carried on the wire as the API requires it
    #[serde(default)]
    pub stream: bool,
}

impl GenerationRequest {
    /// Create a request for the given prompt
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: None,
            stream: false,
        }
    }

    /// Set the model for this request
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Response from a generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// Generated text
    pub text: String,
    /// Model that produced the response
    pub model: String,
    /// Token usage, when the server reports it
    pub usage: Option<TokenUsage>,
}

/// Token usage statistics as reported by the server
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

/// Port for text generation transports
#[async_trait]
pub trait TextGenerationClient: Send + Sync {
    /// Generate a complete response for the request
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, InferenceError>;

    /// Check if the inference server is reachable
    async fn health_check(&self) -> Result<bool, InferenceError>;

    /// List models available on the server
    async fn list_models(&self) -> Result<Vec<String>, InferenceError>;

    /// The model used when a request does not name one
    fn default_model(&self) -> &str;
}

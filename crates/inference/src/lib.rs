#![forbid(unsafe_code)]
//! Text generation client for Ollama-compatible inference servers
//!
//! Talks to the `/api/generate` endpoint of any Ollama-compatible server.
//! The [`TextGenerationClient`] trait is the seam between callers and the
//! concrete HTTP transport, so alternative transports stay interchangeable.

pub mod config;
pub mod error;
pub mod ollama;
pub mod ports;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use ollama::OllamaClient;
pub use ports::{GenerationRequest, GenerationResponse, TextGenerationClient, TokenUsage};

//! Configuration for the inference client

use serde::{Deserialize, Serialize};

/// Configuration for an Ollama-compatible inference server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Base URL of the inference server
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Default model to use when a request does not name one
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// System prompt prefixed to every generation request
    #[serde(default)]
    pub system_prompt: Option<String>,
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "llama3.2".to_string()
}

const fn default_timeout_ms() -> u64 {
    60000 // 60 seconds
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_model: default_model(),
            timeout_ms: default_timeout_ms(),
            system_prompt: None,
        }
    }
}

impl InferenceConfig {
    /// Config pointing at a specific server and model
    pub fn new(base_url: impl Into<String>, default_model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            default_model: default_model.into(),
            ..Default::default()
        }
    }

    /// Set the system prompt
    #[must_use]
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }
}

//! Ollama `/api/generate` client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::config::InferenceConfig;
use crate::error::InferenceError;
use crate::ports::{GenerationRequest, GenerationResponse, TextGenerationClient, TokenUsage};

/// Client for Ollama-compatible servers
#[derive(Debug)]
pub struct OllamaClient {
    client: Client,
    config: InferenceConfig,
}

impl OllamaClient {
    /// Create a new client from configuration
    pub fn new(config: InferenceConfig) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| InferenceError::ConnectionFailed(e.to_string()))?;

        info!(
            base_url = %config.base_url,
            model = %config.default_model,
            "Initialized Ollama client"
        );

        Ok(Self { client, config })
    }

    /// Build the API URL for a given endpoint
    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/api/{}",
            self.config.base_url,
            endpoint.trim_start_matches('/')
        )
    }

    /// Get the model to use for a request
    fn resolve_model<'a>(&'a self, request: &'a GenerationRequest) -> &'a str {
        request
            .model
            .as_deref()
            .unwrap_or(&self.config.default_model)
    }

    /// Apply the configured system prompt, if any
    fn effective_prompt(&self, prompt: &str) -> String {
        match &self.config.system_prompt {
            Some(system) => format!("{system}\n\nQuestion: {prompt}\n\nAnswer:"),
            None => prompt.to_string(),
        }
    }
}

/// Wire format of `/api/generate` requests
#[derive(Debug, Serialize)]
struct GenerateBody {
    model: String,
    prompt: String,
    stream: bool,
}

/// Wire format of `/api/generate` responses
#[derive(Debug, Deserialize)]
struct GenerateReply {
    response: String,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    prompt_eval_count: Option<u32>,
    #[serde(default)]
    eval_count: Option<u32>,
}

/// Wire format of `/api/tags` responses
#[derive(Debug, Deserialize)]
struct TagsReply {
    models: Vec<TagEntry>,
}

#[derive(Debug, Deserialize)]
struct TagEntry {
    name: String,
}

#[async_trait]
impl TextGenerationClient for OllamaClient {
    #[instrument(skip(self, request), fields(model = %self.resolve_model(&request)))]
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, InferenceError> {
        let model = self.resolve_model(&request).to_string();

        let body = GenerateBody {
            model: model.clone(),
            prompt: self.effective_prompt(&request.prompt),
            stream: false,
        };

        debug!(prompt_len = body.prompt.len(), "Sending generate request");

        let response = self
            .client
            .post(self.api_url("generate"))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Generate request failed");
            return Err(InferenceError::ServerError {
                status: status.as_u16(),
                body,
            });
        }

        let reply: GenerateReply = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

        let usage = match (reply.prompt_eval_count, reply.eval_count) {
            (Some(prompt_tokens), Some(completion_tokens)) => Some(TokenUsage {
                prompt_tokens,
                completion_tokens,
            }),
            _ => None,
        };

        debug!(tokens = ?usage, "Generation completed");

        Ok(GenerationResponse {
            text: reply.response,
            model: reply.model.unwrap_or(model),
            usage,
        })
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> Result<bool, InferenceError> {
        let response = self
            .client
            .get(self.api_url("tags"))
            .timeout(Duration::from_secs(5))
            .send()
            .await;

        match response {
            Ok(resp) => Ok(resp.status().is_success()),
            Err(e) if e.is_timeout() => Ok(false),
            Err(e) if e.is_connect() => Ok(false),
            Err(e) => Err(InferenceError::RequestFailed(e.to_string())),
        }
    }

    #[instrument(skip(self))]
    async fn list_models(&self) -> Result<Vec<String>, InferenceError> {
        let response = self.client.get(self.api_url("tags")).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(InferenceError::ServerError {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let reply: TagsReply = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

        Ok(reply.models.into_iter().map(|m| m.name).collect())
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }
}

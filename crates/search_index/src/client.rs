//! HTTP client for the search service

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::config::SearchIndexConfig;
use crate::error::IndexError;
use crate::models::{IndexInfo, IndexSchema};

/// Read-only client for an Elasticsearch-compatible search service
#[derive(Debug)]
pub struct IndexClient {
    client: Client,
    config: SearchIndexConfig,
}

impl IndexClient {
    /// Create a new client from configuration
    pub fn new(config: SearchIndexConfig) -> Result<Self, IndexError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| IndexError::ConnectionFailed(e.to_string()))?;

        info!(base_url = %config.base_url, "Initialized search index client");

        Ok(Self { client, config })
    }

    /// Configured sample size for context building
    pub const fn sample_size(&self) -> usize {
        self.config.sample_size
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url, path.trim_start_matches('/'))
    }

    /// List all indices on the server
    #[instrument(skip(self))]
    pub async fn list_indices(&self) -> Result<Vec<IndexInfo>, IndexError> {
        let response = self
            .client
            .get(self.url("_cat/indices?format=json"))
            .send()
            .await?;

        let response = check_status(response, None).await?;

        let indices: Vec<IndexInfo> = response
            .json()
            .await
            .map_err(|e| IndexError::ParseError(e.to_string()))?;

        debug!(count = indices.len(), "Listed indices");
        Ok(indices)
    }

    /// Fetch the field-name-to-type mapping of an index
    #[instrument(skip(self))]
    pub async fn get_mapping(&self, index: &str) -> Result<IndexSchema, IndexError> {
        let response = self
            .client
            .get(self.url(&format!("{index}/_mapping")))
            .send()
            .await?;

        let response = check_status(response, Some(index)).await?;

        let body: Value = response
            .json()
            .await
            .map_err(|e| IndexError::ParseError(e.to_string()))?;

        IndexSchema::from_mapping_response(index, &body)
    }

    /// Fetch up to `n` sample documents via a match-all search
    #[instrument(skip(self))]
    pub async fn sample_documents(&self, index: &str, n: usize) -> Result<Vec<Value>, IndexError> {
        let body = serde_json::json!({
            "size": n,
            "query": {"match_all": {}}
        });

        let response = self.search(index, &body).await?;

        Ok(extract_sources(&response))
    }

    /// Execute an arbitrary query body against an index
    ///
    /// The body is an opaque passthrough in the service's native query
    /// language; no validation happens here beyond it being JSON already.
    #[instrument(skip(self, body))]
    pub async fn search(&self, index: &str, body: &Value) -> Result<Value, IndexError> {
        let response = self
            .client
            .post(self.url(&format!("{index}/_search")))
            .json(body)
            .send()
            .await?;

        let response = check_status(response, Some(index)).await?;

        let result: Value = response
            .json()
            .await
            .map_err(|e| IndexError::ParseError(e.to_string()))?;

        debug!(hits = extract_sources(&result).len(), "Search completed");
        Ok(result)
    }
}

/// Pull `_source` values out of a search response, in hit order
fn extract_sources(response: &Value) -> Vec<Value> {
    response
        .get("hits")
        .and_then(|v| v.get("hits"))
        .and_then(Value::as_array)
        .map(|hits| {
            hits.iter()
                .filter_map(|hit| hit.get("_source").cloned())
                .collect()
        })
        .unwrap_or_default()
}

async fn check_status(response: Response, index: Option<&str>) -> Result<Response, IndexError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::NOT_FOUND {
        if let Some(index) = index {
            return Err(IndexError::IndexNotFound {
                index: index.to_string(),
            });
        }
    }

    let body = response.text().await.unwrap_or_default();
    Err(IndexError::ServerError {
        status: status.as_u16(),
        body,
    })
}

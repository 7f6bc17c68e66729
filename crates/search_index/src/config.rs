//! Search service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the search service connection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchIndexConfig {
    /// Base URL of the search service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Number of sample documents fetched when building index context
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
}

fn default_base_url() -> String {
    "http://localhost:9200".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_sample_size() -> usize {
    3
}

impl Default for SearchIndexConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            sample_size: default_sample_size(),
        }
    }
}

impl SearchIndexConfig {
    /// Config pointing at a specific server
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        if self.sample_size == 0 {
            return Err("sample_size must be greater than 0".to_string());
        }
        Ok(())
    }
}

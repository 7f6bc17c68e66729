//! CLI settings
//!
//! Optional TOML file merged under command-line flags. Every section falls
//! back to crate defaults when absent.

use std::fs;
use std::path::Path;

use anyhow::Context;
use inference::InferenceConfig;
use search_index::SearchIndexConfig;
use serde::Deserialize;

/// Settings loaded from the optional config file
#[derive(Debug, Default, Deserialize)]
pub struct AppSettings {
    /// Inference server section
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Search service section
    #[serde(default)]
    pub search: SearchIndexConfig,

    /// Guidance text replacing the built-in default
    #[serde(default)]
    pub guidance: Option<String>,
}

impl AppSettings {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config file {}", path.display()))
    }

    /// Load from the given path, or fall back to defaults when none is given
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_when_no_file_given() {
        let settings = AppSettings::load_or_default(None).unwrap();
        assert_eq!(settings.inference.base_url, "http://localhost:11434");
        assert_eq!(settings.search.base_url, "http://localhost:9200");
        assert!(settings.guidance.is_none());
    }

    #[test]
    fn loads_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "guidance = \"Answer briefly.\"\n\n\
             [inference]\nbase_url = \"http://192.168.0.190:11434\"\ndefault_model = \"qwen2.5\"\n\n\
             [search]\nbase_url = \"http://192.168.0.40:9200\""
        )
        .unwrap();

        let settings = AppSettings::load(file.path()).unwrap();
        assert_eq!(settings.inference.base_url, "http://192.168.0.190:11434");
        assert_eq!(settings.inference.default_model, "qwen2.5");
        assert_eq!(settings.search.base_url, "http://192.168.0.40:9200");
        assert_eq!(settings.search.timeout_secs, 30);
        assert_eq!(settings.guidance.as_deref(), Some("Answer briefly."));
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = AppSettings::load(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [[[").unwrap();
        assert!(AppSettings::load(file.path()).is_err());
    }
}

//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use faircheck_engine::EngineConfig;
use faircheck_llm::SearchGrounding;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default remote search index name
pub const DEFAULT_INDEX_NAME: &str = "unfair";

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the corpus data files (laws.json, cases.json)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Completion service settings
    #[serde(default)]
    pub azure: AzureSettings,

    /// Optional remote search grounding settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchSettings>,

    /// Engine settings
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Azure OpenAI connection settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AzureSettings {
    /// Resource endpoint
    #[serde(default)]
    pub endpoint: String,

    /// API key
    #[serde(default)]
    pub api_key: String,

    /// Chat model deployment name
    #[serde(default)]
    pub deployment: String,
}

/// Remote search index settings, forwarded to the completion service as a
/// second grounding source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Search service endpoint
    pub endpoint: String,

    /// Search API key
    pub api_key: String,

    /// Index name
    #[serde(default = "default_index_name")]
    pub index_name: String,

    /// Embedding deployment for query vectorization
    pub embedding_deployment: String,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".faircheck").join("config.toml"))
    }

    /// Load configuration from the given path, or the default path when
    /// `None`. A missing file yields defaults; environment variables then
    /// override the service credentials either way.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::path()?,
        };

        let mut config = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            toml::from_str(&contents)?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment-variable overrides for service credentials. Uses
    /// the same variable names as the original deployment environment.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("AZURE_OPENAI_ENDPOINT") {
            self.azure.endpoint = v;
        }
        if let Ok(v) = std::env::var("AZURE_OPENAI_API_KEY") {
            self.azure.api_key = v;
        }
        if let Ok(v) = std::env::var("DEPLOYMENT_NAME") {
            self.azure.deployment = v;
        }

        let search_endpoint = std::env::var("AZURE_AI_SEARCH_ENDPOINT").ok();
        let search_key = std::env::var("AZURE_AI_SEARCH_API_KEY").ok();
        let embedding = std::env::var("DEPLOYMENT_EMBEDDING_NAME").ok();
        if let (Some(endpoint), Some(api_key), Some(embedding_deployment)) =
            (search_endpoint, search_key, embedding)
        {
            self.search = Some(SearchSettings {
                endpoint,
                api_key,
                index_name: self
                    .search
                    .as_ref()
                    .map(|s| s.index_name.clone())
                    .unwrap_or_else(default_index_name),
                embedding_deployment,
            });
        }
    }

    /// Check that the completion service is fully configured.
    pub fn validate(&self) -> Result<()> {
        if self.azure.endpoint.trim().is_empty() {
            return Err(CliError::Config("azure.endpoint is not set".into()));
        }
        if self.azure.api_key.trim().is_empty() {
            return Err(CliError::Config("azure.api_key is not set".into()));
        }
        if self.azure.deployment.trim().is_empty() {
            return Err(CliError::Config("azure.deployment is not set".into()));
        }
        self.engine
            .validate()
            .map_err(CliError::Config)?;
        Ok(())
    }

    /// The grounding configuration for the provider, if search is set up.
    pub fn grounding(&self) -> Option<SearchGrounding> {
        self.search.as_ref().map(|s| SearchGrounding {
            endpoint: s.endpoint.clone(),
            index_name: s.index_name.clone(),
            api_key: s.api_key.clone(),
            embedding_deployment: s.embedding_deployment.clone(),
        })
    }

    /// Render the configuration as TOML with secrets redacted.
    pub fn redacted_toml(&self) -> String {
        let mut redacted = self.clone();
        if !redacted.azure.api_key.is_empty() {
            redacted.azure.api_key = "<redacted>".to_string();
        }
        if let Some(search) = redacted.search.as_mut() {
            if !search.api_key.is_empty() {
                search.api_key = "<redacted>".to_string();
            }
        }
        toml::to_string_pretty(&redacted).unwrap_or_else(|e| format!("<unserializable: {}>", e))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            azure: AzureSettings::default(),
            search: None,
            engine: EngineConfig::default(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_index_name() -> String {
    DEFAULT_INDEX_NAME.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert!(config.search.is_none());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        write!(
            file,
            r#"
data_dir = "/var/lib/faircheck"

[azure]
endpoint = "https://res.openai.azure.com"
api_key = "secret"
deployment = "gpt-4o"

[search]
endpoint = "https://search.example.net"
api_key = "search-secret"
embedding_deployment = "text-embedding"

[engine]
completion_timeout_secs = 60
"#
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/faircheck"));
        assert_eq!(config.engine.completion_timeout_secs, 60);
        assert!(config.validate().is_ok());

        let search = config.search.as_ref().unwrap();
        // Index name falls back to the default when omitted
        assert_eq!(search.index_name, DEFAULT_INDEX_NAME);

        let grounding = config.grounding().unwrap();
        assert_eq!(grounding.endpoint, "https://search.example.net");
        assert_eq!(grounding.embedding_deployment, "text-embedding");
    }

    #[test]
    fn test_redaction() {
        let mut config = Config::default();
        config.azure.api_key = "very-secret".to_string();

        let rendered = config.redacted_toml();
        assert!(!rendered.contains("very-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_validate_reports_missing_fields() {
        let mut config = Config::default();
        config.azure.endpoint = "https://res.openai.azure.com".to_string();
        config.azure.api_key = "key".to_string();

        match config.validate() {
            Err(CliError::Config(msg)) => assert!(msg.contains("deployment")),
            other => panic!("expected config error, got {:?}", other.err()),
        }
    }
}

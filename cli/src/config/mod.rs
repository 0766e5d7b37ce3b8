// Application configuration.
// The defaults ship inside the binary (assets/config/default.json); `--config`
// points at a JSON file with the same shape to override them.
use files::RemovalPolicy;
use serde::Deserialize;
use shared::models::Locale;
use std::path::Path;
use thiserror::Error;

const DEFAULT_CONFIG: &str = include_str!("../../assets/config/default.json");

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub version: String,
    /// Locale used when `--from`/`--to` are not given.
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub removal: RemovalPolicy,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppConfig {
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::from_json(DEFAULT_CONFIG)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }
}

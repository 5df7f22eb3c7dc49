//! Configuration management for DocDeck
//!
//! This crate handles loading `.docdeck/config.toml`. Every field has a
//! default, so a missing file or a partial file is fine.

use doc_common::{DocError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Location of the config file relative to the workspace root
pub const CONFIG_RELATIVE_PATH: &str = ".docdeck/config.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// File the config was read from (set programmatically, not in TOML)
    #[serde(skip)]
    pub source: Option<PathBuf>,

    /// Server identity settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration ([server])
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Name reported in `serverInfo` during `initialize`
    #[serde(default = "default_server_name")]
    pub name: String,

    /// Protocol version answered when the client does not request one
    #[serde(default = "default_protocol_version")]
    pub protocol_version: String,
}

fn default_server_name() -> String {
    "DocumentMCP".to_string()
}
fn default_protocol_version() -> String {
    "2024-11-05".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_server_name(),
            protocol_version: default_protocol_version(),
        }
    }
}

/// Logging configuration ([logging])
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "error".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl Config {
    /// Load configuration from workspace root
    pub fn load(workspace_root: &Path) -> Result<Self> {
        let config_path = workspace_root.join(CONFIG_RELATIVE_PATH);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_file(&config_path)
    }

    /// Load configuration from an explicit file; the file must exist
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| DocError::ConfigError(format!("Failed to read config: {}", e)))?;

        let mut config = Self::parse(&content)?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| DocError::ConfigError(format!("Failed to parse config: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.name, "DocumentMCP");
        assert_eq!(config.server.protocol_version, "2024-11-05");
        assert_eq!(config.logging.level, "error");
        assert!(!config.logging.json);
        assert!(config.source.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::parse("[logging]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.server.name, "DocumentMCP");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = Config::parse("[server\nname = 1").unwrap_err();
        assert!(matches!(err, DocError::ConfigError(_)));
    }
}

//! Configuration management for the CLI
//!
//! The configuration carries exactly the collaborator inputs the core
//! expects injected: the base URL, the URI registry contents, and the API
//! key for example requests. Values are loaded from:
//! - Default values
//! - Configuration files (TOML)
//! - Environment variables

use crate::error::{Error, Result};
use apiref_core::{StaticCredential, UriTable};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL composed with resolved paths for display
    pub base_url: String,

    /// API key injected into example requests
    pub api_key: Option<String>,

    /// URI registry contents: key to path template
    pub uris: HashMap<String, String>,

    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: String,

    /// Use colored output by default
    pub color: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (compact, full, json)
    pub format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            api_key: None,
            uris: HashMap::new(),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "human".to_string(),
            color: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "compact".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Cannot read {}: {}", path.display(), e))
        })?;

        let mut config: Config = toml::from_str(&content)?;
        config.merge_with_env();
        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in Self::default_config_paths() {
            if path.exists() {
                match Self::from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        // Return default config if no config file found
        let mut config = Self::default();
        config.merge_with_env();
        Ok(config)
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            Self::from_file(path)
        } else {
            Self::load()
        }
    }

    /// Path of the user-level configuration file
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("apiref").join("config.toml"))
    }

    /// Locate a project-level configuration file in the current directory
    pub fn find_project_config() -> Option<PathBuf> {
        for name in [".apiref.toml", "apiref.toml"] {
            let path = PathBuf::from(name);
            if path.exists() {
                return Some(path);
            }
        }
        None
    }

    /// Write a default user configuration file, creating parent directories
    pub fn create_default_user_config() -> Result<PathBuf> {
        let path = Self::user_config_path()
            .ok_or_else(|| Error::config("Unable to determine user config directory"))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Self::default().write_to(&path)?;
        Ok(path)
    }

    /// Write a default project configuration file in the current directory
    pub fn create_default_project_config() -> Result<PathBuf> {
        let path = PathBuf::from(".apiref.toml");
        Self::default().write_to(&path)?;
        Ok(path)
    }

    /// Serialize this configuration to a TOML file
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("Cannot serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get default configuration file paths to check
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // Current directory
        paths.push(PathBuf::from(".apiref.toml"));
        paths.push(PathBuf::from("apiref.toml"));

        // User config directory
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("apiref").join("config.toml"));
        }

        // Home directory
        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".apiref.toml"));
        }

        paths
    }

    /// Apply environment variable overrides
    fn merge_with_env(&mut self) {
        if let Ok(base_url) = std::env::var("APIREF_BASE_URL") {
            self.base_url = base_url;
        }
        if let Ok(api_key) = std::env::var("APIREF_API_KEY") {
            self.api_key = Some(api_key);
        }
    }

    /// Build the URI registry the core consumes
    pub fn uri_table(&self) -> UriTable {
        self.uris
            .iter()
            .map(|(key, path)| (key.clone(), path.clone()))
            .collect()
    }

    /// Build the credential source, when an API key is configured
    pub fn credential(&self) -> Option<StaticCredential> {
        self.api_key.as_deref().map(StaticCredential::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apiref_core::UriRegistry;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert!(config.api_key.is_none());
        assert!(config.uris.is_empty());
        assert_eq!(config.output.format, "human");
    }

    #[test]
    fn test_from_file_parses_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
base_url = "https://api.example.com"
api_key = "secret"

[uris]
"link.create" = "/api/link/create"

[logging]
level = "debug"
"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.logging.level, "debug");

        let table = config.uri_table();
        assert_eq!(table.resolve("link.create"), Some("/api/link/create"));
    }

    #[test]
    fn test_missing_file_is_a_config_error() {
        let err = Config::from_file(Path::new("/nonexistent/apiref.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_write_to_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.base_url = "https://api.example.com".to_string();
        config
            .uris
            .insert("link.create".to_string(), "/api/link/create".to_string());
        config.write_to(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.base_url, "https://api.example.com");
        assert_eq!(
            loaded.uris.get("link.create").map(String::as_str),
            Some("/api/link/create")
        );
    }

    #[test]
    fn test_credential_built_from_api_key() {
        use apiref_core::CredentialSource;

        let config = Config {
            api_key: Some("secret".to_string()),
            ..Config::default()
        };
        let credential = config.credential().unwrap();
        assert_eq!(credential.api_key(), Some("secret"));

        assert!(Config::default().credential().is_none());
    }
}

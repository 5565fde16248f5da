//! Configuration system
//!
//! Loads a YAML config file describing the listen address and the upstream
//! GitHub API endpoint. Every field has a default so the service starts with
//! no config file at all; the GITHUB_TOKEN environment variable supplies the
//! optional upstream bearer token.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to listen on
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

fn default_bind_addr() -> String {
    "127.0.0.1:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

/// Upstream GitHub API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// Base URL of the upstream API (points at a stub server in tests)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Overall request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Bearer token passed through to the upstream API, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

fn default_base_url() -> String {
    "https://api.github.com".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            token: None,
        }
    }
}

/// RepoLens configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream GitHub API settings
    #[serde(default)]
    pub github: GitHubConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let mut config: AppConfig = serde_yaml::from_str(&contents)?;
        config.apply_env();
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents = serde_yaml::to_string(self)?;
        fs::write(path.as_ref(), contents)?;
        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env(&mut self) {
        if let Ok(token) = std::env::var("GITHUB_TOKEN") {
            if !token.is_empty() {
                self.github.token = Some(token);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.github.base_url, "https://api.github.com");
        assert_eq!(config.github.timeout_secs, 10);
        assert!(config.github.token.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut config = AppConfig::default();
        config.server.bind_addr = "0.0.0.0:9090".to_string();
        config.github.base_url = "http://localhost:8080".to_string();
        config.save(&config_path).unwrap();

        let loaded = AppConfig::load(&config_path).unwrap();
        assert_eq!(loaded.server.bind_addr, "0.0.0.0:9090");
        assert_eq!(loaded.github.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: AppConfig =
            serde_yaml::from_str("github:\n  base_url: http://stub:1234\n").unwrap();
        assert_eq!(config.github.base_url, "http://stub:1234");
        assert_eq!(config.github.timeout_secs, 10);
        assert_eq!(config.server.bind_addr, "127.0.0.1:8080");
    }
}

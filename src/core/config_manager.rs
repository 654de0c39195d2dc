// src/core/config_manager.rs
//! Unified configuration: defaults < config.yaml section < environment/CLI overrides

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::ollama_client::{DEFAULT_MODEL, DEFAULT_OLLAMA_URL, DEFAULT_TIMEOUT_SECS};

pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";
pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_ADDRESS: &str = "0.0.0.0";

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment: String,
    /// File the settings were read from, `None` when running on defaults
    pub source: Option<PathBuf>,
    pub server: ServerSettings,
    pub backend: BackendSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub address: String,
    pub port: u16,
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BackendSettings {
    pub ollama_url: String,
    pub model: String,
    pub timeout_seconds: u64,
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub address: Option<String>,
    pub port: Option<u16>,
    pub log_file: Option<PathBuf>,
    pub ollama_url: Option<String>,
    pub model: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct EnvironmentSection {
    server: ServerSettings,
    backend: BackendSettings,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: EnvironmentSection,
    #[serde(default)]
    production: EnvironmentSection,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            log_file: None,
        }
    }
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ConfigManager {
    /// A missing file means built-in defaults; an unreadable or invalid one is an error.
    /// Runs before tracing is set up, so the outcome is reported through `source`.
    pub fn load_from(config_path: &Path, environment: &str) -> Result<Self> {
        let source = config_path.exists().then(|| config_path.to_path_buf());

        let section = if source.is_some() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;

            let config_file: ConfigFile = serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse {}", config_path.display()))?;

            match environment {
                "production" => config_file.production,
                _ => config_file.local,
            }
        } else {
            EnvironmentSection::default()
        };

        Ok(Self {
            environment: environment.to_string(),
            source,
            server: section.server,
            backend: section.backend,
        })
    }

    pub fn apply_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(address) = overrides.address {
            self.server.address = address;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(log_file) = overrides.log_file {
            self.server.log_file = Some(log_file);
        }
        if let Some(url) = overrides.ollama_url {
            self.backend.ollama_url = url;
        }
        if let Some(model) = overrides.model {
            self.backend.model = model;
        }
        if let Some(timeout) = overrides.timeout_seconds {
            self.backend.timeout_seconds = timeout;
        }
        self
    }

    /// Base URL the server is reachable on, for startup messages
    pub fn public_url(&self) -> String {
        let host = match self.server.address.as_str() {
            "0.0.0.0" | "::" => "localhost",
            other => other,
        };
        format!("http://{}:{}", host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config =
            ConfigManager::load_from(Path::new("/nonexistent/config.yaml"), "local").unwrap();

        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.address, "0.0.0.0");
        assert_eq!(config.backend.ollama_url, "http://localhost:11434");
        assert_eq!(config.backend.model, "llama3.2");
        assert_eq!(config.backend.timeout_seconds, 30);
        assert_eq!(config.source, None);
    }

    #[test]
    fn test_environment_selects_section_and_fills_gaps() {
        let file = write_config(
            r#"
local:
  server:
    port: 4100
production:
  server:
    address: 127.0.0.1
    port: 8080
  backend:
    ollama_url: http://ollama.internal:11434
    model: llama3.1
"#,
        );

        let local = ConfigManager::load_from(file.path(), "local").unwrap();
        assert_eq!(local.source.as_deref(), Some(file.path()));
        assert_eq!(local.server.port, 4100);
        assert_eq!(local.backend, BackendSettings::default());

        let production = ConfigManager::load_from(file.path(), "production").unwrap();
        assert_eq!(production.server.address, "127.0.0.1");
        assert_eq!(production.server.port, 8080);
        assert_eq!(production.backend.model, "llama3.1");
        assert_eq!(production.backend.timeout_seconds, 30);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let file = write_config("local: [not, a, section");
        assert!(ConfigManager::load_from(file.path(), "local").is_err());
    }

    #[test]
    fn test_overrides_win_over_file_values() {
        let config = ConfigManager::load_from(Path::new("/nonexistent/config.yaml"), "local")
            .unwrap()
            .apply_overrides(ConfigOverrides {
                port: Some(5000),
                model: Some("mistral".to_string()),
                ..Default::default()
            });

        assert_eq!(config.server.port, 5000);
        assert_eq!(config.backend.model, "mistral");
        assert_eq!(config.backend.ollama_url, "http://localhost:11434");
        assert_eq!(config.public_url(), "http://localhost:5000");
    }
}

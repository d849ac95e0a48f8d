//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub classifier: ClassifierSettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dataset configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_database_path")]
    pub database_path: String,
}

fn default_database_path() -> String {
    "./data/DisasterResponse.db".to_string()
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_genre")]
    pub default_genre: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8050
}

fn default_genre() -> String {
    "direct".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            default_genre: default_genre(),
        }
    }
}

impl ApiConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Classifier sidecar configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierSettings {
    #[serde(default = "default_classifier_url")]
    pub url: String,

    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_classifier_timeout")]
    pub request_timeout_ms: u64,

    #[serde(default = "default_classifier_retries")]
    pub max_retries: u32,
}

fn default_classifier_url() -> String {
    "http://localhost:8090".to_string()
}

fn default_classifier_timeout() -> u64 {
    5000
}

fn default_classifier_retries() -> u32 {
    3
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            url: default_classifier_url(),
            enabled: false,
            request_timeout_ms: default_classifier_timeout(),
            max_retries: default_classifier_retries(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("reliefboard").join("config.toml")),
            Some(PathBuf::from("/etc/reliefboard/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(db) = std::env::var("RELIEFBOARD_DATABASE") {
            self.dataset.database_path = db;
        }

        if let Ok(host) = std::env::var("RELIEFBOARD_HOST") {
            self.api.host = host;
        }
        if let Ok(port) = std::env::var("RELIEFBOARD_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        // Setting a classifier URL implies turning the integration on
        if let Ok(url) = std::env::var("RELIEFBOARD_CLASSIFIER_URL") {
            self.classifier.url = url;
            self.classifier.enabled = true;
        }

        if let Ok(level) = std::env::var("RELIEFBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("RELIEFBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Reliefboard Configuration
#
# Environment variables override these settings:
# - RELIEFBOARD_DATABASE
# - RELIEFBOARD_HOST
# - RELIEFBOARD_PORT
# - RELIEFBOARD_CLASSIFIER_URL
# - RELIEFBOARD_LOG_LEVEL
# - RELIEFBOARD_LOG_FORMAT

[dataset]
# SQLite database holding the model_data feature table
database_path = "./data/DisasterResponse.db"

[api]
# Server host
host = "0.0.0.0"

# Server port
port = 8050

# Genre shown in the startup category chart
default_genre = "direct"

[classifier]
# Enable the external classifier sidecar
enabled = false

# Model server base URL
url = "http://localhost:8090"

# Request timeout (ms)
request_timeout_ms = 5000

# Maximum prediction retries
max_retries = 3

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.port, 8050);
        assert_eq!(config.api.default_genre, "direct");
        assert!(!config.classifier.enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            [dataset]
            database_path = "/srv/disaster.db"

            [api]
            port = 9000
            "#,
        )
        .unwrap();
        assert_eq!(config.dataset.database_path, "/srv/disaster.db");
        assert_eq!(config.api.port, 9000);
        // Untouched sections keep their defaults
        assert_eq!(config.api.host, "0.0.0.0");
        assert_eq!(config.classifier.max_retries, 3);
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.api.port, 8050);
        assert!(!config.classifier.enabled);
    }

    #[test]
    fn test_addr() {
        let api = ApiConfig::default();
        assert_eq!(api.addr(), "0.0.0.0:8050");
    }
}

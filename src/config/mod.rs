// src/config/mod.rs - Typed configuration for the storefront client

//! Configuration for the storefront client
//!
//! Supports:
//! - Multiple configuration formats (YAML, JSON, TOML), detected by extension
//! - Environment variable overrides with the `HEMLINE_` prefix
//! - Validation with per-key error reporting
//! - Sensible defaults so the app runs with no config file at all

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::SortBy;
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub key: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation error for '{}': {}", self.key, self.message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_extension(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Top-level configuration for the storefront client
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorefrontConfig {
    pub api: ApiConfig,
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

/// Backend connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the backend REST API
    pub base_url: String,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:4000".to_string(),
            timeout_ms: 10_000,
        }
    }
}

/// Catalog browsing defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Products per page
    pub page_size: usize,
    /// Sort order applied when the user has not chosen one
    pub default_sort: SortBy,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: 12,
            default_sort: SortBy::Popularity,
        }
    }
}

/// Logging output configuration (consumed by `crate::logging` on native targets)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "info" or "hemline=debug,warn"
    pub filter: String,
    pub format: LogFormat,
    /// Directory for rolling log files; console-only when absent
    pub file_directory: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Pretty,
            file_directory: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl StorefrontConfig {
    /// Loads configuration from a file, detecting the format from the extension
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_extension(path).ok_or_else(|| {
            Error::config(format!(
                "Unrecognized config extension: {}",
                path.display()
            ))
        })?;

        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;

        let mut config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&contents)
                .map_err(|e| Error::config(format!("Invalid JSON config: {}", e)))?,
            ConfigFormat::Yaml => serde_yaml::from_str(&contents)
                .map_err(|e| Error::config(format!("Invalid YAML config: {}", e)))?,
            ConfigFormat::Toml => toml::from_str(&contents)
                .map_err(|e| Error::config(format!("Invalid TOML config: {}", e)))?,
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Defaults plus environment overrides, for when no config file is given
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    /// Applies `HEMLINE_`-prefixed environment variables over the loaded values
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("HEMLINE_API_BASE_URL") {
            self.api.base_url = url;
        }
        if let Ok(timeout) = std::env::var("HEMLINE_API_TIMEOUT_MS") {
            if let Ok(ms) = timeout.parse() {
                self.api.timeout_ms = ms;
            }
        }
        if let Ok(filter) = std::env::var("HEMLINE_LOG") {
            self.logging.filter = filter;
        }
    }

    /// Validates the configuration, collecting every problem rather than
    /// stopping at the first
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.api.base_url.is_empty() {
            errors.push(ValidationError {
                key: "api.base_url".to_string(),
                message: "must not be empty".to_string(),
            });
        } else if !self.api.base_url.starts_with("http://")
            && !self.api.base_url.starts_with("https://")
        {
            errors.push(ValidationError {
                key: "api.base_url".to_string(),
                message: "must start with http:// or https://".to_string(),
            });
        }

        if self.api.timeout_ms == 0 {
            errors.push(ValidationError {
                key: "api.timeout_ms".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        if self.catalog.page_size == 0 {
            errors.push(ValidationError {
                key: "catalog.page_size".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = StorefrontConfig::default();
        assert!(config.validate().is_empty());
        assert_eq!(config.catalog.page_size, 12);
        assert_eq!(config.api.timeout_ms, 10_000);
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(
            ConfigFormat::from_extension(Path::new("hemline.yaml")),
            Some(ConfigFormat::Yaml)
        );
        assert_eq!(
            ConfigFormat::from_extension(Path::new("hemline.toml")),
            Some(ConfigFormat::Toml)
        );
        assert_eq!(
            ConfigFormat::from_extension(Path::new("hemline.json")),
            Some(ConfigFormat::Json)
        );
        assert_eq!(ConfigFormat::from_extension(Path::new("hemline.ini")), None);
    }

    #[test]
    fn test_validation_collects_all_errors() {
        let mut config = StorefrontConfig::default();
        config.api.base_url = "ftp://example.com".to_string();
        config.api.timeout_ms = 0;
        config.catalog.page_size = 0;

        let errors = config.validate();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.key == "api.base_url"));
        assert!(errors.iter().any(|e| e.key == "api.timeout_ms"));
        assert!(errors.iter().any(|e| e.key == "catalog.page_size"));
    }

    #[test]
    fn test_json_round_trip() {
        let config = StorefrontConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: StorefrontConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.api.base_url, config.api.base_url);
        assert_eq!(parsed.catalog.page_size, config.catalog.page_size);
    }
}

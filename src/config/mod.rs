//! Configuration system
//!
//! Handles TOML config file parsing and CLI argument merging.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Listing API settings
    pub api: ApiConfig,
    /// Result file settings
    pub output: OutputConfig,
}

impl Config {
    /// Validate values that serde cannot check on its own
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()
    }
}

/// Listing API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// API root, e.g. `https://api.github.com`
    pub base_url: String,
    /// Page size for listing requests (1-100)
    pub per_page: u32,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl ApiConfig {
    /// Largest page size the API honours
    pub const MAX_PER_PAGE: u32 = 100;

    /// Check the page size is within API limits
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.per_page == 0 || self.per_page > Self::MAX_PER_PAGE {
            return Err(ConfigError::InvalidValue {
                key: "api.per_page".to_string(),
                message: format!(
                    "{} is outside 1-{}",
                    self.per_page,
                    Self::MAX_PER_PAGE
                ),
            });
        }
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.github.com".to_string(),
            per_page: Self::MAX_PER_PAGE,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))
                .to_string(),
        }
    }
}

/// Result file configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory saved lists are written to (current directory if unset)
    pub directory: Option<PathBuf>,
}

impl OutputConfig {
    /// Resolved output directory
    pub fn directory(&self) -> PathBuf {
        self.directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "https://api.github.com");
        assert_eq!(config.api.per_page, 100);
        assert!(config.api.user_agent.starts_with("followdiff/"));
        assert_eq!(config.output.directory(), PathBuf::from("."));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_per_page_bounds() {
        let mut config = Config::default();
        config.api.per_page = 0;
        assert!(config.validate().is_err());

        config.api.per_page = 101;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));

        config.api.per_page = 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[api]\nper_page = 50\n").unwrap();
        assert_eq!(config.api.per_page, 50);
        assert_eq!(config.api.base_url, "https://api.github.com");
        assert!(config.output.directory.is_none());
    }
}

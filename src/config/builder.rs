//! Configuration builder
//!
//! Merges configuration from files and CLI arguments.

use crate::config::{Config, ConfigFile};
use crate::error::ConfigError;

use std::path::PathBuf;

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Load configuration from a file
    ///
    /// An explicitly requested file must load; default locations are
    /// best-effort.
    pub fn with_file(mut self, path: Option<&str>) -> Result<Self, ConfigError> {
        let file_config = match path {
            Some(path) => Some(ConfigFile::read(path)?.config),
            None => ConfigFile::discover().map(|file| file.config),
        };

        if let Some(cfg) = file_config {
            self.config = cfg;
        }

        Ok(self)
    }

    /// Override with CLI API base URL
    pub fn with_base_url(mut self, url: Option<String>) -> Self {
        if let Some(u) = url {
            self.config.api.base_url = u;
        }
        self
    }

    /// Override with CLI output directory
    pub fn with_output_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(d) = dir {
            self.config.output.directory = Some(d);
        }
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Result<Config, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = ConfigBuilder::new().build().unwrap();
        assert_eq!(config.api.base_url, "https://api.github.com");
        assert!(config.output.directory.is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let config = ConfigBuilder::new()
            .with_base_url(Some("http://localhost:8080".to_string()))
            .with_output_dir(Some(PathBuf::from("out")))
            .build()
            .unwrap();

        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.output.directory(), PathBuf::from("out"));
    }

    #[test]
    fn test_builder_none_keeps_values() {
        let config = ConfigBuilder::new()
            .with_base_url(None)
            .with_output_dir(None)
            .build()
            .unwrap();
        assert_eq!(config.api.per_page, 100);
    }

    #[test]
    fn test_builder_missing_explicit_file() {
        let result = ConfigBuilder::new().with_file(Some("/nonexistent/followdiff.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}

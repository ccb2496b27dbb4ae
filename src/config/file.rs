//! Configuration file loading
//!
//! Reads `Config` from TOML and searches the standard locations.

use crate::config::Config;
use crate::error::ConfigError;

use std::path::{Path, PathBuf};

/// A configuration file that was read and validated
#[derive(Debug)]
pub struct ConfigFile {
    /// Where the configuration came from
    pub path: PathBuf,
    pub config: Config,
}

impl ConfigFile {
    /// Read and validate one file
    pub fn read(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound(path.display().to_string()))?;

        let config: Config = toml::from_str(&content)?;
        config.validate()?;

        Ok(Self {
            path: path.to_path_buf(),
            config,
        })
    }

    /// First usable file among the standard locations
    pub fn discover() -> Option<Self> {
        Self::discover_in(search_paths())
    }

    /// First usable file among `candidates`
    ///
    /// Missing files are passed over silently, broken ones with a warning.
    pub fn discover_in<I>(candidates: I) -> Option<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        candidates
            .into_iter()
            .filter(|path| path.as_ref().is_file())
            .find_map(|path| match Self::read(&path) {
                Ok(file) => {
                    log::info!("Loaded config from {}", file.path.display());
                    Some(file)
                }
                Err(e) => {
                    log::warn!("Ignoring {}: {}", path.as_ref().display(), e);
                    None
                }
            })
    }
}

/// Standard config locations, most specific to the user first
pub fn search_paths() -> Vec<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("followdiff").join("config.toml"))
        .into_iter()
        .chain(["followdiff.toml", ".followdiff.toml"].map(PathBuf::from))
        .collect()
}

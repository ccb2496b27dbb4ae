//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod analyze;
pub mod interactive;

pub use analyze::run_analyze;
pub use interactive::run_interactive;

use crate::cli::Cli;
use crate::config::{Config, ConfigBuilder};
use crate::error::ConfigError;

/// Resolve configuration from the config file and CLI overrides
pub fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    ConfigBuilder::new()
        .with_file(cli.config.as_deref())?
        .with_base_url(cli.api_url.clone())
        .with_output_dir(cli.output_dir.clone())
        .build()
}

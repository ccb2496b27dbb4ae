//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands.

use crate::domain::Username;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// GitHub follower reconciliation tool
///
/// Find accounts you follow that don't follow you back, and followers you
/// don't follow back. Runs interactively when no subcommand is given.
#[derive(Parser, Debug)]
#[command(name = "followdiff")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for one-shot commands
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "FOLLOWDIFF_CONFIG")]
    pub config: Option<String>,

    /// API base URL (overrides the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Directory saved lists are written to
    #[arg(long, global = true, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prompt for a username and pick analyses from a menu (default)
    Interactive,

    /// List accounts you follow that don't follow you back
    NonFollowers(AnalyzeArgs),

    /// List accounts following you that you don't follow back
    Fans(AnalyzeArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the one-shot analysis commands
#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// GitHub username to analyze
    pub username: Username,

    /// Also save the list to a file (txt, csv or json)
    #[arg(long, value_name = "FORMAT")]
    pub save: Option<String>,
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Human-readable list
    #[default]
    Table,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}

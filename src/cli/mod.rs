//! CLI argument parsing, prompting and output formatting
//!
//! Uses clap for ergonomic CLI argument definitions.

pub mod args;
pub mod output;
pub mod prompt;

pub use args::{Cli, Commands};

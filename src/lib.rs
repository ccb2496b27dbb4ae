//! followdiff - GitHub follower reconciliation library
//!
//! This library fetches an account's followers and followees from the
//! GitHub REST API and computes who doesn't follow back and who isn't
//! followed back.
//!
//! # Modules
//!
//! - [`api`]: Listing API abstraction layer
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`domain`]: Domain models with validation
//! - [`error`]: Error types
//! - [`services`]: Fetching, reconciliation and export

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::{AppError, Result};

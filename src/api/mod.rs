//! Listing API abstraction layer
//!
//! Provides trait-based abstractions over the GitHub REST API for testability.

pub mod client;
pub mod traits;

pub use client::GitHubClient;
pub use traits::RelationSource;

//! Unified error types for followdiff
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from the listing API
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from domain type validation
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Error while saving a result list
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// IO error (terminal operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the paginated listing API
///
/// Cloneable so a failed fetch can be cached in the session alongside
/// successful ones.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The account does not exist
    #[error("User '{0}' not found on GitHub")]
    NotFound(String),

    /// Any other transport, protocol or decoding failure
    #[error("{}", fetch_message(.status, .message))]
    Fetch {
        /// HTTP status, when the server answered at all
        status: Option<u16>,
        message: String,
    },
}

fn fetch_message(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("request failed with HTTP {}: {}", code, message),
        None => format!("request failed: {}", message),
    }
}

impl ApiError {
    /// Build a generic fetch failure without an HTTP status
    pub fn fetch(message: impl Into<String>) -> Self {
        ApiError::Fetch {
            status: None,
            message: message.into(),
        }
    }

    /// Whether this looks like GitHub's unauthenticated rate limit
    pub fn is_rate_limited(&self) -> bool {
        matches!(
            self,
            ApiError::Fetch {
                status: Some(403 | 429),
                ..
            }
        )
    }
}

/// Errors from domain type validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Username does not match GitHub's handle grammar
    #[error("Invalid GitHub username format: '{0}'")]
    InvalidIdentifier(String),
}

/// Errors from saving result lists
#[derive(Error, Debug)]
pub enum ExportError {
    /// Format token is not one of txt, csv, json
    #[error("Unsupported file format: '{0}' (expected txt, csv or json)")]
    UnsupportedFormat(String),

    /// Writing the output file failed
    #[error("Error saving file {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Invalid config value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = ApiError::NotFound("octocat".to_string());
        assert_eq!(err.to_string(), "User 'octocat' not found on GitHub");
    }

    #[test]
    fn test_fetch_error_display() {
        let err = ApiError::Fetch {
            status: Some(502),
            message: "Bad Gateway".to_string(),
        };
        assert!(err.to_string().contains("HTTP 502"));

        let err = ApiError::fetch("connection reset");
        assert_eq!(err.to_string(), "request failed: connection reset");
    }

    #[test]
    fn test_rate_limit_detection() {
        let err = ApiError::Fetch {
            status: Some(403),
            message: "rate limit exceeded".to_string(),
        };
        assert!(err.is_rate_limited());
        assert!(!ApiError::NotFound("x".to_string()).is_rate_limited());
        assert!(!ApiError::fetch("timeout").is_rate_limited());
    }

    #[test]
    fn test_unsupported_format_display() {
        let err = ExportError::UnsupportedFormat("xml".to_string());
        assert!(err.to_string().contains("'xml'"));
    }

    #[test]
    fn test_error_conversion() {
        let domain_err = DomainError::InvalidIdentifier("-bad".to_string());
        let app_err: AppError = domain_err.into();
        assert!(matches!(app_err, AppError::Domain(_)));

        let api_err = ApiError::NotFound("ghost".to_string());
        let app_err: AppError = api_err.into();
        assert!(matches!(app_err, AppError::Api(ApiError::NotFound(_))));
    }
}

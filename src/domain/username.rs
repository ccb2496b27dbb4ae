//! GitHub account identifier
//!
//! Provides a validated username type.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A GitHub username
///
/// Alphanumeric characters and single hyphens, 1-39 characters, never
/// starting or ending with a hyphen. Validated on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Maximum username length
    pub const MAX_LEN: usize = 39;

    /// Create a new Username with validation
    ///
    /// # Errors
    /// Returns `DomainError::InvalidIdentifier` if the value does not match
    /// the username grammar
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if Self::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidIdentifier(value))
        }
    }

    /// Check a candidate against the username grammar
    pub fn is_valid(value: &str) -> bool {
        let bytes = value.as_bytes();
        if bytes.is_empty() || bytes.len() > Self::MAX_LEN {
            return false;
        }

        let mut prev_hyphen = true; // rejects a leading hyphen
        for &b in bytes {
            match b {
                b'-' if prev_hyphen => return false,
                b'-' => prev_hyphen = true,
                b if b.is_ascii_alphanumeric() => prev_hyphen = false,
                _ => return false,
            }
        }

        !prev_hyphen
    }

    /// Get the username as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Username {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Username {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Username> for String {
    fn from(name: Username) -> Self {
        name.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        for name in ["a", "octocat", "Octo-Cat", "a1-b2-c3", "0", "x-y"] {
            assert!(Username::new(name).is_ok(), "expected {name} to be valid");
        }

        let longest = "a".repeat(39);
        assert!(Username::new(longest).is_ok());
    }

    #[test]
    fn test_length_bounds() {
        assert!(Username::new("").is_err());
        assert!(Username::new("a".repeat(40)).is_err());
    }

    #[test]
    fn test_hyphen_placement() {
        assert!(Username::new("-octocat").is_err());
        assert!(Username::new("octocat-").is_err());
        assert!(Username::new("-").is_err());
        assert!(Username::new("octo--cat").is_err());
    }

    #[test]
    fn test_disallowed_characters() {
        for name in ["octo_cat", "octo cat", "octo.cat", "octo/cat", "ünï"] {
            let err = Username::new(name).unwrap_err();
            assert_eq!(err, DomainError::InvalidIdentifier(name.to_string()));
        }
    }

    #[test]
    fn test_parse_and_display() {
        let name: Username = "mona-lisa".parse().unwrap();
        assert_eq!(name.to_string(), "mona-lisa");
        assert_eq!(name.as_str(), "mona-lisa");
    }

    #[test]
    fn test_serde_validates() {
        let ok: Username = serde_json::from_str("\"octocat\"").unwrap();
        assert_eq!(ok.as_str(), "octocat");
        assert!(serde_json::from_str::<Username>("\"bad-\"").is_err());
    }
}

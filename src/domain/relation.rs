//! Relation domain types
//!
//! Relation kinds, fetch state and result categories.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the social graph to list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    /// Accounts following the subject
    Followers,
    /// Accounts the subject follows
    Following,
}

impl RelationKind {
    /// URL path segment for the listing endpoint
    pub const fn path_segment(&self) -> &'static str {
        match self {
            RelationKind::Followers => "followers",
            RelationKind::Following => "following",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// Cached outcome of fetching one relation list
///
/// A failed fetch is kept distinct from a successful empty one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationState {
    /// All pages fetched, logins in API order
    Fetched(Vec<String>),
    /// The fetch failed; no partial list is kept
    Failed(ApiError),
}

impl RelationState {
    /// View the state as a result
    pub fn as_result(&self) -> Result<&[String], ApiError> {
        match self {
            RelationState::Fetched(list) => Ok(list),
            RelationState::Failed(err) => Err(err.clone()),
        }
    }

    /// Logins fetched so far (empty for a failure)
    pub fn logins(&self) -> &[String] {
        match self {
            RelationState::Fetched(list) => list,
            RelationState::Failed(_) => &[],
        }
    }

    /// Check if this state holds a failure
    pub fn is_failed(&self) -> bool {
        matches!(self, RelationState::Failed(_))
    }
}

impl From<Result<Vec<String>, ApiError>> for RelationState {
    fn from(result: Result<Vec<String>, ApiError>) -> Self {
        match result {
            Ok(list) => RelationState::Fetched(list),
            Err(err) => RelationState::Failed(err),
        }
    }
}

/// Which difference a result list holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Followed accounts that don't follow back
    NonFollowers,
    /// Followers that aren't followed back
    Fans,
}

impl Category {
    /// Slug used in output file names
    pub const fn slug(&self) -> &'static str {
        match self {
            Category::NonFollowers => "non_followers",
            Category::Fans => "fans",
        }
    }

    /// Human-readable heading
    pub const fn title(&self) -> &'static str {
        match self {
            Category::NonFollowers => "Users Who Don't Follow You Back",
            Category::Fans => "Your 'Fans' (You Don't Follow Them Back)",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

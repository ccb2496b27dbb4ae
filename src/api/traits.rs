//! Trait definitions for the listing API
//!
//! These traits abstract over HTTP to enable testing with mocks.

use crate::domain::{RelationKind, Username};
use crate::error::ApiError;

/// A paginated source of relation listings
///
/// Implemented by the real HTTP client in production and by a scripted
/// mock in tests.
pub trait RelationSource {
    /// Fetch one page of logins for `username`'s relation
    ///
    /// Pages are 1-based. An empty page marks the end of the listing.
    ///
    /// # Errors
    /// `ApiError::NotFound` when the account does not exist,
    /// `ApiError::Fetch` for any other failure.
    fn page(
        &self,
        username: &Username,
        kind: RelationKind,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<String>, ApiError>;
}

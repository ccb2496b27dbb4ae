//! Domain models for followdiff
//!
//! Types are validated on construction (fail-fast pattern).

pub mod relation;
pub mod username;

pub use relation::{Category, RelationKind, RelationState};
pub use username::Username;

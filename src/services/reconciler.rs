//! Set reconciliation
//!
//! Asymmetric differences between the following and followers lists.

use crate::domain::Category;

use std::collections::HashSet;
use std::hash::Hash;

/// Items in `following` that are absent from `followers`, in `following` order
pub fn non_followers<T: Eq + Hash + Clone>(following: &[T], followers: &[T]) -> Vec<T> {
    subtract(following, followers)
}

/// Items in `followers` that are absent from `following`, in `followers` order
pub fn fans<T: Eq + Hash + Clone>(following: &[T], followers: &[T]) -> Vec<T> {
    subtract(followers, following)
}

/// Dispatch to the difference a category names
pub fn difference<T: Eq + Hash + Clone>(
    category: Category,
    following: &[T],
    followers: &[T],
) -> Vec<T> {
    match category {
        Category::NonFollowers => non_followers(following, followers),
        Category::Fans => fans(following, followers),
    }
}

/// `keep` minus `exclude`, keeping `keep`'s order and first occurrences
fn subtract<T: Eq + Hash + Clone>(keep: &[T], exclude: &[T]) -> Vec<T> {
    let excluded: HashSet<&T> = exclude.iter().collect();
    let mut seen = HashSet::with_capacity(keep.len());

    keep.iter()
        .filter(|item| !excluded.contains(item) && seen.insert(*item))
        .cloned()
        .collect()
}

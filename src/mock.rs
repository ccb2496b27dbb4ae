//! Mock implementations for testing
//!
//! Provides a scripted relation source for unit testing without network access.

use crate::api::RelationSource;
use crate::domain::{RelationKind, Username};
use crate::error::ApiError;

use std::collections::HashMap;
use std::sync::Mutex;

/// Scripted response for one page request
#[derive(Debug, Clone)]
pub enum MockPage {
    /// Page returns these logins
    Logins(Vec<String>),
    /// Page request fails
    Error(ApiError),
}

/// Mock listing API for testing
///
/// Pages are served in order per relation kind; requests past the script
/// return an empty page. Every request is recorded.
#[derive(Debug, Default)]
pub struct MockSource {
    pages: HashMap<RelationKind, Vec<MockPage>>,
    requests: Mutex<Vec<(RelationKind, u32, u32)>>,
}

impl MockSource {
    /// Create a mock with no scripted pages
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: serve these logins as a single page (then an empty page)
    pub fn with_list(self, kind: RelationKind, logins: &[&str]) -> Self {
        if logins.is_empty() {
            return self;
        }
        self.with_page(kind, logins.iter().map(|s| s.to_string()).collect())
    }

    /// Builder: append a page of logins
    pub fn with_page(mut self, kind: RelationKind, logins: Vec<String>) -> Self {
        self.pages
            .entry(kind)
            .or_default()
            .push(MockPage::Logins(logins));
        self
    }

    /// Builder: append pages of generated logins with the given sizes
    pub fn with_page_sizes(mut self, kind: RelationKind, sizes: &[usize]) -> Self {
        let mut next = 0usize;
        for &size in sizes {
            let logins = (next..next + size).map(|i| format!("user{}", i)).collect();
            next += size;
            self = self.with_page(kind, logins);
        }
        self
    }

    /// Builder: append a failing page
    pub fn with_error(mut self, kind: RelationKind, error: ApiError) -> Self {
        self.pages
            .entry(kind)
            .or_default()
            .push(MockPage::Error(error));
        self
    }

    /// Number of page requests issued for a relation kind
    pub fn request_count(&self, kind: RelationKind) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, _, _)| *k == kind)
            .count()
    }

    /// Total number of page requests issued
    pub fn total_requests(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Page numbers requested for a relation kind, in order
    pub fn requested_pages(&self, kind: RelationKind) -> Vec<u32> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, _, _)| *k == kind)
            .map(|(_, page, _)| *page)
            .collect()
    }

    /// Page size of the most recent request
    pub fn last_per_page(&self) -> Option<u32> {
        self.requests.lock().unwrap().last().map(|(_, _, n)| *n)
    }
}

impl RelationSource for MockSource {
    fn page(
        &self,
        _username: &Username,
        kind: RelationKind,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<String>, ApiError> {
        self.requests.lock().unwrap().push((kind, page, per_page));

        let index = page.saturating_sub(1) as usize;
        match self.pages.get(&kind).and_then(|pages| pages.get(index)) {
            Some(MockPage::Logins(logins)) => Ok(logins.clone()),
            Some(MockPage::Error(err)) => Err(err.clone()),
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn octocat() -> Username {
        Username::new("octocat").unwrap()
    }

    #[test]
    fn test_mock_serves_pages_in_order() {
        let source = MockSource::new().with_page_sizes(RelationKind::Followers, &[2, 1]);

        let first = source.page(&octocat(), RelationKind::Followers, 1, 100).unwrap();
        let second = source.page(&octocat(), RelationKind::Followers, 2, 100).unwrap();
        let third = source.page(&octocat(), RelationKind::Followers, 3, 100).unwrap();

        assert_eq!(first, ["user0", "user1"]);
        assert_eq!(second, ["user2"]);
        assert!(third.is_empty());
        assert_eq!(source.requested_pages(RelationKind::Followers), [1, 2, 3]);
    }

    #[test]
    fn test_mock_kinds_are_independent() {
        let source = MockSource::new().with_list(RelationKind::Following, &["a"]);

        assert!(source
            .page(&octocat(), RelationKind::Followers, 1, 100)
            .unwrap()
            .is_empty());
        assert_eq!(
            source.page(&octocat(), RelationKind::Following, 1, 100).unwrap(),
            ["a"]
        );
        assert_eq!(source.request_count(RelationKind::Followers), 1);
        assert_eq!(source.request_count(RelationKind::Following), 1);
    }

    #[test]
    fn test_mock_error_page() {
        let source = MockSource::new()
            .with_error(RelationKind::Followers, ApiError::NotFound("octocat".into()));

        let result = source.page(&octocat(), RelationKind::Followers, 1, 100);
        assert_eq!(result, Err(ApiError::NotFound("octocat".into())));
    }
}

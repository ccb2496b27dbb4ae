//! Relationship fetching service
//!
//! Accumulates paginated listings into complete relation lists, memoized
//! per session.

use crate::api::RelationSource;
use crate::domain::{Category, RelationKind, RelationState, Username};
use crate::error::ApiError;
use crate::services::reconciler;

/// Callback invoked before the first request of an uncached fetch
pub type ProgressHook = Box<dyn Fn(&Username, RelationKind)>;

/// Fetch every page of a relation listing
///
/// Requests pages starting at 1 until one comes back empty. Any failing
/// page fails the whole fetch and discards the pages collected so far.
pub fn fetch_all<S: RelationSource + ?Sized>(
    source: &S,
    username: &Username,
    kind: RelationKind,
    per_page: u32,
) -> Result<Vec<String>, ApiError> {
    let mut logins = Vec::new();
    let mut page = 1;

    loop {
        let batch = source.page(username, kind, page, per_page)?;
        if batch.is_empty() {
            break;
        }

        log::debug!(
            "{} page {} for {}: {} entries",
            kind,
            page,
            username,
            batch.len()
        );
        logins.extend(batch);
        page += 1;
    }

    Ok(logins)
}

/// Analysis session for one account
///
/// Owns the API source and two lazily filled cache slots, one per relation
/// kind. Each slot is written once: with the full list on success or with
/// the error on failure.
pub struct Session<S: RelationSource> {
    source: S,
    username: Username,
    per_page: u32,
    followers: Option<RelationState>,
    following: Option<RelationState>,
    on_progress: Option<ProgressHook>,
}

impl<S: RelationSource> Session<S> {
    /// Default page size
    pub const DEFAULT_PER_PAGE: u32 = 100;

    /// Create a session for an already validated username
    pub fn new(source: S, username: Username) -> Self {
        Self {
            source,
            username,
            per_page: Self::DEFAULT_PER_PAGE,
            followers: None,
            following: None,
            on_progress: None,
        }
    }

    /// Builder: set the page size
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    /// Builder: observe uncached fetches as they start
    pub fn with_progress<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Username, RelationKind) + 'static,
    {
        self.on_progress = Some(Box::new(hook));
        self
    }

    /// The account under analysis
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// The underlying API source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Cached state for a relation kind, if it has been fetched
    pub fn state(&self, kind: RelationKind) -> Option<&RelationState> {
        match kind {
            RelationKind::Followers => self.followers.as_ref(),
            RelationKind::Following => self.following.as_ref(),
        }
    }

    /// Fetch a relation list, using the cached outcome when present
    pub fn fetch(&mut self, kind: RelationKind) -> Result<&[String], ApiError> {
        self.ensure(kind).as_result()
    }

    /// Accounts following the subject
    pub fn followers(&mut self) -> Result<&[String], ApiError> {
        self.fetch(RelationKind::Followers)
    }

    /// Accounts the subject follows
    pub fn following(&mut self) -> Result<&[String], ApiError> {
        self.fetch(RelationKind::Following)
    }

    /// Accounts the subject follows that don't follow back
    ///
    /// Fails if either list failed to fetch rather than diffing a partial view.
    pub fn non_followers(&mut self) -> Result<Vec<String>, ApiError> {
        self.difference(Category::NonFollowers)
    }

    /// Accounts following the subject that aren't followed back
    ///
    /// Fails if either list failed to fetch rather than diffing a partial view.
    pub fn fans(&mut self) -> Result<Vec<String>, ApiError> {
        self.difference(Category::Fans)
    }

    /// Compute the difference for a category
    pub fn difference(&mut self, category: Category) -> Result<Vec<String>, ApiError> {
        self.ensure(RelationKind::Following).as_result()?;
        self.ensure(RelationKind::Followers).as_result()?;

        let following = self.settled(RelationKind::Following)?;
        let followers = self.settled(RelationKind::Followers)?;

        Ok(reconciler::difference(category, following, followers))
    }

    /// Forget failed fetches so the next access retries them
    ///
    /// Successful lists stay cached. Returns whether anything was cleared.
    pub fn retry_failed(&mut self) -> bool {
        let mut cleared = false;
        for slot in [&mut self.followers, &mut self.following] {
            if slot.as_ref().is_some_and(RelationState::is_failed) {
                *slot = None;
                cleared = true;
            }
        }
        cleared
    }

    fn settled(&self, kind: RelationKind) -> Result<&[String], ApiError> {
        self.state(kind)
            .ok_or_else(|| ApiError::fetch(format!("{} list was never fetched", kind)))?
            .as_result()
    }

    fn ensure(&mut self, kind: RelationKind) -> &RelationState {
        let Self {
            source,
            username,
            per_page,
            followers,
            following,
            on_progress,
        } = self;

        let source: &S = source;
        let username: &Username = username;
        let per_page = *per_page;
        let on_progress = on_progress.as_ref();

        let slot = match kind {
            RelationKind::Followers => followers,
            RelationKind::Following => following,
        };

        if slot.is_some() {
            log::debug!("Using cached {} for {}", kind, username);
        }

        slot.get_or_insert_with(|| {
            log::info!("Fetching {} for {}...", kind, username);
            if let Some(hook) = on_progress {
                hook(username, kind);
            }

            let result = fetch_all(source, username, kind, per_page);
            match &result {
                Ok(list) => log::info!("Fetched {} {} for {}", list.len(), kind, username),
                Err(e) => log::warn!("Fetching {} for {} failed: {}", kind, username, e),
            }
            result.into()
        })
    }
}

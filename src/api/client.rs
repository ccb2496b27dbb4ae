//! GitHub REST client
//!
//! Blocking HTTP implementation of [`RelationSource`].

use crate::api::traits::RelationSource;
use crate::config::ApiConfig;
use crate::domain::{RelationKind, Username};
use crate::error::{ApiError, ConfigError};

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

/// Media type for the v3 REST API
const GITHUB_V3_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// One entry of a followers/following listing
///
/// The API returns many more fields; only the login is kept.
#[derive(Debug, Deserialize)]
struct AccountEntry {
    login: String,
}

/// HTTP client for the GitHub users API
///
/// Holds a single connection pool for its lifetime.
pub struct GitHubClient {
    client: Client,
    base_url: Url,
}

impl GitHubClient {
    /// Create a client from API configuration
    pub fn new(config: &ApiConfig) -> Result<Self, ConfigError> {
        let base_url = parse_base_url(&config.base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_V3_MEDIA_TYPE));

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Base URL requests are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the listing URL for a relation
    pub fn listing_url(&self, username: &Username, kind: RelationKind) -> Result<Url, ApiError> {
        self.base_url
            .join(&format!("users/{}/{}", username, kind.path_segment()))
            .map_err(|e| ApiError::fetch(format!("invalid listing URL: {}", e)))
    }
}

impl RelationSource for GitHubClient {
    fn page(
        &self,
        username: &Username,
        kind: RelationKind,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<String>, ApiError> {
        let url = self.listing_url(username, kind)?;

        log::debug!("GET {} (page {}, per_page {})", url, page, per_page);

        let response = self
            .client
            .get(url)
            .query(&[("per_page", per_page), ("page", page)])
            .send()
            .map_err(|e| ApiError::fetch(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(username.to_string()));
        }
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("unexpected status");
            return Err(ApiError::Fetch {
                status: Some(status.as_u16()),
                message: reason.to_string(),
            });
        }

        let entries: Vec<AccountEntry> = response
            .json()
            .map_err(|e| ApiError::fetch(format!("malformed response: {}", e)))?;

        Ok(entries.into_iter().map(|entry| entry.login).collect())
    }
}

/// Parse a base URL, making sure relative joins keep its path
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let mut normalized = raw.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }

    let url = Url::parse(&normalized).map_err(|e| ConfigError::InvalidValue {
        key: "api.base_url".to_string(),
        message: e.to_string(),
    })?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidValue {
            key: "api.base_url".to_string(),
            message: format!("'{}' is not an http(s) URL", raw),
        });
    }

    Ok(url)
}

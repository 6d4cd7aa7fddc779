//! Metadata fetched for a repository.

use serde::Deserialize;

/// Description written for repositories whose metadata could not be fetched.
pub const FETCH_FAILED_MARKER: &str = "Failed to fetch repository info";

/// Builds the public GitHub URL for a repository.
///
/// Format: "https://github.com/{owner}/{repo}"
#[must_use]
pub fn fallback_url(owner: &str, repo: &str) -> String {
    format!("https://github.com/{owner}/{repo}")
}

/// The values a fetch produces for one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoMetadata {
    /// Stargazer count.
    pub stars: u64,

    /// Repository description.
    pub description: String,

    /// Canonical repository URL.
    pub html_url: String,

    /// ISO-8601 timestamp of the last update, or empty.
    pub updated_at: String,
}

impl RepoMetadata {
    /// Placeholder metadata for a repository whose fetch failed.
    #[must_use]
    pub fn fallback(owner: &str, repo: &str) -> Self {
        Self {
            stars: 0,
            description: FETCH_FAILED_MARKER.to_string(),
            html_url: fallback_url(owner, repo),
            updated_at: String::new(),
        }
    }
}

/// Subset of the `GET /repos/{owner}/{repo}` response body.
///
/// Every field is optional so that sparse or `null` values fall back to
/// defaults instead of failing the whole response.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RepoPayload {
    #[serde(default)]
    pub stargazers_count: Option<u64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl RepoPayload {
    /// Converts the response body into metadata, filling gaps with defaults.
    pub(crate) fn into_metadata(self, owner: &str, repo: &str) -> RepoMetadata {
        RepoMetadata {
            stars: self.stargazers_count.unwrap_or(0),
            description: self.description.unwrap_or_default(),
            html_url: self
                .html_url
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| fallback_url(owner, repo)),
            updated_at: self.updated_at.unwrap_or_default(),
        }
    }
}

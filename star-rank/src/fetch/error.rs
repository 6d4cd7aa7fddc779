//! Metadata fetch error types.

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while fetching repository metadata.
#[derive(Debug, Error)]
pub enum FetchError {
    /// GitHub API error (network failure, non-2xx status or malformed body).
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// The request did not complete in time.
    #[error("Request timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    /// The HTTP client could not be built.
    #[error("Failed to build GitHub client for '{api_base}': {source}")]
    ClientError {
        api_base: String,
        #[source]
        source: octocrab::Error,
    },
}

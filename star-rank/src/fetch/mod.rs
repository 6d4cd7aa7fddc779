//! Repository metadata fetching using the GitHub REST API.
//!
//! Requests are issued one at a time, in list order, with a short courtesy
//! delay between them. A failed request never stops the loop; the affected
//! repository gets placeholder metadata instead.

mod error;

pub use error::FetchError;

use crate::repository::{RepoDescriptor, RepoMetadata, RepoPayload};
use crate::summary::FetchOutcome;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use std::time::Duration;
use tracing::{debug, info, info_span, warn, Instrument};

/// Default GitHub API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Default pause between consecutive requests.
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(100);

/// Timing settings for a fetch pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// Upper bound for a single request.
    pub timeout: Duration,

    /// Pause inserted between consecutive requests.
    pub delay: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_REQUEST_TIMEOUT,
            delay: DEFAULT_REQUEST_DELAY,
        }
    }
}

/// Builds an unauthenticated GitHub client pointed at `api_base`.
///
/// Retries are disabled so each repository costs exactly one request.
///
/// # Errors
///
/// Returns [`FetchError::ClientError`] if `api_base` is not a valid URI or the
/// client can't be constructed.
pub fn build_client(api_base: &str) -> Result<Octocrab, FetchError> {
    let client_error = |source| FetchError::ClientError {
        api_base: api_base.to_string(),
        source,
    };

    Octocrab::builder()
        .base_uri(api_base)
        .map_err(client_error)?
        .add_retry_config(RetryConfig::None)
        .build()
        .map_err(client_error)
}

/// Fetches metadata for a single repository.
///
/// Issues `GET /repos/{owner}/{repo}`. Missing or `null` fields in the
/// response fall back to defaults.
///
/// # Errors
///
/// Returns [`FetchError`] on network failure, non-2xx status, malformed body
/// or timeout.
pub async fn fetch_metadata(
    octocrab: &Octocrab,
    owner: &str,
    repo: &str,
    timeout: Duration,
) -> Result<RepoMetadata, FetchError> {
    let route = format!("/repos/{owner}/{repo}");
    debug!(route = %route, "Requesting repository");

    let payload: RepoPayload = tokio::time::timeout(timeout, octocrab.get(&route, None::<&()>))
        .await
        .map_err(|_| FetchError::Timeout { timeout })??;

    Ok(payload.into_metadata(owner, repo))
}

/// Fetches metadata for every repository, in order, and applies it.
///
/// Repositories whose fetch fails receive [`RepoMetadata::fallback`].
///
/// # Returns
///
/// One [`FetchOutcome`] per repository, in the same order.
pub async fn fetch_all(
    octocrab: &Octocrab,
    repos: &mut [RepoDescriptor],
    options: &FetchOptions,
) -> Vec<FetchOutcome> {
    let total = repos.len();
    info!(count = total, "Fetching repository metadata");

    let mut outcomes = Vec::with_capacity(total);
    for (index, repo) in repos.iter_mut().enumerate() {
        let full_name = repo.full_name();
        let span = info_span!("fetch", repo = %full_name);

        let outcome = async {
            info!(position = index + 1, total, "Fetching repository");

            match fetch_metadata(octocrab, repo.owner(), repo.repo(), options.timeout).await {
                Ok(metadata) => {
                    debug!(stars = metadata.stars, "Fetched repository");
                    repo.apply(metadata);
                    FetchOutcome::Fetched {
                        repository: full_name.clone(),
                        stars: repo.stars,
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Failed to fetch repository, using placeholder");
                    let fallback = RepoMetadata::fallback(repo.owner(), repo.repo());
                    repo.apply(fallback);
                    FetchOutcome::Failed {
                        repository: full_name.clone(),
                        error: e.to_string(),
                    }
                }
            }
        }
        .instrument(span)
        .await;

        outcomes.push(outcome);

        if index + 1 < total && !options.delay.is_zero() {
            tokio::time::sleep(options.delay).await;
        }
    }

    outcomes
}

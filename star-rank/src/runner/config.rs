//! Runner configuration.

use crate::config::DEFAULT_CONFIG_FILE;
use crate::fetch::{FetchOptions, DEFAULT_API_BASE, DEFAULT_REQUEST_DELAY, DEFAULT_REQUEST_TIMEOUT};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default file name of the generated ranking page.
pub const DEFAULT_OUTPUT_FILE: &str = "index.html";

/// Configuration for a ranking run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Path to the repository list.
    config_path: PathBuf,
    /// Path the ranking page is written to.
    output_path: PathBuf,
    /// GitHub API base URL.
    api_base: String,
    /// Pause between consecutive API requests.
    request_delay: Duration,
    /// Upper bound for a single API request.
    request_timeout: Duration,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::new(
            PathBuf::from(DEFAULT_CONFIG_FILE),
            PathBuf::from(DEFAULT_OUTPUT_FILE),
        )
    }
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(config_path: PathBuf, output_path: PathBuf) -> Self {
        Self {
            config_path,
            output_path,
            api_base: DEFAULT_API_BASE.to_string(),
            request_delay: DEFAULT_REQUEST_DELAY,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Sets a custom GitHub API base URL.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Sets the pause between consecutive API requests.
    pub fn with_request_delay(mut self, request_delay: Duration) -> Self {
        self.request_delay = request_delay;
        self
    }

    /// Sets the per-request timeout.
    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Returns the repository list path.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Returns the ranking page path.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Returns the GitHub API base URL.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Returns the pause between consecutive API requests.
    pub fn request_delay(&self) -> Duration {
        self.request_delay
    }

    /// Returns the per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Returns the timing settings for the fetch pass.
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            timeout: self.request_timeout,
            delay: self.request_delay,
        }
    }
}

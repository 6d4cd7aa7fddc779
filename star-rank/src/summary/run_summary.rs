//! Run summary types.

use super::result::FetchOutcome;
use std::path::PathBuf;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of repositories listed in the config file.
    pub repositories_configured: usize,

    /// Number of repositories whose metadata was fetched.
    pub repositories_fetched: usize,

    /// Number of repositories that fell back to placeholder metadata.
    pub repositories_failed: usize,

    /// Full names of the repositories that fell back, in fetch order.
    pub failed_repositories: Vec<String>,

    /// Where the ranking page was written, if it was.
    pub output_path: Option<PathBuf>,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the summary with a fetch outcome.
    pub fn record_result(&mut self, result: &FetchOutcome) {
        match result {
            FetchOutcome::Fetched { .. } => self.repositories_fetched += 1,
            FetchOutcome::Failed { .. } => {
                self.repositories_failed += 1;
                self.failed_repositories.push(result.repository().to_string());
            }
        }
    }

    /// Returns true if any repository fell back to placeholder metadata.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.repositories_failed > 0
    }

    /// Returns true if the ranking page was written.
    #[must_use]
    pub fn wrote_output(&self) -> bool {
        self.output_path.is_some()
    }
}

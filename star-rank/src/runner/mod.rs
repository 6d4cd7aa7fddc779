//! Orchestrates a ranking run: load the list, fetch metadata, render, write.

mod config;
mod error;

pub use config::{RunnerConfig, DEFAULT_OUTPUT_FILE};
pub use error::RunnerError;

use crate::config::{load_repos, ConfigError};
use crate::fetch::{build_client, fetch_all};
use crate::render::{format_generated_at, PageRenderer};
use crate::summary::RunSummary;
use chrono::Local;
use octocrab::Octocrab;
use std::path::Path;
use tracing::{info, warn};

/// Runs the full ranking pipeline.
pub struct Runner {
    config: RunnerConfig,
    octocrab: Octocrab,
    renderer: PageRenderer,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the GitHub client or the page template can't be
    /// set up.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let octocrab = build_client(config.api_base())?;
        Ok(Self {
            config,
            octocrab,
            renderer: PageRenderer::new()?,
        })
    }

    /// Executes the full orchestration flow.
    ///
    /// A missing or empty repository list ends the run early without writing
    /// the page. Individual fetch failures are recorded in the summary and
    /// never abort the run.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository list can't be read, rendering
    /// fails, or the page can't be written.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let mut summary = RunSummary::new();

        let mut repos = match load_repos(self.config.config_path()) {
            Ok(repos) => repos,
            Err(ConfigError::MissingFile { path }) => {
                warn!(path = %path, "Repository list not found");
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };

        if repos.is_empty() {
            warn!("No repositories configured");
            return Ok(summary);
        }

        info!(count = repos.len(), "Found repositories");
        summary.repositories_configured = repos.len();

        let outcomes = fetch_all(&self.octocrab, &mut repos, &self.config.fetch_options()).await;
        for outcome in &outcomes {
            summary.record_result(outcome);
        }

        let generated_at = format_generated_at(&Local::now());
        let html = self.renderer.render(&repos, &generated_at)?;

        let output_path = self.config.output_path();
        write_output(output_path, &html)?;
        info!(path = %output_path.display(), "Ranking page written");
        summary.output_path = Some(output_path.to_path_buf());

        Ok(summary)
    }
}

/// Writes the page, replacing any existing file.
fn write_output(path: &Path, html: &str) -> Result<(), RunnerError> {
    std::fs::write(path, html).map_err(|source| RunnerError::OutputWrite {
        path: path.display().to_string(),
        source,
    })
}

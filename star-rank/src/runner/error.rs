//! Runner error types.

/// Errors that can occur while running a ranking pass.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// The repository list exists but could not be read.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Fetch(#[from] crate::fetch::FetchError),

    /// Page rendering errors.
    #[error(transparent)]
    Render(#[from] crate::render::RenderError),

    /// The ranking page could not be written.
    #[error("Failed to write ranking page '{path}': {source}")]
    OutputWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

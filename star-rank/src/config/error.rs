//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading the repository list.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The repository list does not exist.
    #[error("Missing repository list: {path}")]
    MissingFile { path: String },
}

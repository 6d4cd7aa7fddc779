//! Fetch outcome types.

/// Result of fetching a single repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Metadata was fetched.
    Fetched {
        /// Repository full name.
        repository: String,
        /// Stargazer count.
        stars: u64,
    },

    /// The fetch failed and placeholder metadata was used.
    Failed {
        /// Repository full name.
        repository: String,
        /// Error message.
        error: String,
    },
}

impl FetchOutcome {
    /// Returns the repository full name.
    #[must_use]
    pub fn repository(&self) -> &str {
        match self {
            Self::Fetched { repository, .. } | Self::Failed { repository, .. } => repository,
        }
    }

    /// Returns true if the fetch failed.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

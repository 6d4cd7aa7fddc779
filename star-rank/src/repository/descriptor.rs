//! A configured repository entry.

use super::metadata::RepoMetadata;

/// One repository listed in the config file, plus the metadata fetched for it.
///
/// `owner` and `repo` are fixed at parse time. The fetched fields start out
/// empty and are filled in once by [`RepoDescriptor::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoDescriptor {
    owner: String,
    repo: String,

    /// Tags in the order they appeared in the config file.
    pub tags: Vec<String>,

    /// Stargazer count.
    pub stars: u64,

    /// Repository description, or the fetch failure marker.
    pub description: String,

    /// Canonical repository URL.
    pub html_url: String,

    /// ISO-8601 timestamp of the last update, or empty.
    pub updated_at: String,
}

impl RepoDescriptor {
    /// Creates a descriptor with no tags and no fetched metadata.
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            tags: Vec::new(),
            stars: 0,
            description: String::new(),
            html_url: String::new(),
            updated_at: String::new(),
        }
    }

    /// Sets the tag list.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Repository owner (user or organization).
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name.
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Full repository name in "owner/repo" format.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    /// Copies fetched (or fallback) metadata onto this descriptor.
    pub fn apply(&mut self, metadata: RepoMetadata) {
        self.stars = metadata.stars;
        self.description = metadata.description;
        self.html_url = metadata.html_url;
        self.updated_at = metadata.updated_at;
    }
}

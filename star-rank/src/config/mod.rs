//! Repository list loading.
//!
//! The repository list is a line-oriented text file. Each `owner/repo` line
//! starts a new entry and the plain lines that follow it are its tags:
//!
//! ```text
//! # comment
//! octocat/Hello-World
//! demo
//! example
//!
//! openai/gpt
//! ml
//! ```

mod error;

pub use error::ConfigError;

use crate::repository::RepoDescriptor;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info, warn};

/// Default file name of the repository list.
pub const DEFAULT_CONFIG_FILE: &str = "repos.txt";

/// Loads and parses the repository list at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::MissingFile`] if the file does not exist and
/// [`ConfigError::IoError`] if it exists but can't be read.
pub fn load_repos(path: &Path) -> Result<Vec<RepoDescriptor>, ConfigError> {
    info!(path = %path.display(), "Reading repository list");

    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::MissingFile {
            path: path.display().to_string(),
        },
        _ => ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        },
    })?;

    let repos = parse_repos(&content);
    info!(count = repos.len(), "Loaded repository list");
    Ok(repos)
}

/// Parses repository list content into descriptors, in file order.
///
/// Malformed repository lines are logged and skipped; they also close the
/// previous entry, so tag lines after them are dropped until the next valid
/// repository line.
#[must_use]
pub fn parse_repos(content: &str) -> Vec<RepoDescriptor> {
    let mut repos = Vec::new();
    let mut current: Option<RepoDescriptor> = None;

    for (index, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if is_repository_line(raw_line) {
            if let Some(done) = current.take() {
                repos.push(done);
            }

            match parse_repository_line(line) {
                Some((owner, repo)) => {
                    debug!(line = index + 1, owner, repo, "Parsed repository");
                    current = Some(RepoDescriptor::new(owner, repo));
                }
                None => {
                    warn!(line = index + 1, content = line, "Invalid repository line");
                }
            }
        } else if let Some(repo) = current.as_mut() {
            repo.tags.push(line.to_string());
        } else {
            debug!(line = index + 1, tag = line, "Ignoring tag before any repository");
        }
    }

    if let Some(done) = current {
        repos.push(done);
    }

    repos
}

/// Repository lines contain a `/` and are not indented.
fn is_repository_line(raw_line: &str) -> bool {
    raw_line.contains('/') && !raw_line.starts_with(char::is_whitespace)
}

/// Splits `owner/repo`, rejecting extra segments and empty or spaced parts.
fn parse_repository_line(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.split('/');
    let owner = parts.next()?.trim();
    let repo = parts.next()?.trim();

    if parts.next().is_some() || !is_valid_segment(owner) || !is_valid_segment(repo) {
        return None;
    }

    Some((owner, repo))
}

fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty() && !segment.contains(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn names(repos: &[RepoDescriptor]) -> Vec<String> {
        repos.iter().map(RepoDescriptor::full_name).collect()
    }

    #[test]
    fn test_parse_example_config() {
        let content = "# comment\noctocat/Hello-World\ndemo\nexample\n\nopenai/gpt\nml\n";
        let repos = parse_repos(content);

        assert_eq!(names(&repos), vec!["octocat/Hello-World", "openai/gpt"]);
        assert_eq!(repos[0].tags, vec!["demo", "example"]);
        assert_eq!(repos[1].tags, vec!["ml"]);
    }

    #[test]
    fn test_trims_owner_and_repo() {
        let repos = parse_repos("octocat / Hello-World  \n");

        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].owner(), "octocat");
        assert_eq!(repos[0].repo(), "Hello-World");
    }

    #[test]
    fn test_rejects_extra_segments() {
        let repos = parse_repos("a/b/c\nx\nd/e\ny\n");

        assert_eq!(names(&repos), vec!["d/e"]);
        assert_eq!(repos[0].tags, vec!["y"]);
    }

    #[test]
    fn test_invalid_line_closes_previous_entry() {
        let repos = parse_repos("a/b\nx\nbad/line/here\norphan\nc/d\n");

        assert_eq!(names(&repos), vec!["a/b", "c/d"]);
        assert_eq!(repos[0].tags, vec!["x"]);
        assert!(repos[1].tags.is_empty());
    }

    #[test]
    fn test_rejects_empty_segments() {
        let repos = parse_repos("/repo\nowner/\nfoo bar/baz\nok/repo\n");
        assert_eq!(names(&repos), vec!["ok/repo"]);
    }

    #[test]
    fn test_tags_before_first_repository_are_dropped() {
        let repos = parse_repos("early\nalso-early\na/b\nlate\n");

        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].tags, vec!["late"]);
    }

    #[test]
    fn test_indented_line_with_slash_is_a_tag() {
        let repos = parse_repos("a/b\n  ci/cd\n");

        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].tags, vec!["ci/cd"]);
    }

    #[test]
    fn test_indented_comment_is_skipped() {
        let repos = parse_repos("a/b\n   # not a tag\nx\n");
        assert_eq!(repos[0].tags, vec!["x"]);
    }

    #[test]
    fn test_tags_keep_duplicates_and_order() {
        let repos = parse_repos("a/b\nz\na\nz\n");
        assert_eq!(repos[0].tags, vec!["z", "a", "z"]);
    }

    #[test]
    fn test_empty_content() {
        assert!(parse_repos("").is_empty());
        assert!(parse_repos("# only comments\n\n   \n").is_empty());
    }

    #[test]
    fn test_crlf_line_endings() {
        let repos = parse_repos("a/b\r\nx\r\n");

        assert_eq!(names(&repos), vec!["a/b"]);
        assert_eq!(repos[0].tags, vec!["x"]);
    }

    #[test]
    fn test_load_repos_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = load_repos(&temp.path().join("repos.txt"));

        assert!(matches!(result, Err(ConfigError::MissingFile { .. })));
    }

    #[test]
    fn test_load_repos_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("repos.txt");
        fs::write(&path, "a/b\nx\nc/d\n").unwrap();

        let repos = load_repos(&path).unwrap();
        assert_eq!(names(&repos), vec!["a/b", "c/d"]);
    }
}

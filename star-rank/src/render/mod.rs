//! Ranking page rendering using Handlebars.
//!
//! This module orders repositories by star count and renders them into a
//! single self-contained HTML page with a client-side tag filter.

mod error;
mod renderer;

pub use error::RenderError;
pub use renderer::{create_handlebars_registry, PageRenderer, PAGE_TITLE};

use crate::repository::RepoDescriptor;
use chrono::{DateTime, TimeZone};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt::Display;

/// Shown instead of the update date when it is unknown.
pub const UNKNOWN_DATE: &str = "N/A";

/// One row of the ranking page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedRepository {
    /// 1-based position in the ranking.
    pub rank: usize,

    /// Repository name in "owner/repo" format.
    pub full_name: String,

    /// Link target for the repository name.
    pub html_url: String,

    /// Repository description.
    pub description: String,

    /// Tags in config order.
    pub tags: Vec<String>,

    /// Tags joined with `,`, read by the filter script.
    pub tags_attr: String,

    /// Stargazer count.
    pub stars: u64,

    /// Raw ISO-8601 update timestamp, or empty.
    pub updated_at: String,
}

/// Orders repositories by star count, highest first, and assigns ranks.
///
/// The sort is stable, so repositories with equal counts keep their config
/// order. Ranks are positional: `1..=N` with no ties or gaps.
#[must_use]
pub fn rank_repositories(repos: &[RepoDescriptor]) -> Vec<RankedRepository> {
    let mut sorted: Vec<&RepoDescriptor> = repos.iter().collect();
    sorted.sort_by(|a, b| b.stars.cmp(&a.stars));

    sorted
        .into_iter()
        .enumerate()
        .map(|(index, repo)| RankedRepository {
            rank: index + 1,
            full_name: repo.full_name(),
            html_url: repo.html_url.clone(),
            description: repo.description.clone(),
            tags: repo.tags.clone(),
            tags_attr: repo.tags.join(","),
            stars: repo.stars,
            updated_at: repo.updated_at.clone(),
        })
        .collect()
}

/// Collects the distinct tags of all repositories, sorted.
#[must_use]
pub fn collect_tags(repos: &[RepoDescriptor]) -> Vec<String> {
    repos
        .iter()
        .flat_map(|repo| repo.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Formats a star count with `,` thousands separators.
///
/// Format: "1,234,567"
#[must_use]
pub fn format_stars(stars: u64) -> String {
    let digits = stars.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(ch);
    }

    formatted
}

/// Reduces an ISO-8601 timestamp to its date part.
///
/// Returns [`UNKNOWN_DATE`] for an empty timestamp.
#[must_use]
pub fn format_updated(updated_at: &str) -> String {
    if updated_at.is_empty() {
        return UNKNOWN_DATE.to_string();
    }
    updated_at.chars().take(10).collect()
}

/// Formats the page generation time.
///
/// Format: "YYYY-MM-DD HH:MM:SS"
#[must_use]
pub fn format_generated_at<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn repo(owner: &str, name: &str, stars: u64, tags: &[&str]) -> RepoDescriptor {
        let mut repo = RepoDescriptor::new(owner, name).with_tags(tags.iter().copied());
        repo.stars = stars;
        repo
    }

    #[test]
    fn test_rank_sorts_by_stars_descending() {
        let repos = vec![
            repo("a", "low", 5, &[]),
            repo("b", "high", 500, &[]),
            repo("c", "mid", 50, &[]),
        ];

        let ranked = rank_repositories(&repos);
        let order: Vec<_> = ranked.iter().map(|r| r.full_name.as_str()).collect();
        let ranks: Vec<_> = ranked.iter().map(|r| r.rank).collect();

        assert_eq!(order, vec!["b/high", "c/mid", "a/low"]);
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_rank_ties_keep_config_order() {
        let repos = vec![
            repo("first", "x", 10, &[]),
            repo("top", "x", 20, &[]),
            repo("second", "x", 10, &[]),
            repo("third", "x", 10, &[]),
        ];

        let ranked = rank_repositories(&repos);
        let order: Vec<_> = ranked.iter().map(|r| r.full_name.as_str()).collect();
        let ranks: Vec<_> = ranked.iter().map(|r| r.rank).collect();

        assert_eq!(order, vec!["top/x", "first/x", "second/x", "third/x"]);
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_rank_joins_tags() {
        let ranked = rank_repositories(&[repo("a", "b", 1, &["x", "y"])]);
        assert_eq!(ranked[0].tags_attr, "x,y");
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank_repositories(&[]).is_empty());
    }

    #[test]
    fn test_collect_tags_sorted_and_deduplicated() {
        let repos = vec![
            repo("a", "b", 0, &["web", "cli"]),
            repo("c", "d", 0, &["cli", "ai"]),
            repo("e", "f", 0, &[]),
        ];

        assert_eq!(collect_tags(&repos), vec!["ai", "cli", "web"]);
    }

    #[test]
    fn test_format_stars() {
        assert_eq!(format_stars(0), "0");
        assert_eq!(format_stars(999), "999");
        assert_eq!(format_stars(1000), "1,000");
        assert_eq!(format_stars(123_456), "123,456");
        assert_eq!(format_stars(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_updated() {
        assert_eq!(format_updated("2024-05-06T07:08:09Z"), "2024-05-06");
        assert_eq!(format_updated(""), "N/A");
        assert_eq!(format_updated("2024"), "2024");
    }

    #[test]
    fn test_format_generated_at() {
        let time = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_generated_at(&time), "2024-01-02 03:04:05");
    }
}

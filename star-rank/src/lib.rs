#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod fetch;
pub mod render;
pub mod repository;
pub mod runner;
pub mod summary;

pub use config::{load_repos, parse_repos, ConfigError, DEFAULT_CONFIG_FILE};
pub use fetch::{
    build_client, fetch_all, fetch_metadata, FetchError, FetchOptions, DEFAULT_API_BASE,
    DEFAULT_REQUEST_DELAY, DEFAULT_REQUEST_TIMEOUT,
};
pub use render::{
    collect_tags, create_handlebars_registry, format_generated_at, format_stars, format_updated,
    rank_repositories, PageRenderer, RankedRepository, RenderError,
};
pub use repository::{fallback_url, RepoDescriptor, RepoMetadata, FETCH_FAILED_MARKER};
pub use runner::{Runner, RunnerConfig, RunnerError, DEFAULT_OUTPUT_FILE};
pub use summary::{FetchOutcome, RunSummary};

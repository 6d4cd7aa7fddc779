//! CLI for GitHub Star Rank.
//!
//! Reads a list of repositories, fetches their star counts and writes a
//! filterable ranking page.

use clap::Parser;
use github_star_rank::{
    RunSummary, Runner, RunnerConfig, RunnerError, DEFAULT_API_BASE, DEFAULT_CONFIG_FILE,
    DEFAULT_OUTPUT_FILE,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// GitHub Star Rank - Render a star ranking page for a list of repositories.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the repository list.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Path the ranking page is written to.
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// GitHub API base URL.
    #[arg(long, default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Pause between API requests, in milliseconds.
    #[arg(long, default_value_t = 100)]
    delay_ms: u64,

    /// Per-request timeout, in seconds.
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    // Both ring and aws-lc-rs may be compiled in; pick one explicitly.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let args = Args::parse();

    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::FAILURE
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let config = RunnerConfig::new(args.config, args.output)
        .with_api_base(args.api_base)
        .with_request_delay(Duration::from_millis(args.delay_ms))
        .with_request_timeout(Duration::from_secs(args.timeout_secs));
    let runner = Runner::new(config)?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Repositories configured: {}",
        summary.repositories_configured
    );
    println!("  Repositories fetched: {}", summary.repositories_fetched);
    println!("  Repositories failed: {}", summary.repositories_failed);

    match &summary.output_path {
        Some(path) => println!("  Ranking page: {}", path.display()),
        None => println!("  Ranking page: not written"),
    }

    if summary.has_failures() {
        warn!(
            failed = summary.repositories_failed,
            repositories = %summary.failed_repositories.join(", "),
            "Some repositories are shown with placeholder metadata"
        );
    }
}

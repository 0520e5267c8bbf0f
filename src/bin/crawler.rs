//! `crawler <seed-url> <page-dir> <max-depth> [--workers N] [--config FILE] [-v|-vv|-vvv]`
//!
//! Thin CLI shell around [`tse::crawler::run_crawl`] (spec.md §6.3).

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tse::crawler::run_crawl_with_capacity;
use tse::page::FsPageStore;
use tse::webpage::WebpageOps;
use tse::Config;

/// Concurrent, bounded-depth breadth-first web crawler.
#[derive(Parser, Debug)]
#[command(name = "crawler")]
#[command(version = "1.0.0")]
#[command(about = "Concurrent bounded-depth BFS crawler", long_about = None)]
struct Cli {
    /// Seed URL to start the crawl from.
    seed_url: String,

    /// Directory to write numbered page files into; created if absent.
    page_dir: PathBuf,

    /// Maximum BFS depth to follow (0 fetches only the seed).
    max_depth: u32,

    /// Override the configured worker count (spec.md §4.3 default: 3).
    #[arg(long)]
    workers: Option<u32>,

    /// Optional TOML config file for operational knobs.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    tse::init_logging(cli.verbose);

    match run(cli).await {
        Ok(pages_saved) => {
            println!("crawl complete: {pages_saved} page(s) saved");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("crawler: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> tse::Result<u32> {
    let config = match cli.config {
        Some(path) => tse::config::load_config(&path)?,
        None => Config::default(),
    };

    let workers = cli.workers.unwrap_or(config.crawler.workers);
    if workers < 1 {
        return Err(tse::ConfigError::Validation("workers must be >= 1".to_string()).into());
    }

    let store = Arc::new(
        FsPageStore::create_dir_if_missing(&cli.page_dir).map_err(tse::PageStoreError::Io)?,
    );
    let webpage = Arc::new(WebpageOps::new(
        &cli.seed_url,
        &config.user_agent,
        Duration::from_secs(config.crawler.fetch_timeout_secs),
    )?);

    let pages_saved = run_crawl_with_capacity(
        cli.seed_url,
        cli.max_depth,
        workers,
        config.crawler.seen_set_capacity_hint,
        webpage,
        store,
    )
    .await?;
    Ok(pages_saved)
}

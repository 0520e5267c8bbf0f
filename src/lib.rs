//! tse: a concurrent web crawler, inverted-index builder, and boolean
//! query evaluator over an internal URL subgraph.
//!
//! The three binaries (`crawler`, `indexer`, `query`) share this library:
//! a page store and index store with fixed on-disk formats, a `webpage`
//! capability for fetching and parsing pages, and the crawl/index/query
//! algorithms themselves.

pub mod config;
pub mod crawler;
pub mod index;
pub mod indexer;
pub mod page;
pub mod query;
pub mod webpage;

use thiserror::Error;

/// Top-level error type for tse operations.
#[derive(Debug, Error)]
pub enum TseError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("page store error: {0}")]
    PageStore(#[from] PageStoreError),

    #[error("index store error: {0}")]
    IndexStore(#[from] IndexStoreError),

    #[error("webpage error: {0}")]
    Webpage(#[from] WebpageError),

    #[error("crawl error: {0}")]
    Crawl(#[from] CrawlError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

/// Page store errors (load/save of flat page files, spec.md §6.1).
#[derive(Debug, Error)]
pub enum PageStoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed page file {0}: {1}")]
    Malformed(std::path::PathBuf, String),

    #[error("page id {0} not found")]
    NotFound(u32),
}

/// Index store errors (load/save of the flat index file, spec.md §6.2).
#[derive(Debug, Error)]
pub enum IndexStoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the `WebpageOps` capability: fetch, link/word/title/meta
/// extraction, internal/external classification.
#[derive(Debug, Error)]
pub enum WebpageError {
    #[error("failed to build http client: {0}")]
    ClientBuild(reqwest::Error),

    #[error("fetch failed for {url}: {source}")]
    Fetch { url: String, source: reqwest::Error },

    #[error("non-success status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("invalid url {0}: {1}")]
    InvalidUrl(String, ::url::ParseError),
}

/// Crawl-level errors: the ones spec.md §7 marks fatal to the whole run.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("failed to fetch seed url {url}: {source}")]
    SeedFetch { url: String, source: WebpageError },

    #[error("failed to save page {id}: {source}")]
    PageSave { id: u32, source: PageStoreError },

    #[error("page directory {0} is not a directory")]
    NotADirectory(std::path::PathBuf),

    #[error("crawler worker task panicked: {0}")]
    WorkerJoin(String),
}

/// Result type alias for tse operations.
pub type Result<T> = std::result::Result<T, TseError>;

/// Initializes the shared `tracing` subscriber. All three binaries are
/// thin shells around this crate (spec.md §1); this is the one piece of
/// setup each would otherwise duplicate, so it lives here once instead
/// of being copy-pasted into each `main.rs`.
pub fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbose {
        0 => EnvFilter::new("tse=info,warn"),
        1 => EnvFilter::new("tse=debug,info"),
        2 => EnvFilter::new("tse=trace,debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

// Re-export commonly used types
pub use config::Config;
pub use page::{Page, PageId};

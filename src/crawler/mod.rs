//! Concurrent bounded-depth BFS crawl (spec.md §4.3).
//!
//! The original's counter-plus-lock termination handshake and module-
//! private globals are replaced with an explicit [`CrawlState`] guarded by
//! a `tokio::sync::Mutex` and signalled via `tokio::sync::Notify`
//! (spec.md §9's re-architecture note). Workers are `tokio::task`s rather
//! than OS threads, and the network fetch happens outside the crawl lock
//! behind a tentative seen-set claim — the relaxation spec.md §5 permits.

mod state;
mod worker;

pub use state::CrawlState;

use crate::page::{Page, PageId, PageStore};
use crate::webpage::WebpageOps;
use crate::CrawlError;
use std::sync::Arc;
use tokio::sync::{Mutex, Notify};

/// Default worker count (spec.md §4.3).
pub const DEFAULT_WORKERS: u32 = 3;

/// Runs a full crawl: fetches the seed eagerly, then launches `workers`
/// concurrent tasks that share one frontier and seen-set until the global
/// termination condition holds.
///
/// Returns the total number of pages saved (`pages_added` at
/// termination), equal to `|SeenSet|` per spec.md §8 invariant 2.
pub async fn run_crawl(
    seed_url: String,
    max_depth: u32,
    workers: u32,
    webpage: Arc<WebpageOps>,
    store: Arc<dyn PageStore + Send + Sync>,
) -> Result<u32, CrawlError> {
    run_crawl_with_capacity(seed_url, max_depth, workers, 0, webpage, store).await
}

/// Same as [`run_crawl`], but presizes the seen-set to `seen_set_capacity`
/// (spec.md §9's `CrawlerConfig::seen_set_capacity_hint` knob).
pub async fn run_crawl_with_capacity(
    seed_url: String,
    max_depth: u32,
    workers: u32,
    seen_set_capacity: usize,
    webpage: Arc<WebpageOps>,
    store: Arc<dyn PageStore + Send + Sync>,
) -> Result<u32, CrawlError> {
    let started_at = chrono::Utc::now();
    tracing::info!(seed = %seed_url, max_depth, workers, started_at = %started_at.to_rfc3339(), "starting crawl");

    let html = webpage
        .fetch(&seed_url)
        .await
        .map_err(|source| CrawlError::SeedFetch {
            url: seed_url.clone(),
            source,
        })?;
    let seed_page = Page::new(seed_url.clone(), 0, html);

    let state = Arc::new(Mutex::new(CrawlState::with_seen_capacity(seen_set_capacity)));
    {
        let mut guard = state.lock().await;
        guard.seen.insert(seed_url.clone());
        let id = guard.next_id();
        debug_assert_eq!(id, PageId(1));
        guard.frontier.push_back((id, seed_page.clone()));
        guard.pages_added += 1;
    }
    store
        .save(PageId(1), &seed_page)
        .map_err(|source| CrawlError::PageSave { id: 1, source })?;

    let notify = Arc::new(Notify::new());

    let mut handles = Vec::with_capacity(workers as usize);
    for worker_id in 0..workers {
        let state = state.clone();
        let notify = notify.clone();
        let webpage = webpage.clone();
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            let result = worker::run_worker(state, notify, webpage, store, max_depth).await;
            if let Err(ref err) = result {
                tracing::error!(worker_id, error = %err, "worker exited with an error");
            }
            result
        }));
    }

    for handle in handles {
        handle
            .await
            .map_err(|join_err| CrawlError::WorkerJoin(join_err.to_string()))??;
    }

    let pages_added = state.lock().await.pages_added;
    let elapsed = chrono::Utc::now() - started_at;
    tracing::info!(pages_added, elapsed_ms = elapsed.num_milliseconds(), "crawl complete");
    Ok(pages_added)
}

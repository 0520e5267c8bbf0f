use crate::crawler::state::CrawlState;
use crate::page::{Page, PageId, PageStore};
use crate::webpage::WebpageOps;
use crate::CrawlError;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, Notify};

/// How long a worker waits for a frontier/counter change before re-checking
/// termination itself. Guards against the narrow window between releasing
/// the lock and registering as a `Notify` waiter (spec.md §9 accepts an
/// equivalent busy-wait; this bounds it instead of spinning unbounded).
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// One crawler worker's loop body (spec.md §4.3). Pops a page, expands it
/// if shallow enough, and repeats until the global termination condition
/// holds.
pub async fn run_worker(
    state: Arc<Mutex<CrawlState>>,
    notify: Arc<Notify>,
    webpage: Arc<WebpageOps>,
    store: Arc<dyn PageStore + Send + Sync>,
    max_depth: u32,
) -> Result<(), CrawlError> {
    loop {
        let Some((id, page)) = next_page(&state, &notify).await else {
            return Ok(());
        };

        tracing::debug!(id = %id, depth = page.depth, url = %page.url, "expanding page");

        if page.depth < max_depth {
            for link in webpage.extract_links(&page.html, &page.url) {
                if !webpage.is_internal(&link) {
                    continue;
                }
                expand_link(&state, &notify, &webpage, &store, &link, page.depth + 1).await?;
            }
        }

        {
            let mut guard = state.lock().await;
            guard.pages_retrieved += 1;
        }
        notify.notify_waiters();
    }
}

/// Pops the next frontier entry, waiting for a signal when the frontier is
/// momentarily empty but the crawl hasn't terminated (spec.md §9's
/// condition-variable re-architecture of the original's busy-wait).
async fn next_page(
    state: &Mutex<CrawlState>,
    notify: &Notify,
) -> Option<(PageId, Page)> {
    loop {
        {
            let mut guard = state.lock().await;
            if let Some(item) = guard.frontier.pop_front() {
                return Some(item);
            }
            if guard.is_terminal() {
                return None;
            }
        }
        let _ = tokio::time::timeout(POLL_INTERVAL, notify.notified()).await;
    }
}

/// Processes one candidate URL discovered while expanding a page
/// (spec.md §4.3 step 4, §5's permitted fetch-outside-the-lock relaxation).
///
/// The seen-set admission is split into a tentative claim (inserted under
/// the lock before the fetch) and a commit-or-rollback after the fetch
/// completes: this lets the network I/O happen outside the crawl lock
/// while still guaranteeing no two workers fetch the same URL
/// concurrently, and a failed fetch never leaves a stale claim behind.
async fn expand_link(
    state: &Mutex<CrawlState>,
    notify: &Notify,
    webpage: &WebpageOps,
    store: &Arc<dyn PageStore + Send + Sync>,
    url: &str,
    depth: u32,
) -> Result<(), CrawlError> {
    let claimed = {
        let mut guard = state.lock().await;
        if guard.seen.contains(url) {
            false
        } else {
            guard.seen.insert(url.to_string());
            true
        }
    };
    if !claimed {
        return Ok(());
    }

    match webpage.fetch(url).await {
        Ok(html) => {
            let page = Page::new(url.to_string(), depth, html);
            let id = {
                let mut guard = state.lock().await;
                let id = guard.next_id();
                guard.frontier.push_back((id, page.clone()));
                guard.pages_added += 1;
                id
            };

            store
                .save(id, &page)
                .map_err(|source| CrawlError::PageSave { id: id.0, source })?;

            notify.notify_waiters();
            Ok(())
        }
        Err(err) => {
            tracing::warn!(url, error = %err, "fetch failed, discarding url");
            let mut guard = state.lock().await;
            guard.seen.remove(url);
            Ok(())
        }
    }
}

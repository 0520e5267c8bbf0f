use crate::page::{Page, PageId};
use std::collections::{HashSet, VecDeque};

/// Everything the crawl lock guards: the frontier, the seen-set, the page
/// ID counter, and the two termination counters (spec.md §5).
///
/// Replaces the original's module-private globals (`qp`, `hp`,
/// `pages_added`, `pages_retrieved`, `id`) with one value a test can
/// construct fresh, per spec.md §9's "module-private global state →
/// explicit container value" re-architecture note.
pub struct CrawlState {
    pub frontier: VecDeque<(PageId, Page)>,
    pub seen: HashSet<String>,
    next_id: u32,
    pub pages_added: u32,
    pub pages_retrieved: u32,
}

impl CrawlState {
    pub fn new() -> Self {
        Self::with_seen_capacity(0)
    }

    /// Presizes the seen-set to `capacity`, matching the original's fixed
    /// `hsize` hash table size (spec.md §9's "module-private globals" note;
    /// here it's just a `HashSet::with_capacity` hint, not a hard bound).
    pub fn with_seen_capacity(capacity: usize) -> Self {
        Self {
            frontier: VecDeque::new(),
            seen: HashSet::with_capacity(capacity),
            next_id: 1,
            pages_added: 0,
            pages_retrieved: 0,
        }
    }

    /// Hands out the next dense, monotonically increasing page ID.
    /// Must only be called while the caller holds the crawl lock.
    pub fn next_id(&mut self) -> PageId {
        let id = PageId(self.next_id);
        self.next_id += 1;
        id
    }

    /// spec.md §4.3's global termination condition: the frontier is empty
    /// and every admitted page has been fully expanded.
    pub fn is_terminal(&self) -> bool {
        self.frontier.is_empty() && self.pages_retrieved >= self.pages_added
    }
}

impl Default for CrawlState {
    fn default() -> Self {
        Self::new()
    }
}

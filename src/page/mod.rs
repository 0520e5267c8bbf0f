//! Flat-file page storage: saving and loading crawled pages by numeric id.
//!
//! One file per page, named after its id, directly under the page
//! directory (spec.md §6.1). [`FsPageStore`] is the only backend; unlike a
//! database-fronted crawler, the wire format here is the deliverable, not
//! an implementation detail hidden behind the trait.

mod fs_store;
mod record;

pub use fs_store::FsPageStore;
pub use record::{Page, PageId};

use crate::PageStoreError;

/// Storage for crawled pages, keyed by dense [`PageId`].
pub trait PageStore {
    /// Persists `page` under `id`. Fatal to the crawler on failure
    /// (spec.md §7).
    fn save(&self, id: PageId, page: &Page) -> Result<(), PageStoreError>;

    /// Loads the page stored under `id`. Fatal to the indexer, but only
    /// skips the one document for the querier (spec.md §7).
    fn load(&self, id: PageId) -> Result<Page, PageStoreError>;

    /// True if a page file for `id` exists.
    fn exists(&self, id: PageId) -> bool;

    /// All ids currently present, ascending numerically (not lexically).
    fn ids(&self) -> Result<Vec<PageId>, PageStoreError>;
}

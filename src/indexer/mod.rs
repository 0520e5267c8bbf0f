//! Builds the inverted index from a page store (spec.md §4.4).
//!
//! Single-threaded: load pages in ascending ID order, tokenize and
//! normalize their words, and bump postings. No concurrency primitive is
//! needed here — only the crawler shares mutable state across workers.

use crate::index::{Index, IndexEntry};
use crate::page::{PageId, PageStore};
use crate::webpage::extract_words;
use crate::PageStoreError;

/// Builds an [`Index`] from every page in `store`, in ascending page-ID
/// order (spec.md §4.4 step 1).
pub fn build_index(store: &dyn PageStore) -> Result<Index, PageStoreError> {
    let ids = store.ids()?;
    let mut index = Index::new();
    let mut total_words: u64 = 0;

    for id in ids {
        let page = store.load(id)?;
        tracing::info!(page_id = %id, url = %page.url, "loading page");

        for raw_word in extract_words(&page.html) {
            if let Some(word) = normalize_word(&raw_word) {
                index
                    .entry(word.clone())
                    .or_insert_with(|| IndexEntry::new(word))
                    .record(id);
                total_words += 1;
            }
        }
    }

    tracing::info!(total_words, entries = index.len(), "index built");
    Ok(index)
}

/// Runs the indexer end-to-end: build then save (spec.md §4.4).
pub fn run_indexer(
    store: &dyn PageStore,
    index_store: &dyn crate::index::IndexStore,
) -> Result<(), crate::TseError> {
    let index = build_index(store)?;
    index_store.save(&index)?;
    Ok(())
}

/// Accepts a word iff its length is >= 3 and every character is ASCII
/// alphabetic (spec.md §4.4.1), folding it to lowercase. Anything else is
/// discarded silently.
fn normalize_word(raw: &str) -> Option<String> {
    if raw.len() < 3 || !raw.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(raw.to_ascii_lowercase())
}

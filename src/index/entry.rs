use crate::page::PageId;

/// A single `(doc, count)` posting inside an [`IndexEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posting {
    pub doc_id: PageId,
    pub count: u32,
}

/// All postings for one word, in first-occurrence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub word: String,
    pub postings: Vec<Posting>,
}

impl IndexEntry {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            postings: Vec::new(),
        }
    }

    /// Adds one occurrence of the word in `doc_id`, creating a new posting
    /// if this is the first time the word appears in that document, or
    /// bumping the existing posting's count otherwise. New documents are
    /// appended, preserving the order documents were first seen in.
    pub fn record(&mut self, doc_id: PageId) {
        if let Some(posting) = self.postings.iter_mut().find(|p| p.doc_id == doc_id) {
            posting.count += 1;
        } else {
            self.postings.push(Posting { doc_id, count: 1 });
        }
    }
}

/// The full inverted index: word -> entry. Word lookup is by exact match
/// (post-normalization); insertion order of entries is not significant —
/// only posting order within an entry is.
pub type Index = std::collections::HashMap<String, IndexEntry>;

use crate::index::{Index, IndexEntry, IndexStore, Posting};
use crate::page::PageId;
use crate::IndexStoreError;
use std::io::{BufRead, Write as _};
use std::path::PathBuf;

/// Flat-text [`IndexStore`]: one line per word, written as
/// `<word> <doc-id> <count> <doc-id> <count> ...` (spec.md §6.2).
#[derive(Debug, Clone)]
pub struct FsIndexStore {
    path: PathBuf,
}

impl FsIndexStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl IndexStore for FsIndexStore {
    fn save(&self, index: &Index) -> Result<(), IndexStoreError> {
        let mut file = std::fs::File::create(&self.path)?;
        for entry in index.values() {
            write!(file, "{} ", entry.word)?;
            for posting in &entry.postings {
                write!(file, "{} {} ", posting.doc_id, posting.count)?;
            }
            writeln!(file)?;
        }
        Ok(())
    }

    fn load(&self) -> Result<Index, IndexStoreError> {
        let file = std::fs::File::open(&self.path)?;
        let mut index = Index::new();
        for (line_no, line) in std::io::BufReader::new(file).lines().enumerate() {
            let line = line?;
            match parse_line(&line) {
                Some(entry) => {
                    index.insert(entry.word.clone(), entry);
                }
                None => {
                    if !line.trim().is_empty() {
                        tracing::warn!(
                            path = %self.path.display(),
                            line = line_no + 1,
                            "skipping malformed index line",
                        );
                    }
                }
            }
        }
        Ok(index)
    }
}

/// Parses one index line. A lone word with no trailing `(id, count)`
/// tokens is a legal zero-posting entry (spec.md §4.2); a trailing
/// odd-length token run is malformed and the line is skipped, matching
/// spec.md §7's "a tolerant parser SHOULD validate and skip" guidance —
/// the original C loader does not validate this and will read garbage
/// past a truncated line.
fn parse_line(line: &str) -> Option<IndexEntry> {
    let mut tokens = line.split_whitespace();
    let word = tokens.next()?;
    let mut entry = IndexEntry::new(word);

    let rest: Vec<&str> = tokens.collect();
    if rest.len() % 2 != 0 {
        return None;
    }

    for pair in rest.chunks_exact(2) {
        let id: u32 = pair[0].parse().ok()?;
        let count: u32 = pair[1].parse().ok()?;
        entry.postings.push(Posting {
            doc_id: PageId(id),
            count,
        });
    }

    Some(entry)
}

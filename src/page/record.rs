use std::fmt;

/// Dense, monotonically assigned identifier for a crawled page.
///
/// Page 1 is always the seed; ids are handed out in discovery order under
/// the crawl lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PageId {
    fn from(id: u32) -> Self {
        PageId(id)
    }
}

/// A fetched webpage as stored on disk: the raw URL it was fetched from,
/// its BFS depth, and the raw HTML body.
///
/// `url` is the byte-exact string used everywhere for identity (SeenSet,
/// dedup); it is never re-normalized after being fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub url: String,
    pub depth: u32,
    pub html: String,
}

impl Page {
    pub fn new(url: String, depth: u32, html: String) -> Self {
        Self { url, depth, html }
    }
}

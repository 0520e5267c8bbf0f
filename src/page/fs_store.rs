use crate::page::{Page, PageId, PageStore};
use crate::PageStoreError;
use std::io::Read as _;
use std::io::Write as _;
use std::path::{Path, PathBuf};

/// Flat-file [`PageStore`]: one file per page, named after its numeric id,
/// directly under the page directory. This is the only storage backend the
/// crawler/indexer/querier ever use — the on-disk format is fixed (spec.md
/// §6.1), so there is no need for a second implementation the way a
/// database-backed crawler might swap SQLite for Postgres.
#[derive(Debug, Clone)]
pub struct FsPageStore {
    dir: PathBuf,
}

impl FsPageStore {
    /// Opens (without creating) a page store rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates `dir` if it does not already exist, matching the original
    /// crawler's `mkdir`-if-`stat`-fails behavior.
    pub fn create_dir_if_missing(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        if !dir.is_dir() {
            std::fs::create_dir_all(&dir)?;
        }
        Ok(Self { dir })
    }

    fn path_for(&self, id: PageId) -> PathBuf {
        self.dir.join(id.0.to_string())
    }
}

impl PageStore for FsPageStore {
    fn save(&self, id: PageId, page: &Page) -> Result<(), PageStoreError> {
        let path = self.path_for(id);
        let mut file = std::fs::File::create(&path)?;
        write!(
            file,
            "{}\n{}\n{}\n{}",
            page.url,
            page.depth,
            page.html.len(),
            page.html
        )?;
        Ok(())
    }

    fn load(&self, id: PageId) -> Result<Page, PageStoreError> {
        let path = self.path_for(id);
        let mut content = Vec::new();
        std::fs::File::open(&path)?.read_to_end(&mut content)?;
        parse_page(&path, &content)
    }

    fn exists(&self, id: PageId) -> bool {
        self.path_for(id).is_file()
    }

    /// Enumerates ids present in the directory, filtering out dotfiles and
    /// anything whose name doesn't parse as a `u32`, matching the original
    /// indexer's `readdir` + skip-dotfiles + `atoi` loop.
    fn ids(&self) -> Result<Vec<PageId>, PageStoreError> {
        if !self.dir.is_dir() {
            return Err(PageStoreError::Malformed(
                self.dir.clone(),
                "page directory does not exist".to_string(),
            ));
        }

        let mut ids = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.starts_with('.') {
                continue;
            }
            if let Ok(id) = name.parse::<u32>() {
                ids.push(PageId(id));
            }
        }
        ids.sort();
        Ok(ids)
    }
}

/// Parses the page-file wire format: `<url>\n<depth>\n<html-length>\n<html>`.
///
/// The url line is read up to the first whitespace, matching `pageload`'s
/// `fscanf("%s\n", url)`; the html body is truncated (or short-read) to
/// exactly `html-length` *bytes* (spec.md §4.1), matching the original's
/// `fgetc` loop that stops at `html_length` characters or EOF, whichever
/// comes first. Truncation operates on bytes, not `char`s, since
/// `html-length` is declared as a byte count; a cut that lands inside a
/// multi-byte UTF-8 sequence is repaired with a lossy replacement rather
/// than rejected outright.
fn parse_page(path: &Path, content: &[u8]) -> Result<Page, PageStoreError> {
    let newline_at = |buf: &[u8], from: usize| -> Option<usize> {
        buf[from..].iter().position(|&b| b == b'\n').map(|i| from + i)
    };

    let url_end = newline_at(content, 0).ok_or_else(|| malformed(path, "missing url line"))?;
    let url_line = std::str::from_utf8(&content[..url_end])
        .map_err(|_| malformed(path, "url line is not valid UTF-8"))?;
    let url = url_line
        .split_whitespace()
        .next()
        .ok_or_else(|| malformed(path, "empty url line"))?
        .to_string();

    let depth_start = url_end + 1;
    let depth_end =
        newline_at(content, depth_start).ok_or_else(|| malformed(path, "missing depth line"))?;
    let depth: u32 = std::str::from_utf8(&content[depth_start..depth_end])
        .ok()
        .map(str::trim)
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| malformed(path, "depth is not a valid integer"))?;

    let length_start = depth_end + 1;
    let length_end = newline_at(content, length_start)
        .ok_or_else(|| malformed(path, "missing html-length line"))?;
    let html_length: usize = std::str::from_utf8(&content[length_start..length_end])
        .ok()
        .map(str::trim)
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| malformed(path, "html-length is not a valid integer"))?;

    let html_start = length_end + 1;
    let html_end = content.len().min(html_start + html_length);
    let html_bytes = content.get(html_start..html_end).unwrap_or(&[]);
    let html = String::from_utf8_lossy(html_bytes).into_owned();

    Ok(Page::new(url, depth, html))
}

fn malformed(path: &Path, msg: &str) -> PageStoreError {
    PageStoreError::Malformed(path.to_path_buf(), msg.to_string())
}

//! Filling in and printing ranked results (spec.md §4.5.4).
//!
//! Output format recovered from `original_source/querier/query.c`'s
//! `get_metadata` (title/description extraction) and its final print
//! loop (`title: %s` / `rank:%d doc:%d : %s` / snippet line).

use crate::page::PageStore;
use crate::query::eval::RankedDoc;
use std::io::{self, Write};

const SNIPPET_MAX_BYTES: usize = 128;
const TITLE_OPEN: &str = "<title>";
const TITLE_CLOSE: &str = "</title>";
const META_DESCRIPTION: &str = "<meta name=\"description\"";
const CONTENT_ATTR: &str = "content=\"";

/// Loads url/title/snippet for each doc from `store` (a load failure is
/// logged and the doc is still ranked and printed, per spec.md §7),
/// stable-sorts by score descending, and writes the result in the
/// original's print format.
pub fn present(
    mut docs: Vec<RankedDoc>,
    store: &dyn PageStore,
    mut output: impl Write,
) -> io::Result<()> {
    for doc in &mut docs {
        match store.load(doc.doc_id) {
            Ok(page) => {
                doc.url = Some(page.url);
                doc.title = extract_title(&page.html);
                doc.snippet = extract_snippet(&page.html);
            }
            Err(err) => {
                tracing::warn!(
                    doc_id = %doc.doc_id,
                    error = %err,
                    "failed to load page for presentation; ranking it anyway",
                );
            }
        }
    }

    docs.sort_by(|a, b| b.score.cmp(&a.score));

    for doc in &docs {
        writeln!(output, "title: {}", doc.title.as_deref().unwrap_or(""))?;
        writeln!(
            output,
            "rank:{} doc:{} : {}",
            doc.score,
            doc.doc_id,
            doc.url.as_deref().unwrap_or("")
        )?;
        writeln!(output, "{}...", doc.snippet.as_deref().unwrap_or(""))?;
        writeln!(output)?;
    }
    Ok(())
}

/// The substring between the first `<title>` and the next `</title>`.
fn extract_title(html: &str) -> Option<String> {
    let start = html.find(TITLE_OPEN)? + TITLE_OPEN.len();
    let end = start + html[start..].find(TITLE_CLOSE)?;
    Some(html[start..end].to_string())
}

/// The `content="..."` value of the first `<meta name="description">`
/// tag, truncated to 128 bytes (spec.md §4.5.4).
fn extract_snippet(html: &str) -> Option<String> {
    let meta_start = html.find(META_DESCRIPTION)?;
    let content_start = meta_start + html[meta_start..].find(CONTENT_ATTR)? + CONTENT_ATTR.len();
    let content_end = content_start + html[content_start..].find('"')?;
    Some(truncate_bytes(&html[content_start..content_end], SNIPPET_MAX_BYTES).to_string())
}

fn truncate_bytes(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

//! HTML link and word extraction, patterned on the teacher's
//! `crawler::parser::extract_links` (same `scraper` + `url` combination,
//! same href-resolution rules), generalized for tse's simpler needs: tse
//! has no canonical-link or download-attribute handling to replicate
//! (spec.md's `WebpageOps` is only asked for "URLs extracted from HTML",
//! not a curated link set), and word extraction is new — the teacher has
//! no analogue, since its crawler never builds a word index.

use scraper::{Html, Selector};

/// Extracts every `<a href>` target from `html`, resolved against
/// `base_url` into an absolute URL string. Unresolvable or non-HTTP(S)
/// hrefs are silently dropped, matching `webpage_getNextURL`'s behavior of
/// only yielding well-formed URLs.
pub fn extract_links(html: &str, base_url: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let base = match url::Url::parse(base_url) {
        Ok(base) => base,
        Err(_) => return Vec::new(),
    };

    let Ok(a_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&a_selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve(href, &base))
        .collect()
}

fn resolve(href: &str, base: &url::Url) -> Option<String> {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') {
        return None;
    }
    if href.starts_with("javascript:") || href.starts_with("mailto:") || href.starts_with("tel:")
    {
        return None;
    }

    let resolved = base.join(href).ok()?;
    if resolved.scheme() == "http" || resolved.scheme() == "https" {
        Some(resolved.to_string())
    } else {
        None
    }
}

/// Extracts the visible-text word tokens from `html`: every maximal run of
/// ASCII alphabetic characters in the document's rendered text, in
/// document order. Normalization (length filter, lowercasing) is the
/// indexer's job (spec.md §4.4.1) — this stage only tokenizes.
pub fn extract_words(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut words = Vec::new();
    let mut current = String::new();

    for text_node in document.root_element().text() {
        for ch in text_node.chars() {
            if ch.is_ascii_alphabetic() {
                current.push(ch);
            } else if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
}

//! `WebpageOps`: the fetch / link-extraction / word-extraction / internal-
//! classification capability spec.md §1 treats as an external collaborator.
//!
//! Concretely backed by `reqwest` (fetch), `scraper` (HTML parsing for
//! links, title, and word tokens) and `url` (internal/external domain
//! classification). One production implementation; tests point it at a
//! `wiremock` server instead of swapping in a mock backend.

mod extract;
mod ops;

pub use extract::{extract_links, extract_words};
pub use ops::WebpageOps;

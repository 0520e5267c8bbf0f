//! Boolean query evaluator and REPL (spec.md §4.5).
//!
//! Tokenization/validation (`tokenizer`), evaluation over posting lists
//! (`eval`), and presentation (`presentation`) are split the way the
//! original's `query.c` separates `tokenize_query`/`validate_query`,
//! the stack-evaluation loop, and `get_metadata`/the final print loop —
//! but as three Rust modules instead of one file's worth of `static`
//! functions.

mod eval;
mod presentation;
pub mod tokenizer;

pub use eval::{evaluate, RankedDoc};
pub use presentation::present;

use crate::index::Index;
use crate::page::PageStore;
use std::io::{self, BufRead, Write};

/// Raw query lines are truncated to this many bytes, excluding the
/// newline (spec.md §4.5, matching `query.c`'s `MAX_QUERY_LEN - 1`).
pub const MAX_QUERY_LEN: usize = 511;

/// Runs the querier REPL against `index`/`store`: prompt (unless
/// `quiet`), read one line, tokenize, validate, evaluate, present —
/// until EOF (spec.md §4.5).
///
/// Matches `query.c`'s `get_input`: the prompt `> ` is written with no
/// trailing newline before each read, and on EOF a trailing newline is
/// written before returning (suppressed by `quiet`, spec.md §6.3's `-q`).
pub fn run_repl(
    index: &Index,
    store: &dyn PageStore,
    quiet: bool,
    mut input: impl BufRead,
    mut output: impl Write,
) -> io::Result<()> {
    let mut line = String::new();
    loop {
        if !quiet {
            write!(output, "> ")?;
            output.flush()?;
        }

        line.clear();
        let bytes_read = input.read_line(&mut line)?;
        if bytes_read == 0 {
            if !quiet {
                writeln!(output)?;
            }
            return Ok(());
        }

        let trimmed = line.trim_end_matches(['\n', '\r']);
        let truncated = truncate_bytes(trimmed, MAX_QUERY_LEN);
        if truncated.trim().is_empty() {
            continue;
        }

        match tokenizer::tokenize(truncated) {
            Some(tokens) if tokenizer::validate(&tokens) => {
                let ranked = evaluate(&tokens, index);
                present(ranked, store, &mut output)?;
            }
            _ => {
                writeln!(output, "[invalid query]")?;
            }
        }
    }
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

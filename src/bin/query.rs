//! `query <page-dir> <index-file> [-q] [-v|-vv|-vvv]`
//!
//! Thin CLI shell around [`tse::query::run_repl`] (spec.md §6.3).

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tse::index::{FsIndexStore, IndexStore};
use tse::page::FsPageStore;
use tse::query::run_repl;

/// Evaluates boolean AND/OR queries over an inverted index.
#[derive(Parser, Debug)]
#[command(name = "query")]
#[command(version = "1.0.0")]
#[command(about = "Boolean query evaluator over a crawled page store and index", long_about = None)]
struct Cli {
    /// Directory of crawled page files. Must already exist.
    page_dir: PathBuf,

    /// Path to the flat-text index file built by `indexer`.
    index_file: PathBuf,

    /// Suppress the `> ` prompt.
    #[arg(short, long)]
    quiet: bool,

    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    tse::init_logging(cli.verbose);

    if !cli.page_dir.is_dir() {
        eprintln!(
            "query: page directory '{}' does not exist or is not a directory",
            cli.page_dir.display()
        );
        return ExitCode::FAILURE;
    }
    if !cli.index_file.is_file() {
        eprintln!(
            "query: index file '{}' does not exist or is not a regular file",
            cli.index_file.display()
        );
        return ExitCode::FAILURE;
    }

    let store = FsPageStore::new(&cli.page_dir);
    let index_store = FsIndexStore::new(&cli.index_file);

    let index = match index_store.load() {
        Ok(index) => index,
        Err(err) => {
            eprintln!("query: failed to load index: {err}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match run_repl(
        &index,
        &store,
        cli.quiet,
        stdin.lock(),
        stdout.lock(),
    ) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("query: {err}");
            ExitCode::FAILURE
        }
    }
}

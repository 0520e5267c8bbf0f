//! `indexer <page-dir> <index-file> [-v|-vv|-vvv]`
//!
//! Thin CLI shell around [`tse::indexer::run_indexer`] (spec.md §6.3).

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tse::index::FsIndexStore;
use tse::indexer::run_indexer;
use tse::page::FsPageStore;

/// Builds an inverted index from a page store.
#[derive(Parser, Debug)]
#[command(name = "indexer")]
#[command(version = "1.0.0")]
#[command(about = "Builds a word -> (doc, count) inverted index from a page store", long_about = None)]
struct Cli {
    /// Directory of crawled page files. Must already exist.
    page_dir: PathBuf,

    /// Path to write the flat-text index to.
    index_file: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    tse::init_logging(cli.verbose);

    if !cli.page_dir.is_dir() {
        eprintln!(
            "indexer: page directory '{}' does not exist or is not a directory",
            cli.page_dir.display()
        );
        return ExitCode::FAILURE;
    }

    let store = FsPageStore::new(&cli.page_dir);
    let index_store = FsIndexStore::new(&cli.index_file);

    match run_indexer(&store, &index_store) {
        Ok(()) => {
            println!("index written to {}", cli.index_file.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("indexer: {err}");
            ExitCode::FAILURE
        }
    }
}

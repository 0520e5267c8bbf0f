//! End-to-end indexer + querier tests over a hand-written page store
//! (spec.md §8's invariants 5-8 and end-to-end scenarios 3-6), exercised
//! through the same public API the `indexer` and `query` binaries drive.

use tse::index::{FsIndexStore, IndexStore};
use tse::indexer::build_index;
use tse::page::{FsPageStore, Page, PageId, PageStore};
use tse::query::run_repl;

fn page_dir_with(pages: &[(u32, &str, u32, &str)]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let store = FsPageStore::new(dir.path());
    for (id, url, depth, html) in pages {
        store
            .save(PageId(*id), &Page::new((*url).to_string(), *depth, (*html).to_string()))
            .unwrap();
    }
    dir
}

/// spec.md §8 scenario 3: a single page's word counts normalize as
/// documented, dropping short and non-alphabetic tokens.
#[test]
fn indexer_normalizes_words_per_scenario_3() {
    let dir = page_dir_with(&[(
        1,
        "https://example.com/",
        0,
        "the quick Brown fox THE fox bb abc",
    )]);
    let store = FsPageStore::new(dir.path());

    let index = build_index(&store).unwrap();

    assert_eq!(index["the"].postings[0].count, 2);
    assert_eq!(index["quick"].postings[0].count, 1);
    assert_eq!(index["brown"].postings[0].count, 1);
    assert_eq!(index["fox"].postings[0].count, 2);
    assert_eq!(index["abc"].postings[0].count, 1);
    assert!(!index.contains_key("bb"));
}

/// spec.md §8 invariant 6: the on-disk index is a round-trip fixed point
/// up to entry/posting order (posting order within an entry is stable).
#[test]
fn index_round_trips_through_the_file_format() {
    let dir = page_dir_with(&[
        (1, "https://example.com/1", 0, "dog dog cat"),
        (2, "https://example.com/2", 1, "dog fish fish fish"),
    ]);
    let page_store = FsPageStore::new(dir.path());
    let built = build_index(&page_store).unwrap();

    let index_path = dir.path().join("index.txt");
    let index_store = FsIndexStore::new(&index_path);
    index_store.save(&built).unwrap();
    let loaded = index_store.load().unwrap();

    assert_eq!(loaded.len(), built.len());
    for (word, entry) in &built {
        assert_eq!(&loaded[word].postings, &entry.postings);
    }
}

/// spec.md §8 scenario 4: `dog and cat or fish` intersects dog/cat (AND
/// binds tighter) then unions the result with fish.
#[test]
fn query_and_binds_tighter_than_or() {
    let dir = page_dir_with(&[
        (1, "https://example.com/1", 0, "dog dog cat"),
        (2, "https://example.com/2", 0, "dog cat cat cat"),
        (3, "https://example.com/3", 0, "cat cat cat cat cat fish fish fish fish"),
    ]);
    let page_store = FsPageStore::new(dir.path());
    let built = build_index(&page_store).unwrap();
    let index_path = dir.path().join("index.txt");
    let index_store = FsIndexStore::new(&index_path);
    index_store.save(&built).unwrap();
    let index = index_store.load().unwrap();

    // dog:{1:2,2:1}, cat:{1:1,2:3,3:5}, fish:{3:4}
    let mut output = Vec::new();
    run_repl(
        &index,
        &page_store,
        true,
        "dog and cat or fish\n".as_bytes(),
        &mut output,
    )
    .unwrap();
    let text = String::from_utf8(output).unwrap();

    // dog∩cat keeps docs 1 (min(2,1)=1) and 2 (min(1,3)=1); unioned with
    // fish (only doc 3, score 4) adds doc 3 untouched.
    let rank_lines: Vec<&str> = text.lines().filter(|l| l.starts_with("rank:")).collect();
    assert_eq!(rank_lines.len(), 3);
    assert!(text.contains("rank:1 doc:1"));
    assert!(text.contains("rank:1 doc:2"));
    assert!(text.contains("rank:4 doc:3"));
}

/// spec.md §8 scenario 5: `the and and dog` is invalid (double operator).
#[test]
fn query_double_operator_is_invalid() {
    let dir = page_dir_with(&[(1, "https://example.com/", 0, "the dog")]);
    let page_store = FsPageStore::new(dir.path());
    let built = build_index(&page_store).unwrap();
    let index_path = dir.path().join("index.txt");
    let index_store = FsIndexStore::new(&index_path);
    index_store.save(&built).unwrap();
    let index = index_store.load().unwrap();

    let mut output = Vec::new();
    run_repl(
        &index,
        &page_store,
        true,
        "the and and dog\n".as_bytes(),
        &mut output,
    )
    .unwrap();

    assert_eq!(String::from_utf8(output).unwrap().trim(), "[invalid query]");
}

/// spec.md §8 scenario 6: implicit AND between two adjacent known words.
#[test]
fn query_implicit_and_between_two_words() {
    let dir = page_dir_with(&[
        (1, "https://example.com/1", 0, "hello hello hello world"),
        (2, "https://example.com/2", 0, "hello world world world world world"),
    ]);
    let page_store = FsPageStore::new(dir.path());
    let built = build_index(&page_store).unwrap();
    let index_path = dir.path().join("index.txt");
    let index_store = FsIndexStore::new(&index_path);
    index_store.save(&built).unwrap();
    let index = index_store.load().unwrap();

    // hello:{1:3,2:1}, world:{1:1,2:5}
    let mut output = Vec::new();
    run_repl(
        &index,
        &page_store,
        true,
        "hello   world\n".as_bytes(),
        &mut output,
    )
    .unwrap();
    let text = String::from_utf8(output).unwrap();

    assert!(text.contains("rank:1 doc:1"));
    assert!(text.contains("rank:1 doc:2"));
}

/// spec.md §7: a load failure for one doc during presentation still ranks
/// it; it's just missing url/title/snippet.
#[test]
fn query_presentation_skips_a_missing_page_but_still_ranks_it() {
    let dir = tempfile::tempdir().unwrap();
    let page_store = FsPageStore::new(dir.path());
    // Only page 1 is actually saved; the index will reference page 2 too.
    page_store
        .save(
            PageId(1),
            &Page::new("https://example.com/1".into(), 0, "dog".into()),
        )
        .unwrap();

    let mut index = tse::index::Index::new();
    let mut entry = tse::index::IndexEntry::new("dog");
    entry.record(PageId(1));
    entry.record(PageId(2));
    index.insert("dog".to_string(), entry);

    let mut output = Vec::new();
    run_repl(&index, &page_store, true, "dog\n".as_bytes(), &mut output).unwrap();
    let text = String::from_utf8(output).unwrap();

    assert!(text.contains("doc:1"));
    assert!(text.contains("doc:2"));
}

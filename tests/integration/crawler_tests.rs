//! End-to-end crawler tests against a mock site (spec.md §8's invariants
//! 1-4 and end-to-end scenarios 1-2), exercised through the same public
//! API a `crawler` binary invocation drives.

use std::sync::Arc;
use std::time::Duration;
use tse::config::UserAgentConfig;
use tse::crawler::run_crawl;
use tse::page::{FsPageStore, PageId, PageStore};
use tse::webpage::WebpageOps;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn user_agent() -> UserAgentConfig {
    UserAgentConfig {
        name: "tse-crawler-tests/1.0".to_string(),
        contact: "https://example.invalid/about".to_string(),
    }
}

/// spec.md §8 invariant 2: PageIDs form the set {1..N} where N = |SeenSet|
/// at termination, across a small internal subgraph with a branch and a
/// shared leaf reached by two different parents.
#[tokio::test]
async fn crawl_produces_dense_ids_and_respects_depth_bound() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"<html><body>
                <a href="{base}/a">a</a>
                <a href="{base}/b">b</a>
            </body></html>"#
        )))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"<html><body><a href="{base}/leaf">leaf</a></body></html>"#
        )))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"<html><body><a href="{base}/leaf">leaf again</a></body></html>"#
        )))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/leaf"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><body>dead end, no further internal links</body></html>"#,
        ))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let store: Arc<dyn PageStore + Send + Sync> =
        Arc::new(FsPageStore::create_dir_if_missing(dir.path()).unwrap());
    let webpage = Arc::new(WebpageOps::new(&base, &user_agent(), Duration::from_secs(5)).unwrap());

    let pages_saved = run_crawl(base.clone(), 2, 3, webpage, store.clone())
        .await
        .unwrap();

    // seed + /a + /b + /leaf, leaf admitted only once despite two parents.
    assert_eq!(pages_saved, 4);

    let mut ids = store.ids().unwrap();
    ids.sort();
    assert_eq!(ids, vec![PageId(1), PageId(2), PageId(3), PageId(4)]);

    let depths: Vec<u32> = ids.iter().map(|id| store.load(*id).unwrap().depth).collect();
    assert_eq!(depths[0], 0); // seed
    assert!(depths[1..].iter().all(|&d| d == 1 || d == 2));

    // No page exceeds the configured max depth.
    assert!(depths.iter().all(|&d| d <= 2));
}

/// spec.md §8 scenario 1: max_depth = 0 saves only the seed.
#[tokio::test]
async fn max_depth_zero_expands_nothing() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><body><a href="/never-followed">x</a></body></html>"#,
        ))
        .mount(&mock_server)
        .await;

    let seed_url = mock_server.uri();
    let dir = tempfile::tempdir().unwrap();
    let store: Arc<dyn PageStore + Send + Sync> =
        Arc::new(FsPageStore::create_dir_if_missing(dir.path()).unwrap());
    let webpage =
        Arc::new(WebpageOps::new(&seed_url, &user_agent(), Duration::from_secs(5)).unwrap());

    let pages_saved = run_crawl(seed_url, 0, 4, webpage, store.clone())
        .await
        .unwrap();

    assert_eq!(pages_saved, 1);
    assert_eq!(store.ids().unwrap(), vec![PageId(1)]);
    assert_eq!(store.load(PageId(1)).unwrap().depth, 0);
}

/// spec.md §7: a non-seed fetch failure is logged and the URL discarded,
/// not fatal to the crawl.
#[tokio::test]
async fn non_seed_fetch_failure_is_skipped_not_fatal() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"<html><body>
                <a href="{base}/broken">broken</a>
                <a href="{base}/ok">ok</a>
            </body></html>"#
        )))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>fine</body></html>"))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let store: Arc<dyn PageStore + Send + Sync> =
        Arc::new(FsPageStore::create_dir_if_missing(dir.path()).unwrap());
    let webpage = Arc::new(WebpageOps::new(&base, &user_agent(), Duration::from_secs(5)).unwrap());

    let pages_saved = run_crawl(base, 1, 2, webpage, store.clone()).await.unwrap();

    // seed + /ok only; /broken never gets a page id.
    assert_eq!(pages_saved, 2);
}

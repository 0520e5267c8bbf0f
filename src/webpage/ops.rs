use crate::config::UserAgentConfig;
use crate::webpage::extract::{extract_links, extract_words};
use crate::WebpageError;
use std::time::Duration;

/// The `WebpageOps` capability: fetch, link/word extraction, and
/// internal/external classification, all bound to one crawl's seed
/// domain. Built once per crawl (the seed URL fixes what "internal"
/// means) and shared across worker tasks behind an `Arc`.
pub struct WebpageOps {
    client: reqwest::Client,
    seed_host: String,
}

impl WebpageOps {
    /// Builds a client carrying the configured user-agent string and
    /// fetch timeout, and fixes "internal" to mean "same host as `seed_url`".
    pub fn new(
        seed_url: &str,
        user_agent: &UserAgentConfig,
        fetch_timeout: Duration,
    ) -> Result<Self, WebpageError> {
        let parsed = url::Url::parse(seed_url)
            .map_err(|e| WebpageError::InvalidUrl(seed_url.to_string(), e))?;
        let seed_host = parsed.host_str().unwrap_or_default().to_lowercase();

        let ua = format!("{} (+{})", user_agent.name, user_agent.contact);
        let client = reqwest::Client::builder()
            .user_agent(ua)
            .timeout(fetch_timeout)
            .build()
            .map_err(WebpageError::ClientBuild)?;

        Ok(Self { client, seed_host })
    }

    /// Fetches `url` and returns its HTML body. A non-2xx status is
    /// surfaced as [`WebpageError::Status`], matching spec.md §7's "non-seed
    /// fetch failure: log, discard URL, continue" (the caller decides what
    /// counts as fatal; for the seed this is propagated as-is).
    pub async fn fetch(&self, url: &str) -> Result<String, WebpageError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| WebpageError::Fetch {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(WebpageError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| WebpageError::Fetch {
            url: url.to_string(),
            source,
        })
    }

    /// A URL is internal iff it parses and its host matches the seed's
    /// host, case-insensitively (spec.md §4.3's `IsInternalURL`).
    pub fn is_internal(&self, url: &str) -> bool {
        url::Url::parse(url)
            .ok()
            .and_then(|parsed| parsed.host_str().map(|h| h.to_lowercase()))
            .map(|host| host == self.seed_host)
            .unwrap_or(false)
    }

    /// Extracts every link target from `html`, resolved against `base_url`.
    pub fn extract_links(&self, html: &str, base_url: &str) -> Vec<String> {
        extract_links(html, base_url)
    }

    /// Extracts raw word tokens from `html` (pre-normalization).
    pub fn extract_words(&self, html: &str) -> Vec<String> {
        extract_words(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_agent() -> UserAgentConfig {
        UserAgentConfig {
            name: "tse-crawler/1.0".to_string(),
            contact: "https://example.invalid/about".to_string(),
        }
    }

    #[test]
    fn classifies_same_host_as_internal() {
        let ops = WebpageOps::new(
            "https://example.com/seed",
            &user_agent(),
            Duration::from_secs(30),
        )
        .unwrap();

        assert!(ops.is_internal("https://example.com/other-page"));
        assert!(ops.is_internal("https://EXAMPLE.COM/mixed-case"));
    }

    #[test]
    fn classifies_other_host_as_external() {
        let ops = WebpageOps::new(
            "https://example.com/seed",
            &user_agent(),
            Duration::from_secs(30),
        )
        .unwrap();

        assert!(!ops.is_internal("https://other.example.org/page"));
        assert!(!ops.is_internal("not a url"));
    }

    #[test]
    fn rejects_an_unparseable_seed_url() {
        let result = WebpageOps::new("not a url", &user_agent(), Duration::from_secs(30));
        assert!(matches!(result, Err(WebpageError::InvalidUrl(_, _))));
    }
}

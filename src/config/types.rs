use serde::Deserialize;

/// Operational configuration for the crawler binary.
///
/// Loaded from an optional TOML file (`--config FILE`); any field absent
/// from the file falls back to its default. Absence of the file entirely
/// is not an error — [`Config::default`] applies.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            crawler: CrawlerConfig::default(),
            user_agent: UserAgentConfig::default(),
        }
    }
}


/// Crawler behavior knobs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Number of concurrent worker tasks (spec.md §4.3 default: 3).
    #[serde(rename = "workers")]
    pub workers: u32,

    /// HTTP request timeout, in seconds.
    #[serde(rename = "fetch-timeout-secs")]
    pub fetch_timeout_secs: u64,

    /// Hash table size hint, kept for fidelity with the original's `hsize`
    /// (1000); the Rust seen-set is a `HashSet` and doesn't need
    /// presizing, but the knob is preserved as a `with_capacity` hint.
    #[serde(rename = "seen-set-capacity-hint")]
    pub seen_set_capacity_hint: usize,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            workers: 3,
            fetch_timeout_secs: 30,
            seen_set_capacity_hint: 1000,
        }
    }
}

/// User agent identification sent with every fetch.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    #[serde(rename = "name")]
    pub name: String,
    #[serde(rename = "contact")]
    pub contact: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            name: "tse-crawler/1.0".to_string(),
            contact: "https://example.invalid/about".to_string(),
        }
    }
}

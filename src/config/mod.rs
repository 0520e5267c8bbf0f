//! Operational configuration for the crawler binary.
//!
//! Loading and parsing a TOML config file is optional ambient behavior not
//! described by the distilled specification's abstract `Config` type; this
//! module gives it a concrete TOML shape, following the same
//! types/validation/parser split as the crate this one was patterned on.
//!
//! ```no_run
//! use tse::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("tse.toml")).unwrap();
//! println!("workers: {}", config.crawler.workers);
//! ```

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{Config, CrawlerConfig, UserAgentConfig};
pub use validation::validate;

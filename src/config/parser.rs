use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and validates a configuration file from the given path.
///
/// Absence of the file is handled by the caller (spec.md §6: `--config` is
/// optional and its absence falls back to [`Config::default`]) — this
/// function is only called once a path has actually been given.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

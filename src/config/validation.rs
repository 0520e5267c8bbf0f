use crate::config::types::{Config, CrawlerConfig, UserAgentConfig};
use crate::ConfigError;

/// Validates the entire configuration.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_user_agent_config(&config.user_agent)?;
    Ok(())
}

fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.workers < 1 {
        return Err(ConfigError::Validation(format!(
            "workers must be >= 1, got {}",
            config.workers
        )));
    }

    if config.fetch_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "fetch-timeout-secs must be > 0".to_string(),
        ));
    }

    Ok(())
}

fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.name.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent name cannot be empty".to_string(),
        ));
    }

    if config.contact.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent contact cannot be empty".to_string(),
        ));
    }

    Ok(())
}

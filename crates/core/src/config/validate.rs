use reqwest::Url;

use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Username is not empty
/// - Base URL parses
/// - Timeouts are not 0
/// - Max delay is not negative
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.credentials.username.is_empty() {
        return Err(ConfigError::ValidationError {
            key: "credentials.username",
            reason: "cannot be empty".to_string(),
        });
    }

    if let Err(e) = Url::parse(&config.client.base_url) {
        return Err(ConfigError::ValidationError {
            key: "client.base_url",
            reason: format!("'{}' is not a valid URL: {}", config.client.base_url, e),
        });
    }

    if config.client.timeout_secs == 0 {
        return Err(ConfigError::ValidationError {
            key: "client.timeout_secs",
            reason: "cannot be 0".to_string(),
        });
    }

    if config.client.connect_timeout_secs == 0 {
        return Err(ConfigError::ValidationError {
            key: "client.connect_timeout_secs",
            reason: "cannot be 0".to_string(),
        });
    }

    let max_delay = config.client.max_delay_hours;
    if max_delay.is_nan() || max_delay < 0.0 {
        return Err(ConfigError::ValidationError {
            key: "client.max_delay_hours",
            reason: format!("{} is not a non-negative number of hours", max_delay),
        });
    }

    Ok(())
}

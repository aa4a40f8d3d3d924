use crate::config::types::{Config, CrawlerConfig, OutputConfig, SiteConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_crawler_config(&config.crawler)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the target site configuration
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let landing = Url::parse(&config.landing_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid landing_url: {}", e)))?;

    if landing.scheme() != "http" && landing.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "landing_url must be http(s), got '{}'",
            config.landing_url
        )));
    }

    if landing.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "landing_url has no host: '{}'",
            config.landing_url
        )));
    }

    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    // An hour between requests is assumed to be a typo, not politeness.
    if config.rate_limit_ms > 60_000 {
        return Err(ConfigError::Validation(format!(
            "rate_limit_ms must be <= 60000, got {}",
            config.rate_limit_ms
        )));
    }

    if let Some(max_letters) = config.max_letters {
        if max_letters == 0 || max_letters > 26 {
            return Err(ConfigError::Validation(format!(
                "max_letters must be between 1 and 26, got {}",
                max_letters
            )));
        }
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.name.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent name cannot be empty".to_string(),
        ));
    }

    if !config.name.chars().all(|c| c.is_alphanumeric() || c == '-') {
        return Err(ConfigError::Validation(format!(
            "user-agent name must contain only alphanumeric characters and hyphens, got '{}'",
            config.name
        )));
    }

    Url::parse(&config.contact_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact_url: {}", e)))?;

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.csv_path.is_empty() {
        return Err(ConfigError::Validation(
            "csv_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

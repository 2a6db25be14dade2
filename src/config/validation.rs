use crate::config::types::{Config, HttpConfig, SiteConfig};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_http_config(&config.http)?;
    Ok(())
}

/// Validates the document location settings
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let base_url = config.parsed_base_url()?;

    if base_url.scheme() != "http" && base_url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url must use http or https, got '{}'",
            config.base_url
        )));
    }

    // Relative paths are joined onto the base, which drops the last segment
    // unless the path ends with a slash.
    if !base_url.path().ends_with('/') {
        return Err(ConfigError::Validation(format!(
            "base-url path must end with '/', got '{}'",
            base_url.path()
        )));
    }

    validate_relative_path("feat-index", &config.feat_index)?;

    if config.menu_class.is_empty() || config.menu_class.contains(char::is_whitespace) {
        return Err(ConfigError::Validation(format!(
            "menu-class must be a single CSS class name, got '{}'",
            config.menu_class
        )));
    }

    Ok(())
}

/// Validates HTTP client settings
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 || config.timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be between 1 and 300, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 || config.connect_timeout_secs > config.timeout_secs {
        return Err(ConfigError::Validation(format!(
            "connect-timeout-secs must be between 1 and timeout-secs ({}), got {}",
            config.timeout_secs, config.connect_timeout_secs
        )));
    }

    Ok(())
}

/// Validates a document path that is resolved against the base URL
fn validate_relative_path(name: &str, path: &str) -> Result<(), ConfigError> {
    if path.is_empty() {
        return Err(ConfigError::Validation(format!("{} cannot be empty", name)));
    }

    if path.starts_with('/') || path.contains("://") {
        return Err(ConfigError::Validation(format!(
            "{} must be relative to base-url, got '{}'",
            name, path
        )));
    }

    Ok(())
}

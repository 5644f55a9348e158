use crate::config::CrawlOptions;
use crate::ConfigError;

/// Validates crawl options before any crawling begins
///
/// # Validation Rules
///
/// - The start URL must use the http or https scheme and have a host.
/// - `max_bytes`, `max_pages`, and `timeout_secs` must all be at least 1.
///
/// # Returns
///
/// * `Ok(())` - Options are valid
/// * `Err(ConfigError)` - The run must abort before crawling
pub fn validate(options: &CrawlOptions) -> Result<(), ConfigError> {
    let scheme = options.start_url.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidScheme(scheme.to_string()));
    }

    if options.start_url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "{} has no host",
            options.start_url
        )));
    }

    if options.max_bytes == 0 {
        return Err(ConfigError::InvalidLimit(
            "max-bytes must be at least 1".to_string(),
        ));
    }

    if options.max_pages == 0 {
        return Err(ConfigError::InvalidLimit(
            "max-pages must be at least 1".to_string(),
        ));
    }

    if options.timeout_secs == 0 {
        return Err(ConfigError::InvalidLimit(
            "timeout must be at least 1 second".to_string(),
        ));
    }

    Ok(())
}

//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use regex::Regex;

/// Longest accepted download timeout, in seconds.
const MAX_TIMEOUT_SECS: u64 = 600;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_credential("client_id", &config.account.client_id)?;
    validate_credential("client_secret", &config.account.client_secret)?;
    validate_user_agent(&config.account.user_agent)?;
    validate_timeout(config.options.download_timeout_secs)?;

    Ok(())
}

/// Validate one half of the credential pair.
pub fn validate_credential(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::MissingConfig(format!(
            "{} (pass --{} or set it in the config file)",
            field,
            field.replace('_', "-")
        )));
    }

    if value.chars().any(char::is_whitespace) {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: "must not contain whitespace".to_string(),
        });
    }

    Ok(())
}

/// Validate the API user agent string.
pub fn validate_user_agent(user_agent: &str) -> Result<()> {
    if user_agent.trim().is_empty() {
        return Err(Error::MissingConfig("user_agent".to_string()));
    }

    Ok(())
}

/// Validate the download timeout.
pub fn validate_timeout(secs: u64) -> Result<()> {
    if secs == 0 || secs > MAX_TIMEOUT_SECS {
        return Err(Error::ConfigValidation {
            field: "download_timeout_secs".to_string(),
            message: format!("must be between 1 and {} (got {})", MAX_TIMEOUT_SECS, secs),
        });
    }

    Ok(())
}

/// Extract the post ID from a post URL.
///
/// Accepts any URL containing `/comments/<id>`.
pub fn parse_post_id(input: &str) -> Result<String> {
    let post_pattern = Regex::new(r"/comments/([a-zA-Z0-9]+)")
        .map_err(|e| Error::Config(format!("Invalid post URL pattern: {}", e)))?;

    post_pattern
        .captures(input.trim())
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str().to_string())
        .ok_or_else(|| Error::InvalidPostUrl(input.to_string()))
}

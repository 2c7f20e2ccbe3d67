//! Configuration validation.

use crate::config::types::JexvacConfig;
use crate::errors::ConfigError;

/// Validate the effective configuration.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidConfiguration`] when the host is blank, the
/// port range is empty, the request timeout is zero or `max_pages` is zero.
pub fn validate_config(config: &JexvacConfig) -> Result<(), ConfigError> {
    if config.service.host().trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "service.host must not be empty".to_string(),
        });
    }

    let range = config.service.port_range();
    if range.is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "service port range {}..{} is empty",
                range.start, range.end
            ),
        });
    }

    if config.service.request_timeout().is_zero() {
        return Err(ConfigError::InvalidConfiguration {
            message: "service.request_timeout_secs must be greater than 0".to_string(),
        });
    }

    if config.listing.max_pages() == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "listing.max_pages must be greater than 0 when set".to_string(),
        });
    }

    Ok(())
}

//! Configuration loading and merging logic.
//!
//! Loads `~/.jexvac/config.toml` and `./.jexvac/config.toml`, with the
//! project file overriding the user file field by field.

use crate::config::types::{AuthConfig, JexvacConfig, ListingConfig, ServiceConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read or parsed, or
/// if the merged configuration fails validation. Missing files are not errors.
pub fn load_hierarchy() -> Result<JexvacConfig, ConfigError> {
    let mut config = JexvacConfig::default();

    if let Some(path) = user_config_path()
        && let Some(user_config) = load_config_file(&path)?
    {
        config = merge_configs(config, user_config);
    }

    if let Some(project_config) = load_config_file(&project_config_path()?)? {
        config = merge_configs(config, project_config);
    }

    validate_config(&config)?;

    Ok(config)
}

fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".jexvac").join("config.toml"))
}

fn project_config_path() -> Result<PathBuf, ConfigError> {
    Ok(std::env::current_dir()?.join(".jexvac").join("config.toml"))
}

/// Load a configuration file, returning `None` if it does not exist.
pub fn load_config_file(path: &Path) -> Result<Option<JexvacConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(ConfigError::IoError { source: e }),
    };

    let config = toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Merge two configurations, with `override_config` taking precedence for
/// every field it sets.
pub fn merge_configs(base: JexvacConfig, override_config: JexvacConfig) -> JexvacConfig {
    JexvacConfig {
        service: ServiceConfig {
            host: override_config.service.host.or(base.service.host),
            port_range_start: override_config
                .service
                .port_range_start
                .or(base.service.port_range_start),
            port_range_end: override_config
                .service
                .port_range_end
                .or(base.service.port_range_end),
            request_timeout_secs: override_config
                .service
                .request_timeout_secs
                .or(base.service.request_timeout_secs),
        },
        listing: ListingConfig {
            page_limit: override_config
                .listing
                .page_limit
                .or(base.listing.page_limit),
            max_pages: override_config.listing.max_pages.or(base.listing.max_pages),
        },
        auth: AuthConfig {
            token_file: override_config.auth.token_file.or(base.auth.token_file),
        },
    }
}

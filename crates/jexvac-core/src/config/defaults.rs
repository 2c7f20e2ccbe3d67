//! Default values and effective-value accessors for configuration types.

use crate::config::types::{AuthConfig, ListingConfig, ServiceConfig};
use std::ops::Range;
use std::path::PathBuf;
use std::time::Duration;

/// Host of the local Joplin Web Clipper service.
pub const DEFAULT_HOST: &str = "localhost";

/// First port Joplin may bind its clipper service to.
pub const DEFAULT_PORT_RANGE_START: u16 = 41184;

/// End (exclusive) of the ports Joplin may bind to.
pub const DEFAULT_PORT_RANGE_END: u16 = 41194;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Token cache file, relative to the working directory.
pub const DEFAULT_TOKEN_FILE: &str = ".joplin_token";

impl ServiceConfig {
    /// Returns the service host, defaulting to `localhost`.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Returns the inclusive-exclusive port range probed during discovery.
    pub fn port_range(&self) -> Range<u16> {
        let start = self.port_range_start.unwrap_or(DEFAULT_PORT_RANGE_START);
        let end = self.port_range_end.unwrap_or(DEFAULT_PORT_RANGE_END);
        start..end
    }

    /// Returns the per-request timeout, defaulting to 30 seconds.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }
}

impl ListingConfig {
    /// Returns the configured page limit, if any. Clamping happens at the
    /// point of use, see [`crate::resources::clamp_page_limit`].
    pub fn page_limit(&self) -> Option<u32> {
        self.page_limit
    }

    pub fn max_pages(&self) -> Option<u32> {
        self.max_pages
    }
}

impl AuthConfig {
    /// Returns the token cache path, defaulting to `.joplin_token`.
    pub fn token_file(&self) -> PathBuf {
        self.token_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TOKEN_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JexvacConfig;

    #[test]
    fn test_default_accessors() {
        let config = JexvacConfig::default();
        assert_eq!(config.service.host(), "localhost");
        assert_eq!(config.service.port_range(), 41184..41194);
        assert_eq!(config.service.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.listing.page_limit(), None);
        assert_eq!(config.listing.max_pages(), None);
        assert_eq!(config.auth.token_file(), PathBuf::from(".joplin_token"));
    }

    #[test]
    fn test_partial_port_range_keeps_other_default() {
        let service = ServiceConfig {
            port_range_start: Some(41190),
            ..Default::default()
        };
        assert_eq!(service.port_range(), 41190..41194);
    }
}

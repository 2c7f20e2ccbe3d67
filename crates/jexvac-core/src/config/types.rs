//! Configuration type definitions for jexvac.
//!
//! Every field is optional so that a project config only overrides what it
//! sets. Effective values (with defaults applied) come from the accessor
//! methods in [`super::defaults`].

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration loaded from TOML config files.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct JexvacConfig {
    /// Where and how to reach the Joplin Web Clipper service
    #[serde(default)]
    pub service: ServiceConfig,

    /// Resource catalog pagination
    #[serde(default)]
    pub listing: ListingConfig,

    /// API token handling
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Connection settings for the local Joplin service.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    /// Host the service listens on.
    /// Default: localhost.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// First port probed during discovery (inclusive).
    /// Default: 41184.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_range_start: Option<u16>,

    /// End of the probed port range (exclusive).
    /// Default: 41194.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_range_end: Option<u16>,

    /// Per-request timeout in seconds.
    /// Default: 30 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

/// Pagination settings for the resource catalog.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ListingConfig {
    /// Items requested per page. Values outside 1..=100 fall back to 50.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_limit: Option<u32>,

    /// Optional ceiling on the number of pages fetched.
    /// Unset means paginate until the service reports no more pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pages: Option<u32>,
}

/// Token cache settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthConfig {
    /// Path of the token cache file.
    /// Default: `.joplin_token` in the working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_file: Option<PathBuf>,
}

//! # Configuration System
//!
//! Hierarchical TOML configuration for jexvac.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.jexvac/config.toml` (global user preferences)
//! 3. **Project config** - `./.jexvac/config.toml` (directory-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.jexvac/config.toml
//! [service]
//! host = "127.0.0.1"
//! port_range_start = 41184
//! port_range_end = 41194
//!
//! [listing]
//! page_limit = 100
//! max_pages = 500
//!
//! [auth]
//! token_file = "/home/me/.joplin_token"
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{AuthConfig, JexvacConfig, ListingConfig, ServiceConfig};
pub use validation::validate_config;

impl JexvacConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}

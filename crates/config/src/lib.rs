//! Settings for the `podfeed` binary, stored as TOML
//!
//! `[app]` controls logging, `[fetch]` the HTTP client and `[display]` how
//! listings are printed. `PODFEED_*` environment variables override the file.
//!
//! # Example
//!
//! ```rust,no_run
//! use podfeed_config::{Config, ConfigManager};
//!
//! let manager = ConfigManager::new().expect("Failed to initialize config");
//! let config = manager.load().unwrap_or_else(|e| {
//!     eprintln!("Config error: {}, using defaults", e);
//!     Config::default()
//! });
//!
//! println!("Timeout: {}s", config.fetch.timeout_secs);
//! ```

mod error;
mod manager;
mod persistence;
mod validation;

pub mod app_config;
mod display_config;
mod fetch_config;

pub use error::{ConfigError, ConfigResult, ValidationError};
pub use manager::{apply_env_overrides, ConfigManager};
pub use validation::{ConfigSection, Validator};

pub use app_config::{AppConfig, LogLevel};
pub use display_config::DisplayConfig;
pub use fetch_config::FetchConfig;

use serde::{Deserialize, Serialize};

/// Current config file format version
pub const CONFIG_VERSION: u32 = 1;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Config file format version
    pub version: u32,

    /// Application-level settings
    pub app: AppConfig,

    /// Feed retrieval settings
    pub fetch: FetchConfig,

    /// Episode listing settings
    pub display: DisplayConfig,
}

impl Config {
    /// Creates a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks every section, reporting all problems together
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let problems: Vec<ValidationError> = [
            self.app.validate(),
            self.fetch.validate(),
            self.display.validate(),
        ]
        .into_iter()
        .filter_map(Result::err)
        .flatten()
        .collect();

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }

    /// Merges this config with another, preferring values from `other`
    pub fn merge(&mut self, other: Config) {
        self.app.merge(other.app);
        self.fetch.merge(other.fetch);
        self.display.merge(other.display);
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            app: AppConfig::default(),
            fetch: FetchConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_config_version_is_set() {
        assert_eq!(Config::default().version, CONFIG_VERSION);
    }

    #[test]
    fn test_config_merge() {
        let mut base = Config::default();
        let mut override_config = Config::default();
        override_config.display.episode_limit = 20;

        base.merge(override_config);
        assert_eq!(base.display.episode_limit, 20);
    }

    #[test]
    fn test_validate_collects_all_sections() {
        let mut config = Config::default();
        config.fetch.timeout_secs = 0;
        config.display.summary_preview_chars = 0;

        assert_eq!(config.validate().unwrap_err().len(), 2);
    }
}

//! Configuration manager - main API for config operations

use crate::app_config::LogLevel;
use crate::persistence::ConfigPersistence;
use crate::{Config, ConfigError, ConfigResult, ValidationError};
use directories::ProjectDirs;
use std::path::PathBuf;

/// Main configuration manager
///
/// Locates the config file and loads or saves it.
pub struct ConfigManager {
    persistence: ConfigPersistence,
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager using the default config directory
    ///
    /// - Linux: `~/.config/podfeed/`
    /// - macOS: `~/Library/Application Support/podfeed/`
    /// - Windows: `%APPDATA%\podfeed\`
    pub fn new() -> ConfigResult<Self> {
        let config_dir = Self::default_config_dir()?;
        Self::with_directory(config_dir)
    }

    /// Creates a config manager with a custom config directory
    pub fn with_directory(config_dir: PathBuf) -> ConfigResult<Self> {
        let config_path = config_dir.join("config.toml");
        let persistence = ConfigPersistence::new(config_path);

        Ok(Self {
            persistence,
            config_dir,
        })
    }

    /// Returns the default config directory based on the platform
    fn default_config_dir() -> ConfigResult<PathBuf> {
        ProjectDirs::from("", "", "podfeed")
            .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Returns the config directory path
    pub fn config_dir(&self) -> &PathBuf {
        &self.config_dir
    }

    /// Returns the full config file path
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Loads the configuration from file
    pub fn load(&self) -> ConfigResult<Config> {
        self.persistence.load()
    }

    /// Loads the configuration, falling back to defaults on any error
    pub fn load_or_default(&self) -> Config {
        match self.load() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load config: {}, using defaults", e);
                Config::default()
            }
        }
    }

    /// Saves the configuration to file
    pub fn save(&self, config: &Config) -> ConfigResult<()> {
        self.persistence.save(config)
    }

    /// Writes a default config file if one doesn't exist
    ///
    /// Returns Ok(true) if a new file was created.
    pub fn initialize(&self) -> ConfigResult<bool> {
        if self.config_path().exists() {
            return Ok(false);
        }

        self.save(&Config::default())?;
        Ok(true)
    }
}

/// Applies `PODFEED_*` overrides using `lookup` to read variables
///
/// Variables follow the pattern `PODFEED_SECTION_FIELD`, e.g.
/// `PODFEED_FETCH_TIMEOUT_SECS=30`. Values that do not parse leave the
/// config untouched and are returned so the caller can report them.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> Vec<ValidationError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut rejected = Vec::new();

    if let Some(level) = lookup("PODFEED_APP_LOG_LEVEL") {
        match level.parse::<LogLevel>() {
            Ok(level) => config.app.log_level = level,
            Err(_) => rejected.push(
                ValidationError::new("PODFEED_APP_LOG_LEVEL", "is not a log level").found(level),
            ),
        }
    }

    if let Some(timeout) = lookup("PODFEED_FETCH_TIMEOUT_SECS") {
        match timeout.trim().parse() {
            Ok(secs) => config.fetch.timeout_secs = secs,
            Err(_) => rejected.push(
                ValidationError::new("PODFEED_FETCH_TIMEOUT_SECS", "is not a whole number")
                    .found(timeout),
            ),
        }
    }

    if let Some(agent) = lookup("PODFEED_FETCH_USER_AGENT") {
        config.fetch.user_agent = agent;
    }

    if let Some(limit) = lookup("PODFEED_DISPLAY_EPISODE_LIMIT") {
        match limit.trim().parse() {
            Ok(limit) => config.display.episode_limit = limit,
            Err(_) => rejected.push(
                ValidationError::new("PODFEED_DISPLAY_EPISODE_LIMIT", "is not a whole number")
                    .found(limit),
            ),
        }
    }

    rejected
}

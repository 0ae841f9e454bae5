//! Reading and writing `config.toml`
//!
//! A missing file means defaults. Out-of-range values are left for the
//! caller to report on load and rejected on save. Writes go through a
//! sibling temp file that is renamed over the target.

use crate::{Config, ConfigError, ConfigResult, CONFIG_VERSION};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Owns the location of one config file
pub struct ConfigPersistence {
    config_path: PathBuf,
}

impl ConfigPersistence {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Reads and decodes the file
    pub fn load(&self) -> ConfigResult<Config> {
        let contents = match fs::read_to_string(&self.config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No config at {}, using defaults", self.config_path.display());
                return Ok(Config::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: self.config_path.clone(),
                    source,
                })
            }
        };

        if contents.trim().is_empty() {
            return Err(ConfigError::Empty {
                path: self.config_path.clone(),
            });
        }

        let config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: self.config_path.clone(),
            source,
        })?;

        if config.version > CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: config.version,
                supported: CONFIG_VERSION,
            });
        }

        log::debug!("Loaded config from {}", self.config_path.display());
        Ok(config)
    }

    /// Validates, encodes and atomically replaces the file
    pub fn save(&self, config: &Config) -> ConfigResult<()> {
        config.validate().map_err(ConfigError::Invalid)?;
        let encoded = toml::to_string_pretty(config)?;

        let dir = match self.config_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|source| ConfigError::Write {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut staged = NamedTempFile::new_in(dir).map_err(|source| self.write_error(source))?;
        staged
            .write_all(encoded.as_bytes())
            .and_then(|_| staged.flush())
            .map_err(|source| self.write_error(source))?;
        staged
            .persist(&self.config_path)
            .map_err(|e| self.write_error(e.error))?;

        log::info!("Saved config to {}", self.config_path.display());
        Ok(())
    }

    fn write_error(&self, source: std::io::Error) -> ConfigError {
        ConfigError::Write {
            path: self.config_path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    impl ConfigPersistence {
        fn path(&self) -> &Path {
            &self.config_path
        }
    }

    fn scratch() -> (TempDir, ConfigPersistence) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let persistence = ConfigPersistence::new(dir.path().join("config.toml"));
        (dir, persistence)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let (_dir, persistence) = scratch();
        assert_eq!(persistence.load().expect("defaults"), Config::default());
    }

    #[test]
    fn test_saved_values_come_back() {
        let (_dir, persistence) = scratch();
        let mut config = Config::default();
        config.fetch.timeout_secs = 30;
        config.display.summary_preview_chars = 80;

        persistence.save(&config).expect("Should save config");
        assert_eq!(persistence.load().expect("Should load config"), config);
    }

    #[test]
    fn test_save_creates_missing_directories() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("config.toml");

        ConfigPersistence::new(path.clone())
            .save(&Config::default())
            .expect("Should create directory and save");
        assert!(path.exists());
    }

    #[test]
    fn test_blank_file_is_rejected() {
        let (_dir, persistence) = scratch();
        fs::write(persistence.path(), "   \n").expect("Should write file");
        assert!(matches!(persistence.load(), Err(ConfigError::Empty { .. })));
    }

    #[test]
    fn test_garbage_is_a_parse_error() {
        let (_dir, persistence) = scratch();
        fs::write(persistence.path(), "this is not valid TOML {{{").expect("Should write file");
        assert!(matches!(persistence.load(), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_newer_version_is_rejected() {
        let (_dir, persistence) = scratch();
        fs::write(persistence.path(), "version = 99\n").expect("Should write file");
        assert!(matches!(
            persistence.load(),
            Err(ConfigError::UnsupportedVersion { found: 99, .. })
        ));
    }

    #[test]
    fn test_out_of_range_values_still_load() {
        let (_dir, persistence) = scratch();
        fs::write(persistence.path(), "[fetch]\ntimeout_secs = 0\n").expect("Should write file");

        let config = persistence.load().expect("Validation problems do not block loading");
        assert!(config.validate().is_err());
        assert_eq!(config.fetch.timeout_secs, 0);
    }

    #[test]
    fn test_invalid_config_is_not_saved() {
        let (_dir, persistence) = scratch();
        let mut config = Config::default();
        config.display.episode_limit = 0;

        match persistence.save(&config) {
            Err(ConfigError::Invalid(problems)) => {
                assert_eq!(problems[0].field, "display.episode_limit")
            }
            other => panic!("expected invalid config error, got {:?}", other),
        }
        assert!(!persistence.path().exists());
    }
}

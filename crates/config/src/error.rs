//! Errors raised while locating, reading or writing the config file

use std::path::PathBuf;
use thiserror::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path} is empty; delete it to fall back to defaults")]
    Empty { path: PathBuf },

    #[error("Cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Config version {found} is newer than the supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("Refusing to save invalid config: {}", join_problems(.0))]
    Invalid(Vec<ValidationError>),

    #[error("Cannot encode config: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("Cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No per-user config directory is available on this platform")]
    NoConfigDir,
}

/// A single out-of-bounds config value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} {problem}{}", found_suffix(.found))]
pub struct ValidationError {
    /// Dotted key, e.g. `fetch.timeout_secs`
    pub field: &'static str,
    pub problem: String,
    pub found: Option<String>,
}

impl ValidationError {
    pub fn new(field: &'static str, problem: impl Into<String>) -> Self {
        Self {
            field,
            problem: problem.into(),
            found: None,
        }
    }

    /// Records the offending value
    pub fn found(mut self, value: impl ToString) -> Self {
        self.found = Some(value.to_string());
        self
    }
}

fn found_suffix(found: &Option<String>) -> String {
    match found {
        Some(value) => format!(" (found {})", value),
        None => String::new(),
    }
}

fn join_problems(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

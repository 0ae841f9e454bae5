//! Feed retrieval configuration section

use crate::validation::{ConfigSection, ValidationError, Validator};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings for fetching feeds over HTTP
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FetchConfig {
    /// Request timeout in seconds (1-300)
    pub timeout_secs: u64,

    /// User agent sent with every request
    pub user_agent: String,

    /// Maximum redirects to follow (0-20)
    pub max_redirects: usize,
}

impl FetchConfig {
    /// Returns the timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: format!("podfeed/{}", env!("CARGO_PKG_VERSION")),
            max_redirects: 10,
        }
    }
}

impl ConfigSection for FetchConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        Validator::new()
            .within("fetch.timeout_secs", self.timeout_secs, 1..=300)
            .not_blank("fetch.user_agent", &self.user_agent)
            .within("fetch.max_redirects", self.max_redirects, 0..=20)
            .finish()
    }

    fn merge(&mut self, other: Self) {
        self.timeout_secs = other.timeout_secs;
        self.user_agent = other.user_agent;
        self.max_redirects = other.max_redirects;
    }

    fn section_name(&self) -> &'static str {
        "fetch"
    }
}

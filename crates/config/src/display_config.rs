//! Episode listing configuration section

use crate::validation::{ConfigSection, ValidationError, Validator};
use serde::{Deserialize, Serialize};

/// Settings for printing episode listings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Number of episodes listed by default
    pub episode_limit: usize,

    /// Characters of the summary shown before truncation
    pub summary_preview_chars: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            episode_limit: 5,
            summary_preview_chars: 150,
        }
    }
}

impl ConfigSection for DisplayConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        Validator::new()
            .within("display.episode_limit", self.episode_limit, 1..=1000)
            .within(
                "display.summary_preview_chars",
                self.summary_preview_chars,
                10..=10_000,
            )
            .finish()
    }

    fn merge(&mut self, other: Self) {
        self.episode_limit = other.episode_limit;
        self.summary_preview_chars = other.summary_preview_chars;
    }

    fn section_name(&self) -> &'static str {
        "display"
    }
}

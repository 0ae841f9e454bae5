// crates/core/src/record.rs
//! Normalized episode records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Uniform output structure for one episode
///
/// Serializes with every key present; absent values become `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeRecord {
    pub title: Option<String>,
    pub link: Option<String>,
    pub published: Option<String>,
    pub published_parsed: Option<DateTime<Utc>>,
    pub summary: Option<String>,
    pub description: Option<String>,
    /// Resolved audio download location
    pub audio_url: Option<String>,
}

impl EpisodeRecord {
    /// Returns true if an audio location was resolved
    pub fn has_audio(&self) -> bool {
        self.audio_url.is_some()
    }
}

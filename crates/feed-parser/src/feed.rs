// crates/feed-parser/src/feed.rs
//! Feed data structures

use chrono::{DateTime, Utc};
use podfeed_core::{EpisodeExtractor, EpisodeRecord, FeedEntry};
use serde::{Deserialize, Serialize};

/// Type of feed format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedType {
    /// RSS 2.0 feed
    Rss,
    /// Atom feed
    Atom,
    /// Unknown or unsupported format
    Unknown,
}

/// A parsed feed with channel metadata and entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feed {
    /// Type of feed
    pub feed_type: FeedType,
    /// Feed title
    pub title: String,
    /// Feed description
    pub description: Option<String>,
    /// Podcast home page
    pub url: Option<String>,
    /// Feed author
    pub author: Option<String>,
    /// Feed language
    pub language: Option<String>,
    /// Last update time
    pub updated: Option<DateTime<Utc>>,
    /// Entries in document order
    pub entries: Vec<FeedEntry>,
}

impl Feed {
    /// Creates a new feed
    pub fn new(feed_type: FeedType, title: String) -> Self {
        Self {
            feed_type,
            title,
            description: None,
            url: None,
            author: None,
            language: None,
            updated: None,
            entries: Vec::new(),
        }
    }

    /// Returns the number of entries in the feed
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the feed has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds an entry to the feed
    pub fn add_entry(&mut self, entry: FeedEntry) {
        self.entries.push(entry);
    }

    /// Normalizes every entry into an episode record
    pub fn episodes(&self) -> Vec<EpisodeRecord> {
        EpisodeExtractor::extract(&self.entries)
    }

    /// Entries with a resolvable audio location
    pub fn audio_entries(&self) -> Vec<&FeedEntry> {
        self.entries
            .iter()
            .filter(|entry| EpisodeExtractor::resolve_audio_url(entry).is_some())
            .collect()
    }
}

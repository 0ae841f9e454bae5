// crates/core/src/lib.rs
//! Episode normalization for podcast feeds
//!
//! Turns the entries yielded by a feed parser into uniform episode records
//! and resolves each episode's audio download location.
//!
//! # Example
//!
//! ```rust
//! use podfeed_core::{EpisodeExtractor, FeedEntry, FeedLink};
//!
//! let mut entry = FeedEntry::titled("Episode 1");
//! entry.push_enclosure(FeedLink::new("https://example.com/cover.jpg", "image/jpeg"));
//! entry.push_enclosure(FeedLink::new("https://example.com/ep1.mp3", "audio/mpeg"));
//!
//! let records = EpisodeExtractor::extract(&[entry]);
//! assert_eq!(records[0].audio_url.as_deref(), Some("https://example.com/ep1.mp3"));
//! ```

mod entry;
mod error;
mod extractor;
mod record;

pub use entry::{FeedEntry, FeedLink, RawEntry};
pub use error::{ExtractError, ExtractResult};
pub use extractor::EpisodeExtractor;
pub use record::EpisodeRecord;

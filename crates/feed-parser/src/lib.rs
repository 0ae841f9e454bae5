// crates/feed-parser/src/lib.rs
//! RSS and Atom feed parser for podcast feeds
//!
//! Produces a [`Feed`] whose entries are [`podfeed_core::FeedEntry`] values,
//! ready to be normalized by the episode extractor:
//! - RSS 2.0 feeds (enclosures, iTunes summary, `content:encoded`)
//! - Atom feeds (typed links, `rel="enclosure"`)
//!
//! # Example
//!
//! ```rust
//! use podfeed_feed_parser::FeedParser;
//!
//! let rss = r#"<?xml version="1.0"?>
//! <rss version="2.0">
//!   <channel>
//!     <title>My Podcast</title>
//!     <item>
//!       <title>Episode 1</title>
//!       <enclosure url="http://example.com/ep1.mp3" type="audio/mpeg"/>
//!     </item>
//!   </channel>
//! </rss>"#;
//!
//! let feed = FeedParser::parse(rss).expect("Failed to parse feed");
//! let episodes = feed.episodes();
//! assert_eq!(episodes[0].audio_url.as_deref(), Some("http://example.com/ep1.mp3"));
//! ```

mod error;
mod feed;
mod parser;

pub use error::{FeedError, FeedResult};
pub use feed::{Feed, FeedType};
pub use parser::FeedParser;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atom_enclosure_reaches_episode() {
        let atom = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Atom Cast</title>
  <entry>
    <title>Pilot</title>
    <published>2024-03-01T09:30:00Z</published>
    <link rel="alternate" type="text/html" href="https://example.com/pilot"/>
    <link rel="enclosure" type="audio/ogg" href="https://example.com/pilot.ogg"/>
  </entry>
</feed>"#;

        let feed = FeedParser::parse(atom).expect("Should parse");
        assert_eq!(feed.feed_type, FeedType::Atom);

        let episodes = feed.episodes();
        assert_eq!(episodes.len(), 1);
        assert_eq!(episodes[0].link.as_deref(), Some("https://example.com/pilot"));
        assert_eq!(episodes[0].audio_url.as_deref(), Some("https://example.com/pilot.ogg"));
        assert!(episodes[0].published_parsed.is_some());
    }

    #[test]
    fn test_errors_are_exported() {
        let err: FeedError = FeedParser::parse("").unwrap_err();
        assert!(matches!(err, FeedError::UnsupportedFormat));
    }
}

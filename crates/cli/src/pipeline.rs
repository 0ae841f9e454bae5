// FILE: crates/cli/src/pipeline.rs

//! Fetch, parse and extract in one call

use podfeed_core::{EpisodeExtractor, EpisodeRecord, ExtractError, RawEntry};
use podfeed_feed_parser::{FeedError, FeedParser};
use podfeed_network::{FeedFetcher, NetworkError};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Where an episode listing failed
///
/// An `Ok` with no records means the feed really had no episodes.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Failed to fetch feed: {0}")]
    Transport(#[from] NetworkError),

    #[error("Failed to parse feed: {0}")]
    Parse(#[from] FeedError),

    #[error("Failed to extract episodes: {0}")]
    Extract(#[from] ExtractError),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Episodes plus the feed title they came from
#[derive(Debug)]
pub struct Listing {
    pub title: Option<String>,
    pub episodes: Vec<EpisodeRecord>,
}

/// Fetches a feed over HTTP and extracts its episodes
pub async fn fetch_episodes<F: FeedFetcher>(
    fetcher: &F,
    url: &str,
    timeout: Duration,
) -> Result<Listing, PipelineError> {
    log::info!("Fetching feed {}", url);
    let body = fetcher.fetch(url, timeout).await?;

    let feed = FeedParser::parse_bytes(&body)?;
    log::info!("Parsed '{}' with {} entries", feed.title, feed.entry_count());

    Ok(Listing {
        episodes: feed.episodes(),
        title: Some(feed.title),
    })
}

/// Extracts episodes from an RSS or Atom file on disk
pub fn episodes_from_file(path: &Path) -> Result<Listing, PipelineError> {
    let feed = FeedParser::parse_file(path)?;
    log::info!("Parsed '{}' with {} entries", feed.title, feed.entry_count());

    Ok(Listing {
        episodes: feed.episodes(),
        title: Some(feed.title),
    })
}

/// Extracts episodes from a JSON array of raw entries
pub fn episodes_from_json(path: &Path) -> Result<Listing, PipelineError> {
    let contents = std::fs::read_to_string(path).map_err(|source| PipelineError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let entries: Vec<RawEntry> =
        serde_json::from_str(&contents).map_err(|source| PipelineError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    log::debug!("Read {} raw entries from {}", entries.len(), path.display());

    Ok(Listing {
        title: None,
        episodes: EpisodeExtractor::extract_raw(&entries)?,
    })
}

// crates/core/src/extractor.rs
//! Entry normalization and audio URL resolution

use crate::entry::{FeedEntry, FeedLink, RawEntry};
use crate::error::ExtractResult;
use crate::record::EpisodeRecord;

/// Turns parsed feed entries into episode records
pub struct EpisodeExtractor;

impl EpisodeExtractor {
    /// Extracts one record per entry, in input order
    pub fn extract(entries: &[FeedEntry]) -> Vec<EpisodeRecord> {
        entries.iter().map(Self::extract_one).collect()
    }

    /// Extracts records from dynamically shaped entries
    ///
    /// Fails on the first structurally invalid entry without producing
    /// any records.
    pub fn extract_raw(entries: &[RawEntry]) -> ExtractResult<Vec<EpisodeRecord>> {
        entries
            .iter()
            .enumerate()
            .map(|(index, raw)| FeedEntry::from_raw(index, raw).map(|entry| Self::extract_one(&entry)))
            .collect()
    }

    /// Builds the record for a single entry
    pub fn extract_one(entry: &FeedEntry) -> EpisodeRecord {
        EpisodeRecord {
            title: entry.title.clone(),
            link: entry.link.clone(),
            published: entry.published.clone(),
            published_parsed: entry.published_parsed,
            summary: entry.summary.clone(),
            description: entry.description.clone(),
            audio_url: Self::resolve_audio_url(entry),
        }
    }

    /// Finds the audio location of an entry
    ///
    /// Enclosures are searched before links. Within each sequence the first
    /// element whose type starts with "audio" is the only candidate; if it
    /// carries no location the search moves on to the next sequence.
    pub fn resolve_audio_url(entry: &FeedEntry) -> Option<String> {
        first_audio_href(entry.enclosures.as_deref())
            .or_else(|| first_audio_href(entry.links.as_deref()))
            .map(str::to_string)
    }
}

fn first_audio_href(links: Option<&[FeedLink]>) -> Option<&str> {
    links?.iter().find(|link| link.is_audio())?.usable_href()
}

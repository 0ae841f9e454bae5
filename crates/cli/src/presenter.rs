// FILE: crates/cli/src/presenter.rs

//! Rendering of episode listings

use console::style;
use podfeed_core::EpisodeRecord;

const MISSING: &str = "N/A";

/// How a listing is rendered as text
#[derive(Debug, Clone, Copy)]
pub struct ListingStyle {
    /// Episodes shown before the listing is cut off
    pub limit: usize,
    /// Summary characters kept before the ellipsis
    pub preview_chars: usize,
}

impl Default for ListingStyle {
    fn default() -> Self {
        Self {
            limit: 5,
            preview_chars: 150,
        }
    }
}

/// Renders the first `limit` episodes as a plain text block
pub fn render_text(episodes: &[EpisodeRecord], listing: ListingStyle) -> String {
    episodes
        .iter()
        .take(listing.limit)
        .enumerate()
        .map(|(i, episode)| render_episode(i + 1, episode, listing.preview_chars))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_episode(position: usize, episode: &EpisodeRecord, preview_chars: usize) -> String {
    let summary = episode
        .summary
        .as_deref()
        .map(|s| preview(s, preview_chars))
        .unwrap_or_else(|| MISSING.to_string());

    format!(
        "Episode {}:\n  Title: {}\n  Published: {}\n  Summary: {}\n  Audio URL: {}\n",
        position,
        or_missing(episode.title.as_deref()),
        or_missing(episode.published.as_deref()),
        summary,
        or_missing(episode.audio_url.as_deref()),
    )
}

/// Pretty JSON for the whole record array
pub fn render_json(episodes: &[EpisodeRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(episodes)
}

/// Prints a listing header, the episodes and a trailer
pub fn print_listing(title: Option<&str>, episodes: &[EpisodeRecord], listing: ListingStyle) {
    if episodes.is_empty() {
        println!("No episodes found in this feed.");
        return;
    }

    if let Some(title) = title {
        println!("\n{}", style(title).bold().cyan());
    }
    println!("{} episodes", style(episodes.len()).bold());
    println!("{}", "=".repeat(80));
    println!("{}", render_text(episodes, listing));

    if episodes.len() > listing.limit {
        println!(
            "{}",
            style(format!("... {} more not shown", episodes.len() - listing.limit)).dim()
        );
    }
}

/// Cuts `text` to at most `max_chars` characters, appending "..." when cut
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
        None => text.to_string(),
    }
}

fn or_missing(value: Option<&str>) -> &str {
    value.unwrap_or(MISSING)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(title: &str) -> EpisodeRecord {
        EpisodeRecord {
            title: Some(title.to_string()),
            ..EpisodeRecord::default()
        }
    }

    #[test]
    fn test_preview_short_text_untouched() {
        assert_eq!(preview("short", 150), "short");
    }

    #[test]
    fn test_preview_truncates_with_ellipsis() {
        let text = "a".repeat(200);
        let cut = preview(&text, 150);
        assert_eq!(cut.len(), 153);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_preview_counts_characters_not_bytes() {
        assert_eq!(preview("ééééé", 3), "ééé...");
    }

    #[test]
    fn test_absent_values_render_as_na() {
        let text = render_text(&[EpisodeRecord::default()], ListingStyle::default());
        assert!(text.contains("Title: N/A"));
        assert!(text.contains("Published: N/A"));
        assert!(text.contains("Summary: N/A"));
        assert!(text.contains("Audio URL: N/A"));
    }

    #[test]
    fn test_limit_applies() {
        let episodes: Vec<_> = (0..8).map(|i| episode(&format!("Ep {}", i))).collect();
        let text = render_text(&episodes, ListingStyle::default());

        assert!(text.contains("Episode 5:"));
        assert!(!text.contains("Episode 6:"));
        assert!(text.contains("Ep 4"));
        assert!(!text.contains("Ep 5"));
    }

    #[test]
    fn test_json_includes_every_record() {
        let episodes: Vec<_> = (0..8).map(|i| episode(&format!("Ep {}", i))).collect();
        let json = render_json(&episodes).expect("serializable");
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(parsed.as_array().map(Vec::len), Some(8));
        assert_eq!(parsed[0]["audio_url"], serde_json::Value::Null);
    }
}

// crates/core/src/entry.rs
//! Feed entry structures as yielded by a feed parser

use crate::error::{ExtractError, ExtractResult};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A dynamically shaped entry, e.g. decoded from JSON produced by another tool
pub type RawEntry = Value;

/// A link-like sub-structure of an entry (enclosure or link)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedLink {
    /// Location of the linked resource
    #[serde(alias = "url")]
    pub href: Option<String>,
    /// MIME type (e.g., "audio/mpeg")
    #[serde(rename = "type")]
    pub mime_type: Option<String>,
    /// Link relation (e.g., "enclosure", "alternate")
    pub rel: Option<String>,
    /// Size of the resource in bytes
    pub length: Option<u64>,
}

impl FeedLink {
    /// Creates a link with a location and MIME type
    pub fn new(href: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            mime_type: Some(mime_type.into()),
            rel: None,
            length: None,
        }
    }

    /// Sets the link relation
    pub fn with_rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = Some(rel.into());
        self
    }

    /// Returns the MIME type, or an empty string when absent
    pub fn mime_type_or_empty(&self) -> &str {
        self.mime_type.as_deref().unwrap_or("")
    }

    /// Returns true if the MIME type starts with "audio"
    pub fn is_audio(&self) -> bool {
        self.mime_type_or_empty().starts_with("audio")
    }

    /// Returns the location if it is present and non-empty
    pub fn usable_href(&self) -> Option<&str> {
        self.href.as_deref().filter(|href| !href.is_empty())
    }

    fn from_object(object: &Map<String, Value>) -> Self {
        let href = string_field(object, "href").or_else(|| string_field(object, "url"));
        let length = match object.get("length") {
            Some(Value::Number(n)) => n.as_u64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        };

        Self {
            href,
            mime_type: string_field(object, "type"),
            rel: string_field(object, "rel"),
            length,
        }
    }
}

/// One episode's raw metadata as produced by a feed parser
///
/// Every member is optional; a missing member is simply `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub title: Option<String>,
    /// Web page for the episode
    pub link: Option<String>,
    /// Publication date as written in the feed
    pub published: Option<String>,
    /// Publication date parsed to UTC
    pub published_parsed: Option<DateTime<Utc>>,
    pub summary: Option<String>,
    pub description: Option<String>,
    /// Attached media, in document order
    pub enclosures: Option<Vec<FeedLink>>,
    /// Generic links, in document order
    pub links: Option<Vec<FeedLink>>,
}

impl FeedEntry {
    /// Creates an empty entry
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an entry with a title
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Appends an enclosure, creating the sequence if needed
    pub fn push_enclosure(&mut self, enclosure: FeedLink) {
        self.enclosures.get_or_insert_with(Vec::new).push(enclosure);
    }

    /// Appends a link, creating the sequence if needed
    pub fn push_link(&mut self, link: FeedLink) {
        self.links.get_or_insert_with(Vec::new).push(link);
    }

    /// Converts a dynamically shaped entry
    ///
    /// Scalar fields of the wrong type are treated as absent. The entry
    /// itself must be an object, and `enclosures`/`links` must be either
    /// absent, `null`, or arrays of objects.
    pub fn from_raw(index: usize, raw: &RawEntry) -> ExtractResult<Self> {
        let object = raw.as_object().ok_or_else(|| {
            ExtractError::malformed(index, format!("expected an object, found {}", kind(raw)))
        })?;

        Ok(Self {
            title: string_field(object, "title"),
            link: string_field(object, "link"),
            published: string_field(object, "published"),
            published_parsed: timestamp_field(object, "published_parsed"),
            summary: string_field(object, "summary"),
            description: string_field(object, "description"),
            enclosures: link_list(index, object, "enclosures")?,
            links: link_list(index, object, "links")?,
        })
    }
}

fn string_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(str::to_string)
}

fn timestamp_field(object: &Map<String, Value>, key: &str) -> Option<DateTime<Utc>> {
    match object.get(key)? {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Value::Number(n) => n.as_i64().and_then(|secs| DateTime::from_timestamp(secs, 0)),
        Value::Array(parts) => struct_time(parts),
        _ => None,
    }
}

/// Reads a `[year, month, day, hour, minute, second, ...]` list as UTC
///
/// Trailing members (weekday, yearday, dst) are ignored.
fn struct_time(parts: &[Value]) -> Option<DateTime<Utc>> {
    let field = |i: usize| -> Option<u32> { u32::try_from(parts.get(i)?.as_i64()?).ok() };

    let year = i32::try_from(parts.first()?.as_i64()?).ok()?;
    let date = NaiveDate::from_ymd_opt(year, field(1)?, field(2)?)?;
    // struct_time allows a leap second of 60
    let time = date.and_hms_opt(field(3)?, field(4)?, field(5)?.min(59))?;
    Some(time.and_utc())
}

fn link_list(
    index: usize,
    object: &Map<String, Value>,
    key: &str,
) -> ExtractResult<Option<Vec<FeedLink>>> {
    let items = match object.get(key) {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(ExtractError::malformed(
                index,
                format!("`{}` must be a list, found {}", key, kind(other)),
            ))
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(position, item)| {
            item.as_object().map(FeedLink::from_object).ok_or_else(|| {
                ExtractError::malformed(
                    index,
                    format!("`{}[{}]` must be an object, found {}", key, position, kind(item)),
                )
            })
        })
        .collect::<ExtractResult<Vec<_>>>()
        .map(Some)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_link_is_audio() {
        assert!(FeedLink::new("a", "audio/mpeg").is_audio());
        assert!(FeedLink::new("a", "audio").is_audio());
        assert!(!FeedLink::new("a", "text/html").is_audio());
        assert!(!FeedLink::new("a", "Audio/mpeg").is_audio());
        assert!(!FeedLink::default().is_audio());
    }

    #[test]
    fn test_usable_href_skips_empty() {
        assert_eq!(FeedLink::new("", "audio/mpeg").usable_href(), None);
        assert_eq!(FeedLink::new("x", "audio/mpeg").usable_href(), Some("x"));
    }

    #[test]
    fn test_push_creates_sequences() {
        let mut entry = FeedEntry::new();
        assert!(entry.enclosures.is_none());
        entry.push_enclosure(FeedLink::new("a", "audio/mpeg"));
        entry.push_link(FeedLink::new("b", "text/html"));
        assert_eq!(entry.enclosures.as_ref().map(Vec::len), Some(1));
        assert_eq!(entry.links.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_from_raw_full_entry() {
        let raw = json!({
            "title": "Episode 1",
            "link": "https://example.com/1",
            "published": "Mon, 01 Jan 2024 12:00:00 GMT",
            "published_parsed": "2024-01-01T12:00:00Z",
            "summary": "Short",
            "description": "Long",
            "enclosures": [{"type": "audio/mpeg", "url": "https://example.com/1.mp3", "length": "1200"}],
            "links": [{"type": "text/html", "href": "https://example.com/1", "rel": "alternate"}]
        });

        let entry = FeedEntry::from_raw(0, &raw).expect("valid entry");
        assert_eq!(entry.title.as_deref(), Some("Episode 1"));
        assert_eq!(entry.published.as_deref(), Some("Mon, 01 Jan 2024 12:00:00 GMT"));
        assert!(entry.published_parsed.is_some());

        let enclosures = entry.enclosures.expect("enclosures");
        assert_eq!(enclosures[0].href.as_deref(), Some("https://example.com/1.mp3"));
        assert_eq!(enclosures[0].length, Some(1200));

        let links = entry.links.expect("links");
        assert_eq!(links[0].rel.as_deref(), Some("alternate"));
    }

    #[test]
    fn test_from_raw_href_preferred_over_url() {
        let raw = json!({"links": [{"type": "audio/ogg", "href": "h", "url": "u"}]});
        let entry = FeedEntry::from_raw(0, &raw).expect("valid entry");
        assert_eq!(entry.links.expect("links")[0].href.as_deref(), Some("h"));
    }

    #[test]
    fn test_from_raw_wrong_scalar_types_degrade() {
        let raw = json!({
            "title": 42,
            "summary": null,
            "published_parsed": [2024, 1, 1],
            "enclosures": [{"type": 7, "href": false}]
        });

        let entry = FeedEntry::from_raw(0, &raw).expect("scalars never fail");
        assert_eq!(entry.title, None);
        assert_eq!(entry.summary, None);
        assert_eq!(entry.published_parsed, None);
        let enclosure = &entry.enclosures.expect("enclosures")[0];
        assert_eq!(enclosure.mime_type, None);
        assert_eq!(enclosure.href, None);
    }

    #[test]
    fn test_from_raw_struct_time_list() {
        let raw = json!({"published_parsed": [2024, 1, 1, 12, 0, 0, 0, 1, 0]});
        let entry = FeedEntry::from_raw(0, &raw).expect("valid entry");
        assert_eq!(
            entry.published_parsed.map(|dt| dt.to_rfc3339()),
            Some("2024-01-01T12:00:00+00:00".to_string())
        );
    }

    #[test]
    fn test_from_raw_struct_time_out_of_range() {
        for parts in [
            json!([2024, 13, 1, 12, 0, 0, 0, 1, 0]),
            json!([2024, 2, 30, 0, 0, 0]),
            json!([2024, 1, 1, 24, 0, 0]),
            json!([2024, 1, 1, 12, "0", 0]),
        ] {
            let entry = FeedEntry::from_raw(0, &json!({"published_parsed": parts}))
                .expect("scalars never fail");
            assert_eq!(entry.published_parsed, None);
        }
    }

    #[test]
    fn test_from_raw_unix_timestamp() {
        let raw = json!({"published_parsed": 1704110400});
        let entry = FeedEntry::from_raw(0, &raw).expect("valid entry");
        assert_eq!(
            entry.published_parsed.map(|dt| dt.to_rfc3339()),
            Some("2024-01-01T12:00:00+00:00".to_string())
        );
    }

    #[test]
    fn test_from_raw_null_sequences_are_absent() {
        let raw = json!({"enclosures": null});
        let entry = FeedEntry::from_raw(0, &raw).expect("valid entry");
        assert!(entry.enclosures.is_none());
        assert!(entry.links.is_none());
    }

    #[test]
    fn test_from_raw_rejects_non_object() {
        let err = FeedEntry::from_raw(3, &json!("just a string")).unwrap_err();
        assert_eq!(err.index(), 3);
        assert!(err.to_string().contains("a string"));
    }

    #[test]
    fn test_from_raw_rejects_string_enclosures() {
        let err = FeedEntry::from_raw(1, &json!({"enclosures": "audio.mp3"})).unwrap_err();
        assert!(err.to_string().contains("`enclosures` must be a list"));
    }

    #[test]
    fn test_from_raw_rejects_non_object_link_item() {
        let err = FeedEntry::from_raw(0, &json!({"links": [{"href": "a"}, 5]})).unwrap_err();
        assert!(err.to_string().contains("`links[1]` must be an object"));
    }
}

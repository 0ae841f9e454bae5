// crates/feed-parser/src/parser.rs
//! Feed parsing logic

use crate::error::{FeedError, FeedResult};
use crate::feed::{Feed, FeedType};
use chrono::{DateTime, Utc};
use podfeed_core::{FeedEntry, FeedLink};
use quick_xml::events::{BytesStart, BytesText, Event};
use quick_xml::Reader;
use std::path::Path;

/// Feed parser
pub struct FeedParser;

impl FeedParser {
    /// Parses a feed from a string
    pub fn parse(content: &str) -> FeedResult<Feed> {
        let feed_type = Self::detect_type(content);

        match feed_type {
            FeedType::Rss => Self::parse_rss(content),
            FeedType::Atom => Self::parse_atom(content),
            FeedType::Unknown => Err(FeedError::UnsupportedFormat),
        }
    }

    /// Parses a feed from raw document bytes
    pub fn parse_bytes(bytes: &[u8]) -> FeedResult<Feed> {
        let content = std::str::from_utf8(bytes)?;
        Self::parse(content.trim_start_matches('\u{feff}'))
    }

    /// Reads and parses a feed file
    pub fn parse_file(path: impl AsRef<Path>) -> FeedResult<Feed> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| FeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_bytes(&bytes)
    }

    /// Detects the feed type from content
    fn detect_type(content: &str) -> FeedType {
        if content.contains("<rss") {
            FeedType::Rss
        } else if content.contains("<feed") && content.contains("www.w3.org/2005/Atom") {
            FeedType::Atom
        } else {
            FeedType::Unknown
        }
    }

    /// Parses an RSS feed
    fn parse_rss(content: &str) -> FeedResult<Feed> {
        let mut reader = Reader::from_str(content);
        reader.config_mut().trim_text(true);

        let mut feed = Feed::new(FeedType::Rss, String::new());
        let mut current_entry: Option<FeedEntry> = None;
        let mut path: Vec<String> = Vec::new();
        let mut text_buffer = String::new();

        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    let element_name = element_name(&e);

                    if element_name == "item" {
                        current_entry = Some(FeedEntry::new());
                    } else if let Some(entry) = current_entry.as_mut() {
                        Self::apply_rss_attributes(entry, &element_name, &e);
                    }

                    path.push(element_name);
                    text_buffer.clear();
                }
                Ok(Event::Empty(e)) => {
                    // Self-closing tags like <enclosure ... /> carry everything in attributes
                    if let Some(entry) = current_entry.as_mut() {
                        Self::apply_rss_attributes(entry, &element_name(&e), &e);
                    }
                }
                Ok(Event::Text(e)) => text_buffer.push_str(&node_text(&e)),
                Ok(Event::CData(e)) => text_buffer.push_str(&String::from_utf8_lossy(&e.into_inner())),
                Ok(Event::End(_)) => {
                    let element_name = path.pop().unwrap_or_default();
                    let parent = path.last().map(String::as_str);
                    let value = std::mem::take(&mut text_buffer);

                    if element_name == "item" {
                        if let Some(entry) = current_entry.take() {
                            feed.add_entry(entry);
                        }
                    } else if parent == Some("item") {
                        if let Some(entry) = current_entry.as_mut() {
                            Self::apply_rss_item_field(entry, &element_name, value);
                        }
                    } else if parent == Some("channel") {
                        Self::apply_rss_channel_field(&mut feed, &element_name, value);
                    }
                }
                Ok(Event::Eof) => {
                    if let Some(open) = path.last() {
                        return Err(xml_error(&reader, format_args!("unclosed element <{}>", open)));
                    }
                    break;
                }
                Err(e) => return Err(xml_error(&reader, e)),
                _ => {}
            }
            buf.clear();
        }

        if feed.title.is_empty() {
            return Err(FeedError::MissingField("title"));
        }

        Ok(feed)
    }

    fn apply_rss_attributes(entry: &mut FeedEntry, element_name: &str, e: &BytesStart) {
        match element_name {
            "enclosure" => {
                let enclosure = link_from_attributes(e, "url");
                if enclosure.href.is_some() {
                    let enclosure = enclosure.with_rel("enclosure");
                    entry.push_link(enclosure.clone());
                    entry.push_enclosure(enclosure);
                }
            }
            "link" | "atom:link" => {
                let link = link_from_attributes(e, "href");
                if link.href.is_some() {
                    push_attribute_link(entry, link);
                }
            }
            _ => {}
        }
    }

    fn apply_rss_item_field(entry: &mut FeedEntry, element_name: &str, value: String) {
        match element_name {
            "title" => entry.title = Some(value),
            "link" if !value.is_empty() => {
                entry.push_link(FeedLink::new(value.clone(), "text/html").with_rel("alternate"));
                entry.link = Some(value);
            }
            "pubDate" => {
                entry.published_parsed = parse_rfc2822(&value);
                entry.published = Some(value);
            }
            "description" => {
                if entry.summary.is_none() {
                    entry.summary = Some(value.clone());
                }
                if entry.description.is_none() {
                    entry.description = Some(value);
                }
            }
            "itunes:summary" => entry.summary = Some(value),
            "content:encoded" => entry.description = Some(value),
            _ => {}
        }
    }

    fn apply_rss_channel_field(feed: &mut Feed, element_name: &str, value: String) {
        match element_name {
            "title" if feed.title.is_empty() => feed.title = value,
            "description" => feed.description = Some(value),
            "link" if !value.is_empty() => feed.url = Some(value),
            "language" => feed.language = Some(value),
            "itunes:author" | "author" | "managingEditor" if feed.author.is_none() => {
                feed.author = Some(value)
            }
            "lastBuildDate" | "pubDate" if feed.updated.is_none() => {
                feed.updated = parse_rfc2822(&value)
            }
            _ => {}
        }
    }

    /// Parses an Atom feed
    fn parse_atom(content: &str) -> FeedResult<Feed> {
        let mut reader = Reader::from_str(content);
        reader.config_mut().trim_text(true);

        let mut feed = Feed::new(FeedType::Atom, String::new());
        let mut current_entry: Option<FeedEntry> = None;
        let mut path: Vec<String> = Vec::new();
        let mut text_buffer = String::new();

        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    let element_name = element_name(&e);

                    if element_name == "entry" {
                        current_entry = Some(FeedEntry::new());
                    } else if element_name == "link" {
                        Self::apply_atom_link(&mut feed, current_entry.as_mut(), &path, &e);
                    }

                    path.push(element_name);
                    text_buffer.clear();
                }
                Ok(Event::Empty(e)) => {
                    // Handle link elements (usually self-closing)
                    if element_name(&e) == "link" {
                        Self::apply_atom_link(&mut feed, current_entry.as_mut(), &path, &e);
                    }
                }
                Ok(Event::Text(e)) => text_buffer.push_str(&node_text(&e)),
                Ok(Event::CData(e)) => text_buffer.push_str(&String::from_utf8_lossy(&e.into_inner())),
                Ok(Event::End(_)) => {
                    let element_name = path.pop().unwrap_or_default();
                    let parent = path.last().map(String::as_str);
                    let grandparent = path.len().checked_sub(2).map(|i| path[i].as_str());
                    let value = std::mem::take(&mut text_buffer);

                    if element_name == "entry" {
                        if let Some(entry) = current_entry.take() {
                            feed.add_entry(entry);
                        }
                    } else if parent == Some("entry") {
                        if let Some(entry) = current_entry.as_mut() {
                            Self::apply_atom_entry_field(entry, &element_name, value);
                        }
                    } else if parent == Some("feed") {
                        Self::apply_atom_feed_field(&mut feed, &element_name, value);
                    } else if element_name == "name"
                        && parent == Some("author")
                        && grandparent == Some("feed")
                        && feed.author.is_none()
                    {
                        feed.author = Some(value);
                    }
                }
                Ok(Event::Eof) => {
                    if let Some(open) = path.last() {
                        return Err(xml_error(&reader, format_args!("unclosed element <{}>", open)));
                    }
                    break;
                }
                Err(e) => return Err(xml_error(&reader, e)),
                _ => {}
            }
            buf.clear();
        }

        if feed.title.is_empty() {
            return Err(FeedError::MissingField("title"));
        }

        Ok(feed)
    }

    fn apply_atom_link(
        feed: &mut Feed,
        current_entry: Option<&mut FeedEntry>,
        path: &[String],
        e: &BytesStart,
    ) {
        let link = link_from_attributes(e, "href");
        if link.href.is_none() {
            return;
        }

        match current_entry {
            Some(entry) => {
                let is_alternate = link.rel.as_deref().map_or(true, |rel| rel == "alternate");
                if is_alternate && entry.link.is_none() {
                    entry.link = link.href.clone();
                }
                push_attribute_link(entry, link);
            }
            None if path.last().map(String::as_str) == Some("feed") => {
                let is_alternate = link.rel.as_deref().map_or(true, |rel| rel == "alternate");
                if is_alternate && feed.url.is_none() {
                    feed.url = link.href;
                }
            }
            None => {}
        }
    }

    fn apply_atom_entry_field(entry: &mut FeedEntry, element_name: &str, value: String) {
        match element_name {
            "title" => entry.title = Some(value),
            "summary" => entry.summary = Some(value),
            "content" => entry.description = Some(value),
            "published" => {
                entry.published_parsed = parse_rfc3339(&value);
                entry.published = Some(value);
            }
            "updated" if entry.published.is_none() => {
                entry.published_parsed = parse_rfc3339(&value);
                entry.published = Some(value);
            }
            _ => {}
        }
    }

    fn apply_atom_feed_field(feed: &mut Feed, element_name: &str, value: String) {
        match element_name {
            "title" if feed.title.is_empty() => feed.title = value,
            "subtitle" => feed.description = Some(value),
            "updated" => feed.updated = parse_rfc3339(&value),
            _ => {}
        }
    }
}

fn xml_error<R>(reader: &Reader<R>, message: impl std::fmt::Display) -> FeedError {
    FeedError::XmlParse {
        position: reader.buffer_position() as u64,
        message: message.to_string(),
    }
}

/// Returns the qualified element name, prefix included (e.g. "itunes:summary")
fn element_name(e: &BytesStart) -> String {
    String::from_utf8_lossy(e.name().as_ref()).to_string()
}

/// Unescaped text, or the raw text when it uses an undeclared entity
fn node_text(e: &BytesText) -> String {
    match e.unescape() {
        Ok(text) => text.into_owned(),
        Err(_) => String::from_utf8_lossy(e).into_owned(),
    }
}

/// Reads href, type, rel and length attributes into a link
fn link_from_attributes(e: &BytesStart, href_key: &str) -> FeedLink {
    let mut link = FeedLink::default();

    for attr in e.attributes().flatten() {
        let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
        let value = attr
            .unescape_value()
            .map(|v| v.to_string())
            .unwrap_or_else(|_| String::from_utf8_lossy(&attr.value).to_string());

        match key.as_str() {
            "type" => link.mime_type = Some(value),
            "rel" => link.rel = Some(value),
            "length" => link.length = value.trim().parse().ok(),
            k if k == href_key => link.href = Some(value),
            _ => {}
        }
    }

    link
}

/// Adds an attribute-style link; enclosure relations are also enclosures
fn push_attribute_link(entry: &mut FeedEntry, link: FeedLink) {
    if link.rel.as_deref() == Some("enclosure") {
        entry.push_enclosure(link.clone());
    }
    entry.push_link(link);
}

fn parse_rfc2822(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn parse_rfc3339(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

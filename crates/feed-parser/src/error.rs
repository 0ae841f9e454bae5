// crates/feed-parser/src/error.rs
//! Failures that stop a document from yielding entries

use std::path::PathBuf;
use thiserror::Error;

pub type FeedResult<T> = Result<T, FeedError>;

#[derive(Debug, Error)]
pub enum FeedError {
    /// Bytes are not UTF-8; `valid_up_to` is the offset of the first bad byte
    #[error("Feed is not valid UTF-8 after byte {valid_up_to}")]
    InvalidEncoding { valid_up_to: usize },

    /// Neither an `<rss>` nor an Atom `<feed>` root was found
    #[error("Document is neither an RSS nor an Atom feed")]
    UnsupportedFormat,

    #[error("Feed has no {0}")]
    MissingField(&'static str),

    #[error("Cannot read feed file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Malformed markup; `position` is the byte offset the reader stopped at
    #[error("Malformed XML near byte {position}: {message}")]
    XmlParse { position: u64, message: String },
}

impl From<std::str::Utf8Error> for FeedError {
    fn from(err: std::str::Utf8Error) -> Self {
        FeedError::InvalidEncoding {
            valid_up_to: err.valid_up_to(),
        }
    }
}

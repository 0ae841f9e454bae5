// crates/core/src/error.rs
//! Error types for episode extraction

use thiserror::Error;

/// Result type for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Errors that can occur while extracting episodes
///
/// Missing fields are never errors. Only entries whose overall shape is
/// wrong abort an extraction, and the whole call fails rather than
/// returning a truncated list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// An entry is not shaped like a feed entry
    #[error("Malformed entry at index {index}: {reason}")]
    MalformedEntry { index: usize, reason: String },
}

impl ExtractError {
    /// Creates a malformed entry error
    pub fn malformed(index: usize, reason: impl Into<String>) -> Self {
        Self::MalformedEntry {
            index,
            reason: reason.into(),
        }
    }

    /// Returns the index of the offending entry
    pub fn index(&self) -> usize {
        match self {
            Self::MalformedEntry { index, .. } => *index,
        }
    }
}

// crates/network/src/error.rs
//! Error types for network operations

use thiserror::Error;

/// Result type for network operations
pub type NetworkResult<T> = Result<T, NetworkError>;

/// Errors that can occur while fetching a feed
#[derive(Debug, Error)]
pub enum NetworkError {
    /// HTTP request error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP {code}: {reason}")]
    Status { code: u16, reason: String },

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Timeout
    #[error("Operation timed out")]
    Timeout,
}

impl NetworkError {
    /// Maps a reqwest error, singling out timeouts
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            NetworkError::Timeout
        } else {
            NetworkError::Http(err)
        }
    }

    /// Returns true if the error is a client error (4xx)
    pub fn is_client_error(&self) -> bool {
        match self {
            NetworkError::Status { code, .. } => (400..500).contains(code),
            NetworkError::Http(e) => e.status().map_or(false, |s| s.is_client_error()),
            _ => false,
        }
    }

    /// Returns true if the error is a server error (5xx)
    pub fn is_server_error(&self) -> bool {
        match self {
            NetworkError::Status { code, .. } => (500..600).contains(code),
            NetworkError::Http(e) => e.status().map_or(false, |s| s.is_server_error()),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NetworkError::InvalidUrl("test".to_string());
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_status_display() {
        let err = NetworkError::Status {
            code: 404,
            reason: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404: Not Found");
    }

    #[test]
    fn test_status_classification() {
        let not_found = NetworkError::Status {
            code: 404,
            reason: "Not Found".to_string(),
        };
        let unavailable = NetworkError::Status {
            code: 503,
            reason: "Service Unavailable".to_string(),
        };

        assert!(not_found.is_client_error());
        assert!(!not_found.is_server_error());
        assert!(unavailable.is_server_error());
        assert!(!NetworkError::Timeout.is_client_error());
    }
}

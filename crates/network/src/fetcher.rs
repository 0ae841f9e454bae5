// crates/network/src/fetcher.rs
//! Feed retrieval

use crate::client::Client;
use crate::error::{NetworkError, NetworkResult};
use bytes::Bytes;
use std::future::Future;
use std::time::Duration;

/// Retrieves raw feed documents
pub trait FeedFetcher: Send + Sync {
    /// Fetches the document at `url`, giving up after `timeout`
    fn fetch(&self, url: &str, timeout: Duration) -> impl Future<Output = NetworkResult<Bytes>> + Send;
}

impl FeedFetcher for Client {
    async fn fetch(&self, url: &str, timeout: Duration) -> NetworkResult<Bytes> {
        let response = self.get_with_timeout(url, timeout).await?;
        let body = response.bytes().await.map_err(NetworkError::from_reqwest)?;

        log::debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_rejects_invalid_url() {
        let client = Client::new().expect("Failed to create client");
        let result = client.fetch("file:///etc/hosts", Duration::from_secs(1)).await;
        assert!(matches!(result, Err(NetworkError::InvalidUrl(_))));
    }
}

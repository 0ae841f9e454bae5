// crates/network/src/lib.rs
//! HTTP retrieval of feed documents

mod client;
mod error;
mod fetcher;

pub use client::{Client, ClientConfig};
pub use error::{NetworkError, NetworkResult};
pub use fetcher::FeedFetcher;

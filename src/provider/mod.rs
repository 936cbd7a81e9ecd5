//! Google Custom Search integration.

pub mod client;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod types;


pub use client::{GoogleSearchClient, SearchProvider};
pub use error::ProviderError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockSearchProvider;
pub use types::SearchResult;

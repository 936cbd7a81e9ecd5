//! Search provider error types.

use thiserror::Error;

/// Errors from a single search provider call.
///
/// In PRO mode these are recovered locally (the failing sub-query is skipped);
/// in BASIC mode, and when every PRO sub-query fails, they become fatal.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The HTTP request could not be sent or timed out.
    #[error("search request failed: {source}")]
    RequestFailed {
        #[source]
        source: reqwest::Error,
    },

    /// The provider answered with a non-success status.
    #[error("search provider returned status {status}: {body}")]
    BadStatus { status: u16, body: String },

    /// The response body was not the expected JSON shape.
    #[error("failed to decode provider response: {source}")]
    DecodeFailed {
        #[source]
        source: reqwest::Error,
    },

    /// Scripted failure, used by the mock provider in tests.
    #[cfg(any(test, feature = "mock"))]
    #[error("mock provider failure: {message}")]
    Scripted { message: String },
}

//! Query construction error types.

use thiserror::Error;

/// Errors that can occur while building provider queries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// The subject string was empty (or whitespace/quotes only) after
    /// normalization. Surfaced to callers as a client error, never retried.
    #[error("subject is empty after normalization")]
    EmptySubject,
}

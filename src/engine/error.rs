//! Pipeline error types.

use thiserror::Error;

use crate::provider::ProviderError;
use crate::query::QueryError;

/// Errors surfaced by a full scan.
///
/// Individual sub-query failures in PRO mode are absorbed (logged and
/// skipped); only a total provider failure becomes an error, so callers can
/// tell "provider dead" from "query succeeded, nothing relevant found".
#[derive(Debug, Error)]
pub enum EngineError {
    /// Degenerate subject; client error, not retried.
    #[error(transparent)]
    InvalidInput(#[from] QueryError),

    /// The single BASIC-mode query failed; there is no fallback.
    #[error("search provider failed: {0}")]
    Provider(#[from] ProviderError),

    /// Every PRO-mode sub-query failed; zero usable results.
    #[error("all {attempted} sub-queries failed; no usable results")]
    AllQueriesFailed { attempted: usize },
}

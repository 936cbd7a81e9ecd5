//! TrustCheck library crate (used by the server binary and integration tests).
//!
//! # Pipeline
//!
//! One scan flows leaf to root:
//!
//! 1. [`SubjectQuery`] — normalize/tokenize the raw subject.
//! 2. [`QueryBuilder`] — expand into provider query strings (BASIC/PRO).
//! 3. [`SearchProvider`] — fetch raw results (paginated, fanned out).
//! 4. [`RelevanceFilter`] — drop results about namesakes/unrelated pages.
//! 5. [`dedupe`] — collapse results sharing a URL, first seen wins.
//! 6. [`SeverityClassifier`] — per-result risk tier and points.
//! 7. [`Aggregator`] — 0-100 score, LOW/MEDIUM/HIGH level, tallies.
//!
//! [`ReputationEngine`] orchestrates the pipeline; [`gateway`] exposes it
//! over HTTP. Strategy knobs ([`MatchPolicy`], [`ScoringStrategy`],
//! [`ScoreFormula`]) are fixed per deployment through [`Config`].
//!
//! ## Test/Mock Support
//!
//! [`MockSearchProvider`] is available behind `#[cfg(any(test, feature =
//! "mock"))]`.

pub mod aggregate;
pub mod config;
pub mod constants;
pub mod dedupe;
pub mod engine;
pub mod gateway;
pub mod provider;
pub mod query;
pub mod relevance;
pub mod severity;
pub mod subject;

pub use aggregate::{Aggregator, RiskLevel, ScoreFormula, SeverityCounts, Verdict};
pub use config::{Config, ConfigError};
pub use dedupe::dedupe;
pub use engine::{EngineError, ReputationEngine};
pub use gateway::{AppState, GatewayError, router};
#[cfg(any(test, feature = "mock"))]
pub use provider::MockSearchProvider;
pub use provider::{GoogleSearchClient, ProviderError, SearchProvider, SearchResult};
pub use query::{QueryBuilder, QueryError, ScanMode};
pub use relevance::{LOOSE_MAX_TOKEN_WINDOW, MatchPolicy, RelevanceFilter};
pub use severity::{ScoredResult, ScoringStrategy, Severity, SeverityClassifier};
pub use subject::SubjectQuery;

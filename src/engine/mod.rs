//! Scan orchestration.
//!
//! One request runs the whole pipeline: subject normalization → query
//! building → provider fan-out → relevance filter → dedup → per-result
//! classification → aggregation. No state survives the request; the only
//! shared data are the static keyword/domain tables.

pub mod error;


pub use error::EngineError;

use futures_util::StreamExt;
use futures_util::stream;
use tracing::{debug, info, warn};

use crate::aggregate::{Aggregator, Verdict};
use crate::config::Config;
use crate::constants::{PROVIDER_MAX_RANK, PROVIDER_PAGE_SIZE};
use crate::dedupe::dedupe;
use crate::provider::{ProviderError, SearchProvider, SearchResult};
use crate::query::{QueryBuilder, ScanMode};
use crate::relevance::RelevanceFilter;
use crate::severity::{ScoringStrategy, SeverityClassifier};
use crate::subject::SubjectQuery;

/// Runs reputation scans against a search backend.
pub struct ReputationEngine<P> {
    provider: P,
    builder: QueryBuilder,
    filter: RelevanceFilter,
    strategy: ScoringStrategy,
    aggregator: Aggregator,
    max_results_basic: usize,
    max_results_pro: usize,
    per_query_limit: usize,
    fanout_concurrency: usize,
}

impl<P: SearchProvider> ReputationEngine<P> {
    pub fn new(provider: P, config: &Config) -> Self {
        Self {
            provider,
            builder: QueryBuilder::new(),
            filter: RelevanceFilter::new(config.match_policy),
            strategy: config.scoring_strategy,
            aggregator: Aggregator::new(
                config.score_formula,
                config.scoring_strategy,
                config.high_threshold,
                config.medium_threshold,
            ),
            max_results_basic: config.max_results_basic,
            max_results_pro: config.max_results_pro,
            per_query_limit: config.per_query_limit,
            fanout_concurrency: config.fanout_concurrency.max(1),
        }
    }

    /// Scans `raw_subject` and returns the aggregate verdict.
    pub async fn analyze(&self, raw_subject: &str, mode: ScanMode) -> Result<Verdict, EngineError> {
        self.analyze_with_budget(raw_subject, mode, None).await
    }

    /// Like [`analyze`](Self::analyze), with a caller-supplied result cap.
    /// The cap can only shrink the configured budget, never grow it.
    pub async fn analyze_with_budget(
        &self,
        raw_subject: &str,
        mode: ScanMode,
        max_results: Option<usize>,
    ) -> Result<Verdict, EngineError> {
        let subject = SubjectQuery::parse(raw_subject);
        let queries = self.builder.build(&subject, mode)?;
        let attempted = queries.len();

        let configured = match mode {
            ScanMode::Basic => self.max_results_basic,
            ScanMode::Pro => self.max_results_pro,
        };
        let total_budget = max_results
            .map_or(configured, |cap| cap.min(configured))
            .max(1);
        let per_query = (total_budget / attempted)
            .clamp(1, self.per_query_limit);

        debug!(
            subject = subject.phrase(),
            ?mode,
            attempted,
            per_query,
            "starting scan"
        );

        // Order-preserving bounded fan-out: dedup's first-seen tie-break
        // stays deterministic in declared query order. The futures are built
        // up front; mapping inside the stream would tie them to a closure
        // lifetime that axum's handler bounds reject.
        let fetches: Vec<_> = queries
            .iter()
            .map(|query| self.fetch_query(query, per_query))
            .collect();
        let outcomes: Vec<Result<Vec<SearchResult>, ProviderError>> = stream::iter(fetches)
            .buffered(self.fanout_concurrency)
            .collect()
            .await;

        let mut failed = 0;
        let mut raw_results = Vec::new();
        for (query, outcome) in queries.iter().zip(outcomes) {
            match outcome {
                Ok(results) => raw_results.extend(results),
                Err(err) => {
                    failed += 1;
                    warn!(query = %query, error = %err, "sub-query failed, skipping");
                    if mode == ScanMode::Basic {
                        // Single query, no fallback.
                        return Err(EngineError::Provider(err));
                    }
                }
            }
        }

        if failed == attempted {
            return Err(EngineError::AllQueriesFailed { attempted });
        }

        let fetched = raw_results.len();
        let relevant: Vec<SearchResult> = raw_results
            .into_iter()
            .filter(|r| self.filter.is_relevant(&subject, r))
            .collect();
        let deduped = dedupe(relevant);

        let recency_bonus = mode == ScanMode::Pro;
        let classifier = SeverityClassifier::new(self.strategy, recency_bonus);
        let scored = deduped.into_iter().map(|r| classifier.score(r)).collect();

        let mut verdict = self.aggregator.aggregate(subject.phrase(), scored);
        verdict.queries_attempted = attempted;
        verdict.queries_failed = failed;

        info!(
            subject = subject.phrase(),
            fetched,
            total = verdict.total_results,
            negative = verdict.negative_results,
            score = verdict.score,
            level = ?verdict.level,
            failed,
            "scan complete"
        );

        Ok(verdict)
    }

    /// Fetches up to `budget` results for one sub-query, paginating in
    /// provider-sized pages and stopping at the provider's rank ceiling.
    async fn fetch_query(
        &self,
        query: &str,
        budget: usize,
    ) -> Result<Vec<SearchResult>, ProviderError> {
        let mut collected: Vec<SearchResult> = Vec::with_capacity(budget);
        let mut start = 1;

        while collected.len() < budget && start <= PROVIDER_MAX_RANK {
            let remaining = budget - collected.len();
            let num = remaining
                .min(PROVIDER_PAGE_SIZE)
                .min(PROVIDER_MAX_RANK - start + 1);

            let page = self.provider.search(query, start, num).await?;
            let page_len = page.len();

            collected.extend(page.into_iter().map(|mut r| {
                r.source_query = Some(query.to_string());
                r
            }));

            if page_len < num {
                // Provider ran out of results for this query.
                break;
            }
            start += page_len;
        }

        Ok(collected)
    }
}

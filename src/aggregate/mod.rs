//! Score aggregation.
//!
//! Combines per-result severities into a 0-100 score and a LOW/MEDIUM/HIGH
//! level. Two formulas, selected by configuration:
//!
//! - [`ScoreFormula::RatioNormalized`] (default): score is the fraction of
//!   attainable risk points actually observed. Stable under result-count
//!   variance: 10 results or 150 with the same negative ratio score the
//!   same, which matters because result count depends on the provider's
//!   pagination behavior.
//! - [`ScoreFormula::AdditiveClamped`]: grows with both the count and the
//!   intensity of negative hits, clamped to 100. Only sensible when the
//!   upstream result count is tightly bounded.

pub mod types;


pub use types::{RiskLevel, SeverityCounts, Verdict};

use serde::Deserialize;

use crate::severity::{ScoredResult, ScoringStrategy};

/// Default weight per negative result in the additive-clamped formula.
pub const DEFAULT_COUNT_WEIGHT: u32 = 3;

/// Default weight per risk point in the additive-clamped formula.
pub const DEFAULT_POINTS_WEIGHT: u32 = 5;

/// How the aggregate score is computed from per-result points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFormula {
    #[default]
    RatioNormalized,
    AdditiveClamped,
}

/// Builds the final [`Verdict`] from classified results.
#[derive(Debug, Clone, Copy)]
pub struct Aggregator {
    formula: ScoreFormula,
    strategy: ScoringStrategy,
    high_threshold: u32,
    medium_threshold: u32,
    count_weight: u32,
    points_weight: u32,
}

impl Aggregator {
    /// `strategy` supplies the per-item maximum used as the ratio formula's
    /// denominator; it must be the same strategy the classifier ran with.
    pub fn new(
        formula: ScoreFormula,
        strategy: ScoringStrategy,
        high_threshold: u32,
        medium_threshold: u32,
    ) -> Self {
        Self {
            formula,
            strategy,
            high_threshold,
            medium_threshold,
            count_weight: DEFAULT_COUNT_WEIGHT,
            points_weight: DEFAULT_POINTS_WEIGHT,
        }
    }

    pub fn formula(&self) -> ScoreFormula {
        self.formula
    }

    /// Aggregates classified results into a verdict for `query`.
    ///
    /// An empty input yields score 0 and [`RiskLevel::Low`] unconditionally.
    pub fn aggregate(&self, query: &str, results: Vec<ScoredResult>) -> Verdict {
        let total_results = results.len();
        let mut by_severity = SeverityCounts::default();
        let mut negative_results = 0;
        let mut total_points: u64 = 0;

        for item in &results {
            by_severity.record(item.severity);
            if item.severity.is_negative() {
                negative_results += 1;
            }
            total_points += u64::from(item.risk_points);
        }

        let score = self.score(total_results, negative_results, total_points);
        let level = self.level(score, total_results);

        Verdict {
            query: query.to_string(),
            score,
            level,
            total_results,
            negative_results,
            by_severity,
            results,
            queries_attempted: 0,
            queries_failed: 0,
        }
    }

    fn score(&self, total_results: usize, negative_results: usize, total_points: u64) -> u32 {
        if total_results == 0 {
            return 0;
        }

        match self.formula {
            ScoreFormula::RatioNormalized => {
                let max_possible = total_results as u64 * u64::from(self.strategy.max_points());
                let scaled = (total_points as f64 / max_possible as f64) * 100.0;
                (scaled.round() as u32).min(100)
            }
            ScoreFormula::AdditiveClamped => {
                let raw = negative_results as u64 * u64::from(self.count_weight)
                    + total_points * u64::from(self.points_weight);
                raw.min(100) as u32
            }
        }
    }

    fn level(&self, score: u32, total_results: usize) -> RiskLevel {
        if total_results == 0 {
            return RiskLevel::Low;
        }
        if score >= self.high_threshold {
            RiskLevel::High
        } else if score >= self.medium_threshold {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

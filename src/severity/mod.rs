//! Per-result risk classification.
//!
//! Two strategies, selected by configuration and never mixed within one
//! deployment:
//!
//! - [`ScoringStrategy::Tiered`]: ordered keyword tiers tested top-down; the
//!   first tier with any hit decides the severity. Additional hits in the
//!   same tier never escalate.
//! - [`ScoringStrategy::Additive`]: keyword, recency and domain-authority
//!   signals each add fixed points; the sum is bucketed into a severity.
//!
//! Classification is a pure function of title/snippet/URL; no side effects,
//! no network access.

pub mod types;


pub use types::{ScoredResult, Severity};

use serde::Deserialize;

use crate::constants::{
    HIGH_AUTH_DOMAINS, NEGATIVE_KEYWORDS_EN, NEGATIVE_KEYWORDS_ES, NEGATIVE_KEYWORDS_IT,
    RECENT_YEARS, TIER_FINANCIAL_CRIME, TIER_REGULATORY, TIER_SERIOUS_CRIME,
};
use crate::provider::SearchResult;

/// Which scoring strategy the classifier runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringStrategy {
    /// First-tier-wins keyword tiers. Max attainable points: 3.
    Tiered,
    /// Summed keyword/recency/domain weights bucketed into tiers.
    /// Max attainable points: 4.
    #[default]
    Additive,
}

impl ScoringStrategy {
    /// Highest per-item point value this strategy can produce. The ratio
    /// score formula uses this as its denominator.
    pub fn max_points(self) -> u32 {
        match self {
            ScoringStrategy::Tiered => Severity::High.points(),
            ScoringStrategy::Additive => Severity::Critical.points(),
        }
    }
}

/// Classifies one result into a severity tier and numeric risk points.
#[derive(Debug, Clone, Copy)]
pub struct SeverityClassifier {
    strategy: ScoringStrategy,
    recency_bonus: bool,
}

impl SeverityClassifier {
    /// `recency_bonus` enables the +1 recent-year increment (additive
    /// strategy, PRO aggregation path only).
    pub fn new(strategy: ScoringStrategy, recency_bonus: bool) -> Self {
        Self {
            strategy,
            recency_bonus,
        }
    }

    pub fn strategy(&self) -> ScoringStrategy {
        self.strategy
    }

    /// Returns the severity tier and risk points for `result`.
    pub fn classify(&self, result: &SearchResult) -> (Severity, u32) {
        let text = format!("{} {}", result.title, result.snippet).to_lowercase();

        match self.strategy {
            ScoringStrategy::Tiered => classify_tiered(&text),
            ScoringStrategy::Additive => {
                classify_additive(&text, &result.url, self.recency_bonus)
            }
        }
    }

    /// Consumes a result and attaches its classification.
    pub fn score(&self, result: SearchResult) -> ScoredResult {
        let (severity, risk_points) = self.classify(&result);
        ScoredResult {
            result,
            severity,
            risk_points,
        }
    }
}

fn classify_tiered(text: &str) -> (Severity, u32) {
    // Tiers are mutually exclusive maxima: the first tier with a hit wins
    // and further hits (same tier or below) change nothing.
    let tiers: [(&[&str], Severity); 3] = [
        (TIER_SERIOUS_CRIME, Severity::High),
        (TIER_FINANCIAL_CRIME, Severity::Medium),
        (TIER_REGULATORY, Severity::Low),
    ];

    for (keywords, severity) in tiers {
        if keywords.iter().any(|kw| text.contains(kw)) {
            return (severity, severity.points());
        }
    }

    (Severity::None, 0)
}

fn classify_additive(text: &str, url: &str, recency_bonus: bool) -> (Severity, u32) {
    let mut points = 0;

    if has_negative_keyword(text) {
        points += 1;
    }

    if recency_bonus && is_recent(text) {
        points += 1;
    }

    points += domain_points(url);

    let severity = match points {
        0 => Severity::None,
        1 => Severity::Low,
        2 => Severity::Medium,
        3 => Severity::High,
        _ => Severity::Critical,
    };

    (severity, points)
}

fn has_negative_keyword(text: &str) -> bool {
    NEGATIVE_KEYWORDS_IT
        .iter()
        .chain(NEGATIVE_KEYWORDS_EN)
        .chain(NEGATIVE_KEYWORDS_ES)
        .any(|kw| text.contains(kw))
}

fn is_recent(text: &str) -> bool {
    RECENT_YEARS.iter().any(|year| text.contains(year))
}

/// Authority weight for the hosting domain.
///
/// Matches are substring-of-hostname, never full-string equality, so
/// subdomains of a listed domain count.
fn domain_points(url: &str) -> u32 {
    let host = hostname(url);

    if HIGH_AUTH_DOMAINS.iter().any(|dom| host.contains(dom)) {
        return 2;
    }
    if host.contains(".gov") || host.contains(".gouv") {
        return 2;
    }
    if host.contains(".int") || host.contains(".eu") {
        return 1;
    }
    0
}

fn hostname(url: &str) -> String {
    let rest = url.split("://").nth(1).unwrap_or(url);
    rest.split('/').next().unwrap_or("").to_lowercase()
}

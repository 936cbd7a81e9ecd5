use serde::Serialize;

use crate::provider::SearchResult;

/// Discrete risk tier for one result.
///
/// `None` marks a result that passed the relevance filter but carries no
/// keyword/domain signal; it counts toward totals but never toward negative
/// counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Numeric risk points for this tier (0-4).
    pub fn points(self) -> u32 {
        match self {
            Severity::None => 0,
            Severity::Low => 1,
            Severity::Medium => 2,
            Severity::High => 3,
            Severity::Critical => 4,
        }
    }

    /// `true` for any tier above [`Severity::None`].
    pub fn is_negative(self) -> bool {
        self > Severity::None
    }
}

/// A search result with its classified severity. Never mutated after the
/// classifier produces it.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredResult {
    #[serde(flatten)]
    pub result: SearchResult,
    pub severity: Severity,
    pub risk_points: u32,
}

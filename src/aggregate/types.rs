use serde::Serialize;

use crate::severity::{ScoredResult, Severity};

/// Final categorical verdict derived from the aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Per-severity result tallies for reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub none: usize,
}

impl SeverityCounts {
    pub fn record(&mut self, severity: Severity) {
        match severity {
            Severity::Critical => self.critical += 1,
            Severity::High => self.high += 1,
            Severity::Medium => self.medium += 1,
            Severity::Low => self.low += 1,
            Severity::None => self.none += 1,
        }
    }
}

/// The aggregate outcome of one scan. Built once per request, returned to
/// the caller, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct Verdict {
    pub query: String,
    pub score: u32,
    pub level: RiskLevel,
    pub total_results: usize,
    pub negative_results: usize,
    pub by_severity: SeverityCounts,
    pub results: Vec<ScoredResult>,
    /// Sub-queries issued for this scan.
    pub queries_attempted: usize,
    /// Sub-queries that failed and were skipped. Lets callers tell a thin
    /// but successful scan from a degraded one.
    pub queries_failed: usize,
}

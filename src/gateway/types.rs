use serde::{Deserialize, Serialize};

use crate::aggregate::{RiskLevel, SeverityCounts, Verdict};
use crate::query::ScanMode;
use crate::severity::ScoredResult;

/// Body of `POST /analyze` and `POST /analyze-pro`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub query: String,
    /// Scan depth; defaults to PRO like the main app path.
    #[serde(default)]
    pub mode: ScanMode,
    /// Optional cap on fetched results; can only shrink the server budget.
    #[serde(default)]
    pub max_results: Option<usize>,
}

/// JSON verdict returned to callers.
///
/// BASIC responses omit the per-severity breakdown and per-item
/// `source_query`; PRO responses carry both.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub query: String,
    pub score: u32,
    pub level: RiskLevel,
    pub total_results: usize,
    pub negative_results: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_severity: Option<SeverityCounts>,
    pub results: Vec<ScoredResult>,
    pub queries_attempted: usize,
    pub queries_failed: usize,
}

impl AnalyzeResponse {
    pub fn from_verdict(verdict: Verdict, mode: ScanMode) -> Self {
        let by_severity = match mode {
            ScanMode::Basic => None,
            ScanMode::Pro => Some(verdict.by_severity),
        };

        let mut results = verdict.results;
        if mode == ScanMode::Basic {
            for item in &mut results {
                item.result.source_query = None;
            }
        }

        Self {
            query: verdict.query,
            score: verdict.score,
            level: verdict.level,
            total_results: verdict.total_results,
            negative_results: verdict.negative_results,
            by_severity,
            results,
            queries_attempted: verdict.queries_attempted,
            queries_failed: verdict.queries_failed,
        }
    }
}

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

use serde::Serialize;

/// One raw result from the search provider. Immutable once returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub title: String,
    pub snippet: String,
    pub url: String,
    /// The sub-query that produced this result. Set by the engine, not the
    /// provider; reported to callers in PRO mode only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_query: Option<String>,
}

impl SearchResult {
    pub fn new(title: impl Into<String>, snippet: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            snippet: snippet.into(),
            url: url.into(),
            source_query: None,
        }
    }
}

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::client::SearchProvider;
use super::error::ProviderError;
use super::types::SearchResult;

/// Scriptable in-memory provider for tests.
///
/// Results are registered per query string; `search` serves the requested
/// page out of the registered list. Queries scripted as failing return
/// [`ProviderError::Scripted`]. Unregistered queries return an empty page.
#[derive(Default)]
pub struct MockSearchProvider {
    results: RwLock<HashMap<String, Vec<SearchResult>>>,
    failing: RwLock<HashMap<String, String>>,
    calls: AtomicUsize,
}

impl MockSearchProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the full result list for `query`.
    pub fn script_results(&self, query: &str, results: Vec<SearchResult>) {
        self.results
            .write()
            .expect("lock poisoned")
            .insert(query.to_string(), results);
    }

    /// Makes every call for `query` fail with the given message.
    pub fn script_failure(&self, query: &str, message: &str) {
        self.failing
            .write()
            .expect("lock poisoned")
            .insert(query.to_string(), message.to_string());
    }

    /// Number of `search` calls served so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SearchProvider for MockSearchProvider {
    async fn search(
        &self,
        query: &str,
        start: usize,
        num: usize,
    ) -> Result<Vec<SearchResult>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = self.failing.read().expect("lock poisoned").get(query) {
            return Err(ProviderError::Scripted {
                message: message.clone(),
            });
        }

        let results = self.results.read().expect("lock poisoned");
        let Some(all) = results.get(query) else {
            return Ok(Vec::new());
        };

        // 1-based pagination, like the real provider.
        let offset = start.saturating_sub(1);
        Ok(all.iter().skip(offset).take(num).cloned().collect())
    }
}

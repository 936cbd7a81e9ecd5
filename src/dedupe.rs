//! Result deduplication.
//!
//! Identity is the exact raw URL string: no scheme/trailing-slash/query
//! normalization. Collapsing `http://` vs `https://` variants would cost
//! little, but treating near-identical URLs as distinct keeps recall and the
//! first-seen tie-break simple; this is a deliberate tradeoff, not an
//! oversight.

use std::collections::HashSet;

use crate::provider::SearchResult;

/// Drops results with empty URLs and any result whose URL was already seen.
/// Stable: first occurrence wins, input order is preserved. Idempotent.
pub fn dedupe(results: Vec<SearchResult>) -> Vec<SearchResult> {
    let mut seen: HashSet<String> = HashSet::with_capacity(results.len());
    results
        .into_iter()
        .filter(|r| !r.url.is_empty() && seen.insert(r.url.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(url: &str, title: &str) -> SearchResult {
        SearchResult::new(title, "", url)
    }

    #[test]
    fn test_first_seen_wins_and_order_preserved() {
        let input = vec![
            r("https://a.example/x", "first"),
            r("https://b.example/y", "second"),
            r("https://a.example/x", "duplicate"),
            r("https://c.example/z", "third"),
        ];

        let out = dedupe(input);

        assert_eq!(out.len(), 3);
        assert_eq!(out[0].title, "first");
        assert_eq!(out[1].title, "second");
        assert_eq!(out[2].title, "third");
    }

    #[test]
    fn test_empty_urls_dropped() {
        let out = dedupe(vec![r("", "no url"), r("https://a.example", "kept")]);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "kept");
    }

    #[test]
    fn test_no_url_normalization() {
        // Exact string equality only: these are deliberately kept distinct.
        let out = dedupe(vec![
            r("https://a.example/x", "https"),
            r("http://a.example/x", "http"),
            r("https://a.example/x/", "trailing slash"),
        ]);

        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_idempotent() {
        let input = vec![
            r("https://a.example/x", "first"),
            r("https://a.example/x", "dup"),
            r("https://b.example/y", "second"),
        ];

        let once = dedupe(input);
        let twice = dedupe(once.clone());

        assert_eq!(once, twice);
    }
}

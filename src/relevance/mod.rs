//! Name relevance filtering.
//!
//! Decides whether a raw search result actually concerns the queried subject
//! or a namesake/unrelated page. This is the most failure-prone stage of the
//! pipeline: too loose and the score drowns in noise about other people, too
//! strict and genuinely adverse coverage is dropped.
//!
//! Rules, applied in order (first success wins):
//! 1. An empty subject accepts everything (degenerate case, no filtering).
//! 2. The full subject phrase appearing as a contiguous word run in the
//!    combined title/snippet/URL text accepts.
//! 3. Otherwise every significant token must appear as a whole word;
//!    [`MatchPolicy::Loose`] additionally requires all tokens within a
//!    bounded window, [`MatchPolicy::Strict`] only accepts fixed two-token
//!    permutations ("last first", "last, first").

#[cfg(test)]
mod tests;

use serde::Deserialize;

use crate::provider::SearchResult;
use crate::subject::SubjectQuery;

/// Maximum word distance between the outermost subject tokens under the
/// loose policy.
pub const LOOSE_MAX_TOKEN_WINDOW: usize = 8;

/// Strictness of token-level name matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Whole-word matches for every significant token, all within a bounded
    /// window. Recall-biased default.
    #[default]
    Loose,
    /// Contiguous phrase or known two-token permutations only.
    Strict,
}

/// Subject/result relevance decision.
#[derive(Debug, Clone, Copy)]
pub struct RelevanceFilter {
    policy: MatchPolicy,
}

impl RelevanceFilter {
    pub fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    /// The active match policy.
    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Returns `true` when `result` concerns `subject`.
    ///
    /// A non-match is a normal outcome, never an error.
    pub fn is_relevant(&self, subject: &SubjectQuery, result: &SearchResult) -> bool {
        if subject.is_empty() {
            return true;
        }

        let text = combined_text(result);
        let words: Vec<&str> = text.split_whitespace().collect();

        if phrase_run_present(subject.tokens(), &words) {
            return true;
        }

        match self.policy {
            MatchPolicy::Loose => loose_match(subject, &words),
            MatchPolicy::Strict => strict_match(subject, &words),
        }
    }
}

/// Lower-cased `title + snippet + url`, with URL separators and punctuation
/// normalized to spaces so tokens split on word boundaries.
fn combined_text(result: &SearchResult) -> String {
    // Full Unicode lowercasing, matching subject normalization; per-char
    // ASCII folding would leave accented capitals ("JOSÉ") unfolded.
    let raw = format!("{} {} {}", result.title, result.snippet, result.url).to_lowercase();
    raw.chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect()
}

/// `true` when the subject's tokens appear as a contiguous word run.
///
/// Word-level (not substring) so "ferrari" never matches inside "ferraris"
/// and "oretta croce" never matches inside "loretta croce".
fn phrase_run_present(tokens: &[String], words: &[&str]) -> bool {
    if tokens.is_empty() {
        return false;
    }
    words
        .windows(tokens.len())
        .any(|w| w.iter().zip(tokens).all(|(word, token)| *word == token.as_str()))
}

fn loose_match(subject: &SubjectQuery, words: &[&str]) -> bool {
    let tokens = subject.significant_tokens();
    if tokens.is_empty() {
        // Nothing significant survived normalization (e.g. "Li An"); fall
        // back to requiring every raw token as a whole word.
        return subject.tokens().iter().all(|t| words.contains(&t.as_str()));
    }

    if tokens.len() == 1 {
        return words.contains(&tokens[0].as_str());
    }

    min_covering_window(tokens, words)
        .is_some_and(|span| span <= LOOSE_MAX_TOKEN_WINDOW)
}

fn strict_match(subject: &SubjectQuery, words: &[&str]) -> bool {
    let tokens = subject.significant_tokens();
    match tokens {
        [single] => words.contains(&single.as_str()),
        [first, last] => {
            // The contiguous "first last" order was already accepted by the
            // phrase check; only the reversed adjacency remains. Punctuation
            // is normalized away, so "last, first" reduces to "last first".
            words
                .windows(2)
                .any(|w| w[0] == last.as_str() && w[1] == first.as_str())
        }
        _ => false,
    }
}

/// Smallest word-index span containing at least one occurrence of every
/// token, or `None` if some token never appears as a whole word.
fn min_covering_window(tokens: &[String], words: &[&str]) -> Option<usize> {
    use std::collections::HashMap;

    let needed: HashMap<&str, usize> = tokens
        .iter()
        .enumerate()
        .map(|(i, t)| (t.as_str(), i))
        .collect();

    let mut counts = vec![0usize; tokens.len()];
    let mut covered = 0usize;
    let mut best: Option<usize> = None;
    let mut left = 0usize;

    for (right, word) in words.iter().enumerate() {
        let Some(&idx) = needed.get(word) else {
            continue;
        };
        counts[idx] += 1;
        if counts[idx] == 1 {
            covered += 1;
        }

        while covered == needed.len() {
            let span = right - left;
            best = Some(best.map_or(span, |b| b.min(span)));

            if let Some(&lidx) = needed.get(words[left]) {
                counts[lidx] -= 1;
                if counts[lidx] == 0 {
                    covered -= 1;
                }
            }
            left += 1;
        }
    }

    best
}

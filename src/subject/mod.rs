//! Subject normalization and tokenization.
//!
//! A [`SubjectQuery`] is derived once per request and shared by the query
//! builder and the relevance filter.


use crate::constants::SUBJECT_STOP_WORDS;

/// Normalized, tokenized form of the input subject string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectQuery {
    phrase: String,
    tokens: Vec<String>,
    significant_tokens: Vec<String>,
}

impl SubjectQuery {
    /// Builds a subject query from raw user input.
    ///
    /// Normalization: newlines become spaces, quote characters are stripped,
    /// internal whitespace collapses to single spaces, and the result is
    /// lower-cased. `significant_tokens` additionally drops stop words,
    /// legal-entity suffixes and tokens of length <= 2.
    pub fn parse(raw: &str) -> Self {
        let phrase = normalize(raw);
        let tokens: Vec<String> = phrase.split(' ').filter(|t| !t.is_empty()).map(String::from).collect();
        let significant_tokens = tokens
            .iter()
            .filter(|t| t.chars().count() > 2 && !SUBJECT_STOP_WORDS.contains(&t.as_str()))
            .cloned()
            .collect();

        Self {
            phrase,
            tokens,
            significant_tokens,
        }
    }

    /// The full normalized phrase, e.g. `"oretta croce"`.
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// All normalized tokens, stop words included.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Tokens that must all be present for a token-level relevance match.
    pub fn significant_tokens(&self) -> &[String] {
        &self.significant_tokens
    }

    /// First token of the phrase, if any.
    pub fn first_token(&self) -> Option<&str> {
        self.tokens.first().map(String::as_str)
    }

    /// Last token of the phrase, if any.
    pub fn last_token(&self) -> Option<&str> {
        self.tokens.last().map(String::as_str)
    }

    /// `true` when the subject normalized away to nothing.
    pub fn is_empty(&self) -> bool {
        self.phrase.is_empty()
    }
}

fn normalize(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            '"' | '\'' | '“' | '”' | '‘' | '’' => ' ',
            _ => c,
        })
        .collect();

    cleaned
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

//! Provider query construction.
//!
//! BASIC mode issues a single exact-phrase query. PRO mode widens the net
//! with one neutral query plus one query per supported language, each
//! OR-combining that language's negative keywords. Splitting by language
//! keeps each query short enough that the provider neither truncates nor
//! down-ranks it, and caps the number of provider calls per scan.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::QueryError;

use serde::Deserialize;

use crate::constants::{NEGATIVE_KEYWORDS_EN, NEGATIVE_KEYWORDS_ES, NEGATIVE_KEYWORDS_IT};
use crate::subject::SubjectQuery;

/// Scan depth requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// Single exact-phrase query.
    Basic,
    /// Neutral query plus per-language negative-keyword queries.
    #[default]
    Pro,
}

/// Builds provider query strings from a normalized subject.
#[derive(Debug, Clone, Copy)]
pub struct QueryBuilder {
    negative_it: &'static [&'static str],
    negative_en: &'static [&'static str],
    negative_es: &'static [&'static str],
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self {
            negative_it: NEGATIVE_KEYWORDS_IT,
            negative_en: NEGATIVE_KEYWORDS_EN,
            negative_es: NEGATIVE_KEYWORDS_ES,
        }
    }
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the provider queries for `subject`, in the order they must be
    /// issued (the neutral query first, then IT/EN/ES).
    ///
    /// Fails with [`QueryError::EmptySubject`] when the subject normalized
    /// away to nothing.
    pub fn build(&self, subject: &SubjectQuery, mode: ScanMode) -> Result<Vec<String>, QueryError> {
        if subject.is_empty() {
            return Err(QueryError::EmptySubject);
        }

        let base = format!("\"{}\"", subject.phrase());

        match mode {
            ScanMode::Basic => Ok(vec![base]),
            ScanMode::Pro => {
                let queries = vec![
                    base.clone(),
                    format!("{base} ({})", self.negative_it.join(" OR ")),
                    format!("{base} ({})", self.negative_en.join(" OR ")),
                    format!("{base} ({})", self.negative_es.join(" OR ")),
                ];
                Ok(queries)
            }
        }
    }
}

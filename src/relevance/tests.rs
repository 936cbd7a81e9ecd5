use super::*;
use crate::provider::SearchResult;
use crate::subject::SubjectQuery;

fn result(title: &str, snippet: &str) -> SearchResult {
    SearchResult::new(title, snippet, "https://news.example.com/article")
}

#[test]
fn test_exact_phrase_match() {
    let filter = RelevanceFilter::new(MatchPolicy::Loose);
    let subject = SubjectQuery::parse("Oretta Croce");

    assert!(filter.is_relevant(
        &subject,
        &result("Oretta Croce was named in the inquiry", "")
    ));
}

#[test]
fn test_missing_token_rejected() {
    let filter = RelevanceFilter::new(MatchPolicy::Loose);
    let subject = SubjectQuery::parse("Oretta Croce");

    // Loose policy still requires both tokens.
    assert!(!filter.is_relevant(&subject, &result("Croce family moves to Milan", "")));
}

#[test]
fn test_word_boundary_prevents_substring_match() {
    let filter = RelevanceFilter::new(MatchPolicy::Loose);
    let subject = SubjectQuery::parse("Oretta Croce");

    // "oretta" must not match inside "Loretta".
    assert!(!filter.is_relevant(&subject, &result("Loretta Croce wins award", "")));
}

#[test]
fn test_loose_tokens_within_window() {
    let filter = RelevanceFilter::new(MatchPolicy::Loose);
    let subject = SubjectQuery::parse("Oretta Croce");

    assert!(filter.is_relevant(
        &subject,
        &result("Croce, Oretta: hearing scheduled", "")
    ));
    assert!(filter.is_relevant(
        &subject,
        &result("Oretta (also known as) Croce", "charged in 2024")
    ));
}

#[test]
fn test_loose_tokens_too_far_apart_rejected() {
    let filter = RelevanceFilter::new(MatchPolicy::Loose);
    let subject = SubjectQuery::parse("Oretta Croce");

    let snippet = "Oretta reviewed the festival program which featured many \
                   artists performers and speakers before the Croce foundation gala";
    assert!(!filter.is_relevant(&subject, &result("Festival report", snippet)));
}

#[test]
fn test_strict_accepts_reversed_adjacent_order() {
    let filter = RelevanceFilter::new(MatchPolicy::Strict);
    let subject = SubjectQuery::parse("Oretta Croce");

    assert!(filter.is_relevant(&subject, &result("Croce Oretta indicted", "")));
    assert!(filter.is_relevant(&subject, &result("Croce, Oretta indicted", "")));
    assert!(filter.is_relevant(&subject, &result("Oretta Croce indicted", "")));
}

#[test]
fn test_strict_rejects_non_contiguous_tokens() {
    let filter = RelevanceFilter::new(MatchPolicy::Strict);
    let subject = SubjectQuery::parse("Oretta Croce");

    assert!(!filter.is_relevant(
        &subject,
        &result("Oretta spoke at the Croce foundation", "")
    ));
}

#[test]
fn test_single_token_subject_degrades_to_whole_word() {
    let subject = SubjectQuery::parse("Ferrari");

    let loose = RelevanceFilter::new(MatchPolicy::Loose);
    let strict = RelevanceFilter::new(MatchPolicy::Strict);

    assert!(loose.is_relevant(&subject, &result("Ferrari under investigation", "")));
    assert!(strict.is_relevant(&subject, &result("Ferrari under investigation", "")));
    assert!(!loose.is_relevant(&subject, &result("Ferraris of the world", "")));
}

#[test]
fn test_uppercase_accented_title_matches() {
    let filter = RelevanceFilter::new(MatchPolicy::Loose);
    let subject = SubjectQuery::parse("José García");

    // All-caps headlines must fold beyond ASCII: "JOSÉ" -> "josé".
    assert!(filter.is_relevant(
        &subject,
        &result("JOSÉ GARCÍA ARRESTED IN FRAUD PROBE", "")
    ));
}

#[test]
fn test_empty_subject_accepts_everything() {
    let filter = RelevanceFilter::new(MatchPolicy::Loose);
    let subject = SubjectQuery::parse("   ");

    assert!(filter.is_relevant(&subject, &result("anything at all", "")));
}

#[test]
fn test_url_counts_toward_matching() {
    let filter = RelevanceFilter::new(MatchPolicy::Loose);
    let subject = SubjectQuery::parse("Oretta Croce");

    let r = SearchResult::new(
        "Inquiry update",
        "",
        "https://example.com/oretta-croce-inquiry",
    );
    assert!(filter.is_relevant(&subject, &r));
}

#[test]
fn test_policy_is_exposed() {
    assert_eq!(
        RelevanceFilter::new(MatchPolicy::Strict).policy(),
        MatchPolicy::Strict
    );
    assert_eq!(MatchPolicy::default(), MatchPolicy::Loose);
}

use super::*;
use crate::subject::SubjectQuery;

#[test]
fn test_basic_mode_single_quoted_query() {
    let builder = QueryBuilder::new();
    let subject = SubjectQuery::parse("Acme Corp");

    let queries = builder.build(&subject, ScanMode::Basic).unwrap();

    assert_eq!(queries, ["\"acme corp\""]);
}

#[test]
fn test_pro_mode_four_queries_neutral_first() {
    let builder = QueryBuilder::new();
    let subject = SubjectQuery::parse("Acme Corp");

    let queries = builder.build(&subject, ScanMode::Pro).unwrap();

    assert_eq!(queries.len(), 4);
    assert_eq!(queries[0], "\"acme corp\"");
    // Each language query keeps the exact phrase and ORs its keywords.
    assert!(queries[1].starts_with("\"acme corp\" ("));
    assert!(queries[1].contains("truffa OR frode"));
    assert!(queries[2].contains("fraud OR scandal"));
    assert!(queries[3].contains("estafa OR fraude"));
}

#[test]
fn test_empty_subject_rejected() {
    let builder = QueryBuilder::new();
    let subject = SubjectQuery::parse("  \"\" \n");

    assert_eq!(
        builder.build(&subject, ScanMode::Basic),
        Err(QueryError::EmptySubject)
    );
    assert_eq!(
        builder.build(&subject, ScanMode::Pro),
        Err(QueryError::EmptySubject)
    );
}

#[test]
fn test_quotes_in_subject_do_not_break_phrase_quoting() {
    let builder = QueryBuilder::new();
    let subject = SubjectQuery::parse("\"Mario\" Rossi");

    let queries = builder.build(&subject, ScanMode::Basic).unwrap();

    assert_eq!(queries, ["\"mario rossi\""]);
}

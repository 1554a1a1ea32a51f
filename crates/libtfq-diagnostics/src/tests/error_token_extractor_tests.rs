//! Tests for walking parse failure chains to their expected tokens.

use crate::extract_expected_token_ids;
use crate::rsql;
use crate::tests::utils::rows;
use crate::tests::utils::wrapped_syntax_error;
use crate::try_extract_expected_token_ids;
use crate::ExtractionError;
use crate::ParseFailure;
use crate::SyntaxErrorRecord;
use crate::WrappedParseFailure;

/// A failure that is neither a syntax error nor wraps one.
#[derive(Debug, thiserror::Error)]
#[error("database connection lost")]
struct UnrelatedFailure;

impl ParseFailure for UnrelatedFailure {}

/// Verifies that rows are flattened in order, keeping duplicates.
#[test]
fn flattens_rows_in_order_with_duplicates() {
    let failure = wrapped_syntax_error(
        "Encountered end of input",
        rows(&[
            &[rsql::LPAREN],
            &[rsql::UNRESERVED_STR, rsql::AND],
            &[rsql::LPAREN],
        ]),
    );

    assert_eq!(
        extract_expected_token_ids(&failure),
        vec![rsql::LPAREN, rsql::UNRESERVED_STR, rsql::AND, rsql::LPAREN],
    );
}

/// Verifies that the record is found several links deep.
#[test]
fn finds_record_deep_in_chain() {
    let failure = WrappedParseFailure::new(
        "filter rejected",
        WrappedParseFailure::new(
            "query layer error",
            SyntaxErrorRecord::new("syntax", rows(&[&[rsql::RPAREN]])),
        ),
    );

    assert_eq!(extract_expected_token_ids(&failure), vec![rsql::RPAREN]);
}

#[test]
fn bare_record_is_its_own_syntax_error() {
    let record = SyntaxErrorRecord::new("syntax", rows(&[&[rsql::OR]]));
    assert_eq!(extract_expected_token_ids(&record), vec![rsql::OR]);
}

/// Verifies that a chain without a syntax-error record degrades to no
/// tokens instead of failing.
#[test]
fn chain_without_record_yields_nothing() {
    let failure = WrappedParseFailure::new("wrapped", UnrelatedFailure);

    assert!(extract_expected_token_ids(&failure).is_empty());
    assert_eq!(
        try_extract_expected_token_ids(&failure),
        Err(ExtractionError::NoSyntaxErrorRecord),
    );
}

/// Verifies that a record without a readable table degrades to no tokens.
#[test]
fn record_without_table_yields_nothing() {
    let failure = WrappedParseFailure::new(
        "wrapped",
        SyntaxErrorRecord::without_expectations("syntax"),
    );

    assert!(extract_expected_token_ids(&failure).is_empty());
    assert_eq!(
        try_extract_expected_token_ids(&failure),
        Err(ExtractionError::Missing),
    );
}

#[test]
fn empty_table_yields_nothing() {
    let record = SyntaxErrorRecord::new("syntax", vec![]);
    assert_eq!(try_extract_expected_token_ids(&record), Ok(vec![]));
}

//! Shared fixtures for diagnostics tests.

use crate::rsql;
use crate::smallvec;
use crate::DiagnosticFormatter;
use crate::ExpectedTokenRow;
use crate::FieldCatalog;
use crate::SyntaxErrorRecord;
use crate::TerminalId;
use crate::WrappedParseFailure;
use crate::RSQL_TOKEN_CATALOG;
use std::sync::Arc;

/// A formatter over the RSQL catalog and a two-field catalog
/// (`name`, `description`).
pub fn name_and_description_formatter() -> DiagnosticFormatter {
    DiagnosticFormatter::new(
        &RSQL_TOKEN_CATALOG,
        Arc::new(FieldCatalog::from_names(["name", "description"])),
    )
}

/// Builds an expected-token table from plain rows of ids.
pub fn rows(rows: &[&[TerminalId]]) -> Vec<ExpectedTokenRow> {
    rows.iter()
        .map(|row| row.iter().copied().collect())
        .collect()
}

/// The failure chain a query layer produces around a grammar syntax error:
/// an outer error wrapping the parser's record.
pub fn wrapped_syntax_error(
    raw_message: &str,
    expected: Vec<ExpectedTokenRow>,
) -> WrappedParseFailure {
    WrappedParseFailure::new(
        "query syntax is invalid",
        SyntaxErrorRecord::new(raw_message, expected),
    )
}

/// The expected-token table the parser reports while waiting for a field
/// selector.
pub fn identifier_rows() -> Vec<ExpectedTokenRow> {
    vec![smallvec![rsql::ALPHA], smallvec![rsql::UNRESERVED_STR]]
}

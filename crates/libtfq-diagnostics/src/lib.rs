//! Diagnostics for RSQL target filter queries.
//!
//! This crate turns the failures reported by an external query parser (the
//! "oracle") into stable, field-aware diagnostics, and maps the oracle's
//! completion candidates into transport-safe suggestion spans. It owns no
//! grammar of its own: everything it knows about the parser comes through
//! the [`TokenCatalog`], the [`ExpectedTokenProvider`] capability and the
//! [`QueryOracle`] interface.

mod boundary_message;
pub mod completion;
mod diagnostic_formatter;
mod error_token_extractor;
mod expected_token_provider;
mod field_catalog;
mod query_oracle;
mod suggestion_context;
mod syntax_error_record;
mod terminal_id;
mod token_catalog;
mod validation_result;

pub use boundary_message::ClientMessage;
pub use boundary_message::ServerMessage;
pub use boundary_message::SuggestionContextDto;
pub use boundary_message::SuggestionSpanDto;
pub use diagnostic_formatter::ASSIGNED_DS_FIELD_PATHS;
pub use diagnostic_formatter::DiagnosticFormatter;
pub use diagnostic_formatter::WAS_EXPECTING;
pub use error_token_extractor::extract_expected_token_ids;
pub use error_token_extractor::try_extract_expected_token_ids;
pub use expected_token_provider::ExpectedTokenProvider;
pub use expected_token_provider::ExpectedTokenRow;
pub use expected_token_provider::ExtractionError;
pub use expected_token_provider::ParseFailure;
pub use field_catalog::FieldCatalog;
pub use field_catalog::FilterField;
pub use query_oracle::OracleOutcome;
pub use query_oracle::OracleSuggestion;
pub use query_oracle::OracleSuggestionContext;
pub use query_oracle::QueryOracle;
pub use query_oracle::TokenAtCursor;
pub use smallvec::smallvec;
pub use smallvec::SmallVec;
pub use suggestion_context::SuggestionContext;
pub use suggestion_context::SuggestionSpan;
pub use syntax_error_record::SyntaxErrorRecord;
pub use syntax_error_record::WrappedParseFailure;
pub use terminal_id::TerminalId;
pub use token_catalog::rsql;
pub use token_catalog::TokenCatalog;
pub use token_catalog::RSQL_TOKEN_CATALOG;
pub use validation_result::ValidationResult;
pub use validation_result::ValidationStatus;

#[cfg(test)]
mod tests;

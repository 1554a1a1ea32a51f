use crate::extract_expected_token_ids;
use crate::FieldCatalog;
use crate::OracleOutcome;
use crate::TerminalId;
use crate::TokenCatalog;
use crate::ValidationResult;
use crate::RSQL_TOKEN_CATALOG;
use indexmap::IndexSet;
use std::sync::Arc;

/// Marker of the expectation clause parsers append to their messages.
pub const WAS_EXPECTING: &str = "Was expecting";

/// Compound selectors offered alongside the field catalog when the parser
/// is waiting for a field name.
pub const ASSIGNED_DS_FIELD_PATHS: [&str; 2] = ["assignedds.name", "assignedds.version"];

/// Turns raw parser messages into user-facing diagnostics.
///
/// Generic parser output is rewritten in two ways: the parser's own
/// "was expecting" clause is replaced by one rendered from the
/// [`TokenCatalog`], and when the parser is waiting for a field selector the
/// expected tokens become the filterable field names from the
/// [`FieldCatalog`].
#[derive(Clone, Debug)]
pub struct DiagnosticFormatter {
    token_catalog: &'static TokenCatalog,
    field_catalog: Arc<FieldCatalog>,
}

impl DiagnosticFormatter {
    pub fn new(token_catalog: &'static TokenCatalog, field_catalog: Arc<FieldCatalog>) -> Self {
        Self {
            token_catalog,
            field_catalog,
        }
    }

    /// The RSQL grammar with the device (target) field catalog.
    pub fn for_targets() -> Self {
        Self::new(&RSQL_TOKEN_CATALOG, Arc::new(FieldCatalog::target_fields()))
    }

    /// Formats a syntax error from the parser's raw message and the
    /// terminals it expected.
    pub fn format(&self, raw_message: &str, expected_token_ids: &[TerminalId]) -> ValidationResult {
        let expected_tokens = self.expected_tokens(expected_token_ids);
        let cleaned = strip_parser_boilerplate(raw_message).trim();
        let message = if expected_tokens.is_empty() {
            cleaned.to_string()
        } else {
            let expecting = format!("{WAS_EXPECTING}: {}", expected_tokens.join(", "));
            if cleaned.is_empty() {
                expecting
            } else {
                format!("{cleaned} {expecting}")
            }
        };
        ValidationResult::syntax_error(sanitize(&message), expected_tokens)
    }

    /// Formats a semantic error (unknown field, malformed value). The
    /// message is cleaned and sanitized but no tokens are added.
    pub fn format_semantic(&self, raw_message: &str) -> ValidationResult {
        let cleaned = strip_parser_boilerplate(raw_message);
        ValidationResult::semantic_error(sanitize(cleaned))
    }

    /// Builds the validation result for one oracle verdict.
    pub fn validation_result(&self, outcome: &OracleOutcome) -> ValidationResult {
        match outcome {
            OracleOutcome::Success => ValidationResult::ok(),
            OracleOutcome::SyntaxError { raw_message, failure } => {
                let expected_token_ids = extract_expected_token_ids(failure.as_ref());
                self.format(raw_message, &expected_token_ids)
            },
            OracleOutcome::UnsupportedField { raw_message }
            | OracleOutcome::MalformedValue { raw_message } => self.format_semantic(raw_message),
        }
    }

    /// Renders expected terminal ids as display strings.
    ///
    /// When the ids are exactly the catalog's identifier pair the result is
    /// the field names followed by [`ASSIGNED_DS_FIELD_PATHS`]. Otherwise
    /// each id maps to its catalog literal, skipping the end-of-input id and
    /// collapsing duplicates.
    pub fn expected_tokens(&self, expected_token_ids: &[TerminalId]) -> Vec<String> {
        if self.expects_identifier(expected_token_ids) {
            return self
                .field_catalog
                .names()
                .map(str::to_lowercase)
                .chain(ASSIGNED_DS_FIELD_PATHS.iter().map(|path| path.to_string()))
                .collect::<IndexSet<_>>()
                .into_iter()
                .collect();
        }

        let end_of_input = self.token_catalog.end_of_input();
        let mut literals = IndexSet::new();
        for &id in expected_token_ids {
            if id == end_of_input {
                continue;
            }
            match self.token_catalog.try_literal_of(id) {
                Some(literal) => {
                    literals.insert(literal.to_string());
                },
                None => tracing::warn!(
                    terminal = %id,
                    "parser reported a terminal outside the token catalog"
                ),
            }
        }
        literals.into_iter().collect()
    }

    fn expects_identifier(&self, expected_token_ids: &[TerminalId]) -> bool {
        let [first, second] = self.token_catalog.identifier_terminals();
        let distinct: IndexSet<TerminalId> = expected_token_ids.iter().copied().collect();
        distinct.len() == 2 && distinct.contains(&first) && distinct.contains(&second)
    }
}

impl Default for DiagnosticFormatter {
    fn default() -> Self {
        Self::for_targets()
    }
}

/// Drops the parser's prefix (everything through the first `:`) and its
/// trailing "was expecting" clause.
fn strip_parser_boilerplate(raw_message: &str) -> &str {
    let body = match raw_message.split_once(':') {
        Some((_, rest)) => rest,
        None => raw_message,
    };
    match body.rfind(WAS_EXPECTING) {
        Some(index) => &body[..index],
        None => body,
    }
}

/// Removes line breaks and angle brackets, which are grammar metacharacters
/// in parser output. Line breaks become spaces and whitespace runs collapse
/// to one space.
fn sanitize(message: &str) -> String {
    let without_brackets: String = message
        .chars()
        .filter(|c| !matches!(c, '<' | '>'))
        .map(|c| if matches!(c, '\r' | '\n') { ' ' } else { c })
        .collect();
    without_brackets.split_whitespace().collect::<Vec<_>>().join(" ")
}

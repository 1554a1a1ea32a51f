use crate::completion::comparison_operator_suggestions;
use crate::completion::field_name_suggestions;
use crate::completion::logical_operator_suggestions;
use crate::FieldCatalog;
use crate::OracleOutcome;
use crate::OracleSuggestionContext;
use crate::QueryOracle;
use std::sync::Arc;

/// Wraps an oracle and enriches its suggestions with field and operator
/// completions.
///
/// Validation is passed through untouched. For suggestions:
/// - when the text parses, `and` / `or` are offered after a trailing space;
/// - when the parser stopped on a field selector, field-name completions
///   replace the grammar's suggestions;
/// - when the grammar had nothing to offer, comparison operators are offered
///   after `<map field>.<key>=`.
#[derive(Debug)]
pub struct CompletingOracle<O> {
    inner: O,
    fields: Arc<FieldCatalog>,
}

impl<O: QueryOracle> CompletingOracle<O> {
    pub fn new(inner: O, fields: Arc<FieldCatalog>) -> Self {
        Self { inner, fields }
    }
}

impl<O: QueryOracle> QueryOracle for CompletingOracle<O> {
    fn validate(&self, text: &str) -> OracleOutcome {
        self.inner.validate(text)
    }

    fn suggest(&self, text: &str, cursor: usize) -> OracleSuggestionContext {
        let mut context = self.inner.suggest(text, cursor);

        if context.syntax_error_detail.is_none() {
            context.suggestions.extend(logical_operator_suggestions(text));
        } else if let Some(token) = &context.token_at_cursor
            && let Some(field_suggestions) = field_name_suggestions(token, &self.fields)
        {
            context.suggestions = field_suggestions;
        } else if context.suggestions.is_empty() {
            context.suggestions = comparison_operator_suggestions(text, &self.fields);
        }

        context
    }
}

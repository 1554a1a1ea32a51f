use crate::ExpectedTokenProvider;
use crate::ExpectedTokenRow;
use crate::ExtractionError;
use crate::ParseFailure;

/// A grammar-level syntax error: the parser's message plus the table of
/// terminals it would have accepted.
///
/// Parser integrations that have no syntax-error type of their own can
/// report failures with this record.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct SyntaxErrorRecord {
    message: String,
    expected: Option<Vec<ExpectedTokenRow>>,
}

impl SyntaxErrorRecord {
    pub fn new(message: impl Into<String>, expected: Vec<ExpectedTokenRow>) -> Self {
        Self {
            message: message.into(),
            expected: Some(expected),
        }
    }

    /// A syntax error whose parser did not record what it expected.
    pub fn without_expectations(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            expected: None,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl ExpectedTokenProvider for SyntaxErrorRecord {
    fn expected_token_sequences(&self) -> Result<&[ExpectedTokenRow], ExtractionError> {
        self.expected.as_deref().ok_or(ExtractionError::Missing)
    }
}

impl ParseFailure for SyntaxErrorRecord {
    fn syntax_error(&self) -> Option<&dyn ExpectedTokenProvider> {
        Some(self)
    }
}

/// An outer parse failure wrapping another one, e.g. a query-layer error
/// around the grammar's syntax error.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct WrappedParseFailure {
    message: String,
    inner: Box<dyn ParseFailure>,
}

impl WrappedParseFailure {
    pub fn new(message: impl Into<String>, inner: impl ParseFailure + 'static) -> Self {
        Self {
            message: message.into(),
            inner: Box::new(inner),
        }
    }
}

impl ParseFailure for WrappedParseFailure {
    fn inner(&self) -> Option<&dyn ParseFailure> {
        Some(self.inner.as_ref())
    }
}

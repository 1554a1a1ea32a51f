use crate::ParseFailure;
use std::sync::Arc;

/// The external parsing service that owns the filter query grammar.
///
/// Calls may be expensive (a full parse plus field resolution), so callers
/// on an interactive surface run them off the editing thread.
pub trait QueryOracle: Send + Sync {
    /// Parses and resolves `text`.
    fn validate(&self, text: &str) -> OracleOutcome;

    /// Computes completions for `text` with the cursor at `cursor`
    /// (a character offset).
    fn suggest(&self, text: &str, cursor: usize) -> OracleSuggestionContext;
}

impl<O: QueryOracle + ?Sized> QueryOracle for Arc<O> {
    fn validate(&self, text: &str) -> OracleOutcome {
        (**self).validate(text)
    }

    fn suggest(&self, text: &str, cursor: usize) -> OracleSuggestionContext {
        (**self).suggest(text, cursor)
    }
}

impl<O: QueryOracle + ?Sized> QueryOracle for Box<O> {
    fn validate(&self, text: &str) -> OracleOutcome {
        (**self).validate(text)
    }

    fn suggest(&self, text: &str, cursor: usize) -> OracleSuggestionContext {
        (**self).suggest(text, cursor)
    }
}

/// What the oracle concluded about a query.
#[derive(Debug)]
pub enum OracleOutcome {
    Success,

    /// The grammar rejected the text. `failure` is the parser's error
    /// chain, from which the expected tokens are extracted.
    SyntaxError {
        raw_message: String,
        failure: Box<dyn ParseFailure>,
    },

    /// The text parses but selects a field that does not exist.
    UnsupportedField {
        raw_message: String,
    },

    /// A literal (date, duration, number, enum value) could not be
    /// converted for its field.
    MalformedValue {
        raw_message: String,
    },
}

impl OracleOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// One completion candidate proposed by the oracle.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OracleSuggestion {
    /// Start of the replaced range (character offset, inclusive).
    pub start: usize,
    /// End of the replaced range (character offset, exclusive).
    pub end: usize,
    /// The already-typed token image or grammar terminal this candidate
    /// completes, if any.
    pub label: Option<String>,
    /// The replacement text.
    pub text: String,
}

impl OracleSuggestion {
    pub fn new(start: usize, end: usize, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: None,
            text: text.into(),
        }
    }

    pub fn labeled(start: usize, end: usize, label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: Some(label.into()),
            text: text.into(),
        }
    }
}

/// The token the parser was positioned on when it stopped, as character
/// offsets into the query.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenAtCursor {
    pub image: String,
    pub begin: usize,
    pub end: usize,
}

/// The oracle's view of completions at a cursor position.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct OracleSuggestionContext {
    pub cursor_position: usize,
    pub suggestions: Vec<OracleSuggestion>,
    /// The parser's message when the text up to the cursor does not parse.
    pub syntax_error_detail: Option<String>,
    /// Set when the parser stopped on a field selector token.
    pub token_at_cursor: Option<TokenAtCursor>,
}

impl OracleSuggestionContext {
    pub fn new(cursor_position: usize) -> Self {
        Self {
            cursor_position,
            ..Default::default()
        }
    }
}

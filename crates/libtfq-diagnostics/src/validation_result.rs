use serde::Deserialize;
use serde::Serialize;

/// Outcome category of one validation attempt.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationStatus {
    Ok,

    /// The parser rejected the text.
    SyntaxError,

    /// The text parses but names an unknown field or carries a value the
    /// field cannot hold.
    SemanticError,
}

/// The display-ready result of validating a filter query.
///
/// Built fresh for every attempt and never modified afterwards.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    status: ValidationStatus,
    message: String,
    expected_tokens: Vec<String>,
}

impl ValidationResult {
    /// A successful validation: empty message, no expected tokens.
    pub fn ok() -> Self {
        Self {
            status: ValidationStatus::Ok,
            message: String::new(),
            expected_tokens: vec![],
        }
    }

    pub(crate) fn syntax_error(message: String, expected_tokens: Vec<String>) -> Self {
        Self {
            status: ValidationStatus::SyntaxError,
            message,
            expected_tokens,
        }
    }

    pub(crate) fn semantic_error(message: String) -> Self {
        Self {
            status: ValidationStatus::SemanticError,
            message,
            expected_tokens: vec![],
        }
    }

    pub fn status(&self) -> ValidationStatus {
        self.status
    }

    /// Whether the query was rejected, syntactically or semantically.
    pub fn failed(&self) -> bool {
        self.status != ValidationStatus::Ok
    }

    /// The user-facing message. Empty on success.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The tokens or field names that would have been accepted.
    pub fn expected_tokens(&self) -> &[String] {
        &self.expected_tokens
    }

    /// The message to show as an error, or `None` on success.
    pub fn error_message(&self) -> Option<&str> {
        self.failed().then_some(self.message.as_str())
    }
}

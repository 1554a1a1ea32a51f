use indexmap::IndexMap;
use libtfq_diagnostics::ExpectedTokenRow;
use libtfq_diagnostics::OracleOutcome;
use libtfq_diagnostics::OracleSuggestion;
use libtfq_diagnostics::OracleSuggestionContext;
use libtfq_diagnostics::QueryOracle;
use libtfq_diagnostics::SyntaxErrorRecord;
use libtfq_diagnostics::TerminalId;
use libtfq_diagnostics::TokenAtCursor;
use libtfq_diagnostics::WrappedParseFailure;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Mutex;
use std::sync::PoisonError;
use std::time::Duration;

/// The verdict a [`ScriptedOracle`] gives for one text.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ScriptedOutcome {
    Success,

    /// `expected` holds one row of terminal ids per alternative the parser
    /// would have accepted. Leave it out to simulate a parser that does not
    /// record its expectations.
    SyntaxError {
        raw_message: String,
        #[serde(default)]
        expected: Option<Vec<Vec<u16>>>,
    },

    UnsupportedField {
        raw_message: String,
    },

    MalformedValue {
        raw_message: String,
    },
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScriptedSuggestion {
    pub start: usize,
    pub end: usize,
    #[serde(default)]
    pub label: Option<String>,
    pub text: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScriptedToken {
    pub image: String,
    pub begin: usize,
    pub end: usize,
}

/// A canned answer for one exact query text.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptedResponse {
    pub text: String,
    pub outcome: ScriptedOutcome,
    #[serde(default)]
    pub suggestions: Vec<ScriptedSuggestion>,
    #[serde(default)]
    pub token_at_cursor: Option<ScriptedToken>,

    /// How long `validate` blocks before answering.
    #[serde(default)]
    pub delay_ms: u64,
}

impl ScriptedResponse {
    pub fn new(text: impl Into<String>, outcome: ScriptedOutcome) -> Self {
        Self {
            text: text.into(),
            outcome,
            suggestions: vec![],
            token_at_cursor: None,
            delay_ms: 0,
        }
    }

    pub fn with_suggestions(mut self, suggestions: Vec<ScriptedSuggestion>) -> Self {
        self.suggestions = suggestions;
        self
    }

    pub fn with_token_at_cursor(mut self, token: ScriptedToken) -> Self {
        self.token_at_cursor = Some(token);
        self
    }

    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("invalid oracle script: {0}")]
    Json(#[from] serde_json::Error),

    #[error("the oracle script answers `{text}` more than once")]
    DuplicateText { text: String },
}

/// A deterministic oracle answering from canned responses keyed by exact
/// text. Texts without a response get the fallback outcome.
///
/// Every `validate` call is recorded so callers can check which texts
/// actually reached the oracle.
#[derive(Debug)]
pub struct ScriptedOracle {
    responses: IndexMap<String, ScriptedResponse>,
    fallback: ScriptedOutcome,
    validated: Mutex<Vec<String>>,
}

impl ScriptedOracle {
    pub fn new(responses: impl IntoIterator<Item = ScriptedResponse>) -> Result<Self, ScriptError> {
        let mut by_text = IndexMap::new();
        for response in responses {
            if by_text.contains_key(&response.text) {
                return Err(ScriptError::DuplicateText {
                    text: response.text,
                });
            }
            by_text.insert(response.text.clone(), response);
        }
        Ok(Self {
            responses: by_text,
            fallback: ScriptedOutcome::Success,
            validated: Mutex::new(vec![]),
        })
    }

    /// Reads a JSON array of [`ScriptedResponse`]s.
    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        let responses: Vec<ScriptedResponse> = serde_json::from_str(json)?;
        Self::new(responses)
    }

    pub fn with_fallback(mut self, fallback: ScriptedOutcome) -> Self {
        self.fallback = fallback;
        self
    }

    /// Texts passed to `validate`, in call order.
    pub fn validated_texts(&self) -> Vec<String> {
        self.validated
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn outcome_for(&self, text: &str) -> &ScriptedOutcome {
        self.responses
            .get(text)
            .map_or(&self.fallback, |response| &response.outcome)
    }
}

impl QueryOracle for ScriptedOracle {
    fn validate(&self, text: &str) -> OracleOutcome {
        self.validated
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(text.to_string());

        if let Some(response) = self.responses.get(text)
            && response.delay_ms > 0
        {
            std::thread::sleep(Duration::from_millis(response.delay_ms));
        }

        match self.outcome_for(text) {
            ScriptedOutcome::Success => OracleOutcome::Success,
            ScriptedOutcome::SyntaxError {
                raw_message,
                expected,
            } => {
                let record = match expected {
                    Some(rows) => SyntaxErrorRecord::new(raw_message.as_str(), expected_rows(rows)),
                    None => SyntaxErrorRecord::without_expectations(raw_message.as_str()),
                };
                OracleOutcome::SyntaxError {
                    raw_message: raw_message.clone(),
                    failure: Box::new(WrappedParseFailure::new("invalid filter query", record)),
                }
            },
            ScriptedOutcome::UnsupportedField { raw_message } => OracleOutcome::UnsupportedField {
                raw_message: raw_message.clone(),
            },
            ScriptedOutcome::MalformedValue { raw_message } => OracleOutcome::MalformedValue {
                raw_message: raw_message.clone(),
            },
        }
    }

    fn suggest(&self, text: &str, cursor: usize) -> OracleSuggestionContext {
        let mut context = OracleSuggestionContext::new(cursor);
        if let ScriptedOutcome::SyntaxError { raw_message, .. } = self.outcome_for(text) {
            context.syntax_error_detail = Some(raw_message.clone());
        }
        let Some(response) = self.responses.get(text) else {
            return context;
        };

        context.suggestions = response
            .suggestions
            .iter()
            .map(|suggestion| OracleSuggestion {
                start: suggestion.start,
                end: suggestion.end,
                label: suggestion.label.clone(),
                text: suggestion.text.clone(),
            })
            .collect();
        context.token_at_cursor = response.token_at_cursor.as_ref().map(|token| TokenAtCursor {
            image: token.image.clone(),
            begin: token.begin,
            end: token.end,
        });
        context
    }
}

fn expected_rows(rows: &[Vec<u16>]) -> Vec<ExpectedTokenRow> {
    rows.iter()
        .map(|row| row.iter().copied().map(TerminalId).collect())
        .collect()
}

//! Wire messages exchanged between the editing client and the server that
//! hosts the oracle.
//!
//! ```text
//! client -> server  {"type":"suggest","text":"na","cursor":2}
//! server -> client  {"type":"showSuggestions","cursorPosition":2,
//!                    "suggestions":[{"start":0,"end":2,"text":"name"}]}
//! client -> server  {"type":"executeQuery","text":"name==foo","cursor":9}
//! ```

use crate::SuggestionContext;
use crate::SuggestionSpan;
use serde::Deserialize;
use serde::Serialize;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientMessage {
    /// Sent on every (debounced) edit.
    Suggest {
        text: String,
        cursor: usize,
    },

    /// Sent on an explicit user trigger, only while the query is valid.
    ExecuteQuery {
        text: String,
        cursor: usize,
    },
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerMessage {
    ShowSuggestions(SuggestionContextDto),
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionContextDto {
    pub cursor_position: usize,
    pub suggestions: Vec<SuggestionSpanDto>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SuggestionSpanDto {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl From<&SuggestionSpan> for SuggestionSpanDto {
    fn from(span: &SuggestionSpan) -> Self {
        Self {
            start: span.start_offset,
            end: span.end_offset,
            text: span.replacement_text.clone(),
        }
    }
}

impl From<&SuggestionContext> for SuggestionContextDto {
    fn from(context: &SuggestionContext) -> Self {
        Self {
            cursor_position: context.cursor_position,
            suggestions: context.suggestions.iter().map(SuggestionSpanDto::from).collect(),
        }
    }
}

impl From<SuggestionContextDto> for SuggestionContext {
    fn from(dto: SuggestionContextDto) -> Self {
        Self {
            cursor_position: dto.cursor_position,
            suggestions: dto
                .suggestions
                .into_iter()
                .map(|span| SuggestionSpan {
                    start_offset: span.start,
                    end_offset: span.end,
                    replacement_text: span.text,
                })
                .collect(),
        }
    }
}

//! Tests for the client/server wire messages.

use crate::ClientMessage;
use crate::ServerMessage;
use crate::SuggestionContext;
use crate::SuggestionContextDto;
use crate::SuggestionSpan;
use crate::SuggestionSpanDto;
use serde_json::json;

#[test]
fn client_messages_are_tagged_by_type() {
    let suggest = ClientMessage::Suggest {
        text: "na".to_string(),
        cursor: 2,
    };
    assert_eq!(
        serde_json::to_value(&suggest).unwrap(),
        json!({"type": "suggest", "text": "na", "cursor": 2}),
    );

    let execute: ClientMessage = serde_json::from_value(json!({
        "type": "executeQuery",
        "text": "name==foo",
        "cursor": 9,
    }))
    .unwrap();
    assert_eq!(
        execute,
        ClientMessage::ExecuteQuery {
            text: "name==foo".to_string(),
            cursor: 9,
        },
    );
}

/// Verifies the suggestion payload shape, including the camel-cased
/// cursor field.
#[test]
fn show_suggestions_payload_shape() {
    let context = SuggestionContext {
        cursor_position: 2,
        suggestions: vec![SuggestionSpan {
            start_offset: 0,
            end_offset: 2,
            replacement_text: "name".to_string(),
        }],
    };
    let message = ServerMessage::ShowSuggestions(SuggestionContextDto::from(&context));

    assert_eq!(
        serde_json::to_value(&message).unwrap(),
        json!({
            "type": "showSuggestions",
            "cursorPosition": 2,
            "suggestions": [{"start": 0, "end": 2, "text": "name"}],
        }),
    );
}

/// Verifies that a context survives the trip through its wire form.
#[test]
fn dto_converts_back_to_context() {
    let dto = SuggestionContextDto {
        cursor_position: 4,
        suggestions: vec![SuggestionSpanDto {
            start: 4,
            end: 7,
            text: "and".to_string(),
        }],
    };
    let context = SuggestionContext::from(dto.clone());

    assert_eq!(context.cursor_position, 4);
    assert_eq!(context.suggestions[0].replacement_text, "and");
    assert_eq!(SuggestionContextDto::from(&context), dto);
}

#[test]
fn unknown_client_message_type_is_rejected() {
    let result = serde_json::from_value::<ClientMessage>(json!({
        "type": "deleteFilter",
        "text": "",
        "cursor": 0,
    }));
    assert!(result.is_err());
}

//! Shared fixtures for coordinator tests.

use crate::diagnostics::rsql;
use crate::diagnostics::FieldCatalog;
use crate::diagnostics::RSQL_TOKEN_CATALOG;
use crate::CoordinatorConfig;
use crate::DiagnosticFormatter;
use crate::EditorSignal;
use crate::ScriptedOutcome;
use crate::ValidationResult;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Short timings so that round-trips settle quickly on a real clock.
pub fn fast_config() -> CoordinatorConfig {
    CoordinatorConfig::default()
        .with_debounce_ms(10)
        .with_max_debounce_ms(100)
        .with_oracle_timeout_ms(500)
}

pub fn name_and_description_formatter() -> DiagnosticFormatter {
    DiagnosticFormatter::new(
        &RSQL_TOKEN_CATALOG,
        Arc::new(FieldCatalog::from_names(["name", "description"])),
    )
}

/// The parser's verdict for a query that ends in a dangling `and`.
pub fn dangling_and_outcome() -> ScriptedOutcome {
    ScriptedOutcome::SyntaxError {
        raw_message: "ParseException: Encountered \"<EOF>\" at line 1, column 13.\n\
            Was expecting one of: \"(\" ..."
            .to_string(),
        expected: Some(vec![vec![rsql::LPAREN.0]]),
    }
}

/// A syntax-error result as the formatter would build it.
pub fn syntax_error_result(message: &str) -> ValidationResult {
    name_and_description_formatter().format(message, &[])
}

/// Receives signals until one matches `predicate`, returning everything
/// received up to and including it.
pub async fn signals_until(
    signals: &mut mpsc::UnboundedReceiver<EditorSignal>,
    predicate: impl Fn(&EditorSignal) -> bool,
) -> Vec<EditorSignal> {
    let mut received = vec![];
    loop {
        let signal = tokio::time::timeout(Duration::from_secs(5), signals.recv())
            .await
            .expect("timed out waiting for a signal")
            .expect("signal channel closed");
        let done = predicate(&signal);
        received.push(signal);
        if done {
            return received;
        }
    }
}

/// Receives signals until a `Validated` signal arrives and returns it.
pub async fn next_validation(signals: &mut mpsc::UnboundedReceiver<EditorSignal>) -> ValidationResult {
    let received = signals_until(signals, |signal| matches!(signal, EditorSignal::Validated(_))).await;
    match received.into_iter().last() {
        Some(EditorSignal::Validated(result)) => result,
        other => panic!("expected a validation signal, got {other:?}"),
    }
}

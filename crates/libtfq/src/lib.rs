//! Interactive validation and suggestion coordination for RSQL target
//! filter queries.
//!
//! A [`QueryEditCoordinator`] owns the [`QueryEditState`] of one editing
//! surface. It consumes [`EditorEvent`]s, debounces edits, runs the
//! [`QueryOracle`] off the event loop with a bounded timeout, discards
//! replies that a newer edit has superseded, and publishes
//! [`EditorSignal`]s (action gating, validation feedback, suggestions,
//! search requests) for the surface to render.

mod action_gating;
mod coordinator_config;
mod editor_event;
mod editor_signal;
mod query_edit_coordinator;
mod query_edit_state;
mod request_id;
mod scripted_oracle;
mod validation_feedback;
mod validity;

pub use action_gating::ActionGating;
pub use coordinator_config::CoordinatorConfig;
pub use editor_event::EditorEvent;
pub use editor_event::OracleEvaluation;
pub use editor_signal::EditorSignal;
pub use libtfq_diagnostics as diagnostics;
pub use libtfq_diagnostics::DiagnosticFormatter;
pub use libtfq_diagnostics::QueryOracle;
pub use libtfq_diagnostics::ValidationResult;
pub use query_edit_coordinator::QueryEditCoordinator;
pub use query_edit_coordinator::QueryEditHandle;
pub use query_edit_coordinator::QueryEditSession;
pub use query_edit_coordinator::SessionClosed;
pub use query_edit_state::ExecuteRejected;
pub use query_edit_state::QueryEditState;
pub use query_edit_state::ResponseDisposition;
pub use query_edit_state::SavedFilter;
pub use query_edit_state::TextChange;
pub use request_id::RequestId;
pub use scripted_oracle::ScriptError;
pub use scripted_oracle::ScriptedOracle;
pub use scripted_oracle::ScriptedOutcome;
pub use scripted_oracle::ScriptedResponse;
pub use scripted_oracle::ScriptedSuggestion;
pub use scripted_oracle::ScriptedToken;
pub use validation_feedback::FeedbackIcon;
pub use validation_feedback::ValidationFeedback;
pub use validity::Validity;

#[cfg(test)]
mod tests;

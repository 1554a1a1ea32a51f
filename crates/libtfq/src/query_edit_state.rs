use crate::ActionGating;
use crate::RequestId;
use crate::ValidationFeedback;
use crate::ValidationResult;
use crate::Validity;
use serde::Deserialize;
use serde::Serialize;

/// The name and query of a filter as last persisted, for the update flow.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SavedFilter {
    pub name: String,
    pub query: String,
}

/// What [`QueryEditState::on_text_changed`] decided.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TextChange {
    /// The text needs validating; the oracle should be asked under this id.
    Issued(RequestId),

    /// The text is empty. No oracle call is needed.
    Cleared,
}

/// Whether an oracle reply changed the state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResponseDisposition {
    Applied,

    /// A newer edit superseded the request, or a reply for it was already
    /// applied.
    Stale,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ExecuteRejected {
    #[error("the query cannot be executed while it is {validity}")]
    NotValid { validity: Validity },
}

/// Per-surface editing state for one filter query.
///
/// Mutated only by the coordinator that owns it. Request ids increase by
/// one for every text change, and a reply is applied only if it answers the
/// most recently issued id.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QueryEditState {
    current_text: String,
    cursor: usize,
    filter_name: String,
    saved: Option<SavedFilter>,
    may_save: bool,
    last_issued_request_id: RequestId,
    last_applied_request_id: RequestId,
    validity: Validity,
    error_message: Option<String>,
}

impl QueryEditState {
    /// State for a new, unnamed filter.
    pub fn for_create(may_save: bool) -> Self {
        Self {
            current_text: String::new(),
            cursor: 0,
            filter_name: String::new(),
            saved: None,
            may_save,
            last_issued_request_id: RequestId::NONE,
            last_applied_request_id: RequestId::NONE,
            validity: Validity::Unknown,
            error_message: None,
        }
    }

    /// State for editing an existing filter. The query starts out
    /// `Unknown` until it is validated.
    pub fn for_update(name: impl Into<String>, query: impl Into<String>, may_save: bool) -> Self {
        let name = name.into();
        let query = query.into();
        Self {
            cursor: query.chars().count(),
            current_text: query.clone(),
            filter_name: name.clone(),
            saved: Some(SavedFilter { name, query }),
            ..Self::for_create(may_save)
        }
    }

    pub fn current_text(&self) -> &str {
        &self.current_text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn filter_name(&self) -> &str {
        &self.filter_name
    }

    pub fn saved(&self) -> Option<&SavedFilter> {
        self.saved.as_ref()
    }

    pub fn may_save(&self) -> bool {
        self.may_save
    }

    pub fn last_issued_request_id(&self) -> RequestId {
        self.last_issued_request_id
    }

    pub fn last_applied_request_id(&self) -> RequestId {
        self.last_applied_request_id
    }

    pub fn validity(&self) -> Validity {
        self.validity
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Records an edit. Every edit issues a new request id, which makes any
    /// outstanding reply stale. An empty text settles its id immediately.
    pub fn on_text_changed(&mut self, text: impl Into<String>, cursor: usize) -> TextChange {
        self.current_text = text.into();
        self.cursor = cursor;
        self.last_issued_request_id = self.last_issued_request_id.next();
        self.error_message = None;

        let change = if self.current_text.is_empty() {
            // Nothing will answer this id.
            self.last_applied_request_id = self.last_issued_request_id;
            self.validity = Validity::Unknown;
            TextChange::Cleared
        } else {
            self.validity = Validity::Validating;
            TextChange::Issued(self.last_issued_request_id)
        };
        self.check_invariants();
        change
    }

    /// Applies the oracle's verdict for `request_id`, unless it is stale.
    pub fn on_oracle_responded(
        &mut self,
        request_id: RequestId,
        result: &ValidationResult,
    ) -> ResponseDisposition {
        if !self.accepts(request_id) {
            return ResponseDisposition::Stale;
        }
        self.last_applied_request_id = request_id;
        self.validity = if result.failed() {
            Validity::Invalid
        } else {
            Validity::Valid
        };
        self.error_message = result.error_message().map(str::to_string);
        self.check_invariants();
        ResponseDisposition::Applied
    }

    /// The oracle timed out or failed for `request_id`. The query goes back
    /// to `Unknown` until the next edit.
    pub fn on_oracle_unavailable(&mut self, request_id: RequestId) -> ResponseDisposition {
        if !self.accepts(request_id) {
            return ResponseDisposition::Stale;
        }
        self.last_applied_request_id = request_id;
        self.validity = Validity::Unknown;
        self.error_message = None;
        self.check_invariants();
        ResponseDisposition::Applied
    }

    pub fn on_name_changed(&mut self, name: impl Into<String>) {
        self.filter_name = name.into();
    }

    /// The query to search with, if the last applied validation accepted
    /// it. Never validates.
    pub fn execute_request(&self) -> Result<&str, ExecuteRejected> {
        match self.validity {
            Validity::Valid => Ok(&self.current_text),
            validity => Err(ExecuteRejected::NotValid { validity }),
        }
    }

    /// Search needs a valid, non-empty query. Save additionally needs a
    /// name, a change from the saved filter and permission to save.
    pub fn gating(&self) -> ActionGating {
        let search_enabled = self.validity == Validity::Valid && !self.current_text.is_empty();
        let changed = self.saved.as_ref().is_none_or(|saved| {
            saved.name != self.filter_name || saved.query != self.current_text
        });
        let save_enabled = search_enabled
            && self.may_save
            && !self.filter_name.trim().is_empty()
            && changed;
        ActionGating {
            search_enabled,
            save_enabled,
        }
    }

    pub fn feedback(&self) -> ValidationFeedback {
        ValidationFeedback::from_validity(self.validity, self.error_message())
    }

    fn accepts(&self, request_id: RequestId) -> bool {
        request_id == self.last_issued_request_id && self.last_applied_request_id < request_id
    }

    fn check_invariants(&self) {
        debug_assert!(
            self.validity != Validity::Validating
                || self.last_applied_request_id < self.last_issued_request_id,
            "validating without an outstanding request (applied {}, issued {})",
            self.last_applied_request_id,
            self.last_issued_request_id,
        );
    }
}

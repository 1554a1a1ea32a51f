use crate::editor_event::OracleReply;
use crate::editor_event::OracleResponded;
use crate::CoordinatorConfig;
use crate::DiagnosticFormatter;
use crate::EditorEvent;
use crate::EditorSignal;
use crate::ExecuteRejected;
use crate::OracleEvaluation;
use crate::QueryEditState;
use crate::QueryOracle;
use crate::RequestId;
use crate::ResponseDisposition;
use crate::TextChange;
use libtfq_diagnostics::SuggestionContext;
use libtfq_diagnostics::SuggestionContextDto;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// The editing session has ended; its coordinator no longer accepts events.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[error("the query editing session has ended")]
pub struct SessionClosed;

/// Sends editing events to a running coordinator.
///
/// The coordinator stops once every handle is dropped.
#[derive(Clone, Debug)]
pub struct QueryEditHandle {
    events: mpsc::Sender<EditorEvent>,
}

impl QueryEditHandle {
    pub async fn send(&self, event: EditorEvent) -> Result<(), SessionClosed> {
        self.events.send(event).await.map_err(|_| SessionClosed)
    }

    pub async fn text_changed(&self, text: impl Into<String>, cursor: usize) -> Result<(), SessionClosed> {
        self.send(EditorEvent::TextChanged {
            text: text.into(),
            cursor,
        })
        .await
    }

    pub async fn name_changed(&self, name: impl Into<String>) -> Result<(), SessionClosed> {
        self.send(EditorEvent::NameChanged { name: name.into() }).await
    }

    pub async fn execute_requested(&self) -> Result<(), SessionClosed> {
        self.send(EditorEvent::ExecuteRequested).await
    }
}

/// A running coordinator: the handle to feed it, the signals it emits, and
/// its task, which yields the final state once every handle is dropped.
#[derive(Debug)]
pub struct QueryEditSession {
    pub handle: QueryEditHandle,
    pub signals: mpsc::UnboundedReceiver<EditorSignal>,
    pub task: JoinHandle<QueryEditState>,
}

/// A request waiting out the debounce window.
#[derive(Clone, Copy, Debug)]
struct PendingRequest {
    request_id: RequestId,
    burst_started_at: Instant,
    fire_at: Instant,
}

/// Drives one editing surface: applies events to its [`QueryEditState`],
/// runs debounced oracle requests on the blocking pool, and keeps only the
/// reply for the latest edit.
///
/// Signals go out on an unbounded channel so a surface that stops reading
/// them never stalls the event loop.
pub struct QueryEditCoordinator {
    state: QueryEditState,
    oracle: Arc<dyn QueryOracle>,
    formatter: DiagnosticFormatter,
    config: CoordinatorConfig,
    signals: mpsc::UnboundedSender<EditorSignal>,
    replies: mpsc::UnboundedSender<OracleResponded>,
    pending: Option<PendingRequest>,
    in_flight: Option<(RequestId, JoinHandle<()>)>,
}

impl QueryEditCoordinator {
    /// Starts a coordinator task for `state`.
    ///
    /// If the state already holds a query (the update flow) it is validated
    /// straight away, without waiting for the debounce window.
    pub fn spawn(
        state: QueryEditState,
        oracle: Arc<dyn QueryOracle>,
        formatter: DiagnosticFormatter,
        config: CoordinatorConfig,
    ) -> QueryEditSession {
        let (events_tx, events_rx) = mpsc::channel(config.event_buffer.max(1));
        let (signals_tx, signals_rx) = mpsc::unbounded_channel();
        let (replies_tx, replies_rx) = mpsc::unbounded_channel();

        let coordinator = Self {
            state,
            oracle,
            formatter,
            config,
            signals: signals_tx,
            replies: replies_tx,
            pending: None,
            in_flight: None,
        };
        let task = tokio::spawn(coordinator.run(events_rx, replies_rx));

        QueryEditSession {
            handle: QueryEditHandle { events: events_tx },
            signals: signals_rx,
            task,
        }
    }

    async fn run(
        mut self,
        mut events: mpsc::Receiver<EditorEvent>,
        mut replies: mpsc::UnboundedReceiver<OracleResponded>,
    ) -> QueryEditState {
        if !self.state.current_text().is_empty() {
            let text = self.state.current_text().to_string();
            let cursor = self.state.cursor();
            if let TextChange::Issued(request_id) = self.state.on_text_changed(text, cursor) {
                self.dispatch(request_id);
            }
        }
        self.publish_status();

        loop {
            let fire_at = self.pending.map(|pending| pending.fire_at);
            tokio::select! {
                biased;

                event = events.recv() => match event {
                    Some(event) => self.handle_event(event),
                    None => break,
                },

                Some(reply) = replies.recv() => self.handle_reply(reply),

                () = debounce_elapsed(fire_at) => {
                    if let Some(pending) = self.pending.take() {
                        self.dispatch(pending.request_id);
                    }
                },
            }
        }

        if let Some((request_id, worker)) = self.in_flight.take() {
            tracing::debug!(%request_id, "session closed with a request in flight");
            worker.abort();
        }
        self.state
    }

    fn handle_event(&mut self, event: EditorEvent) {
        match event {
            EditorEvent::TextChanged { text, cursor } => {
                match self.state.on_text_changed(text, cursor) {
                    TextChange::Issued(request_id) => self.schedule(request_id),
                    TextChange::Cleared => {
                        tracing::trace!("query cleared; no oracle call");
                        self.pending = None;
                    },
                }
                self.publish_status();
            },

            EditorEvent::NameChanged { name } => {
                self.state.on_name_changed(name);
                self.emit(EditorSignal::Gating(self.state.gating()));
            },

            EditorEvent::ExecuteRequested => {
                let signal = match self.state.execute_request() {
                    Ok(query) => EditorSignal::ExecuteQuery {
                        query: query.to_string(),
                    },
                    Err(ExecuteRejected::NotValid { validity }) => {
                        tracing::debug!(%validity, "execute requested for a query that is not valid");
                        EditorSignal::ExecuteRejected { validity }
                    },
                };
                self.emit(signal);
            },
        }
    }

    fn handle_reply(&mut self, reply: OracleResponded) {
        let OracleResponded { request_id, outcome } = reply;
        if self.in_flight.as_ref().is_some_and(|(id, _)| *id == request_id) {
            self.in_flight = None;
        }

        match outcome {
            OracleReply::Completed(evaluation) => {
                match self.state.on_oracle_responded(request_id, &evaluation.validation) {
                    ResponseDisposition::Applied => {
                        tracing::debug!(
                            %request_id,
                            validity = %self.state.validity(),
                            "applied oracle reply"
                        );
                        self.emit(EditorSignal::Validated(evaluation.validation));
                        self.publish_status();
                        self.emit(EditorSignal::Suggestions(SuggestionContextDto::from(
                            &evaluation.suggestions,
                        )));
                    },
                    ResponseDisposition::Stale => {
                        tracing::trace!(%request_id, "discarded stale oracle reply");
                    },
                }
            },

            OracleReply::TimedOut => {
                tracing::warn!(%request_id, "oracle request timed out");
                self.oracle_unavailable(request_id);
            },

            OracleReply::Failed(reason) => {
                tracing::warn!(%request_id, %reason, "oracle request failed");
                self.oracle_unavailable(request_id);
            },
        }
    }

    fn oracle_unavailable(&mut self, request_id: RequestId) {
        match self.state.on_oracle_unavailable(request_id) {
            ResponseDisposition::Applied => self.publish_status(),
            ResponseDisposition::Stale => {
                tracing::trace!(%request_id, "discarded stale oracle failure");
            },
        }
    }

    /// Starts or extends the debounce window for `request_id`. A request
    /// already in flight runs to completion and its reply is discarded as
    /// stale.
    fn schedule(&mut self, request_id: RequestId) {
        let now = Instant::now();
        let burst_started_at = self
            .pending
            .map_or(now, |pending| pending.burst_started_at);
        let delay = self.config.delay_after(now - burst_started_at);
        self.pending = Some(PendingRequest {
            request_id,
            burst_started_at,
            fire_at: now + delay,
        });
    }

    fn dispatch(&mut self, request_id: RequestId) {
        let oracle = Arc::clone(&self.oracle);
        let formatter = self.formatter.clone();
        let text = self.state.current_text().to_string();
        let cursor = self.state.cursor();
        let timeout = self.config.oracle_timeout();
        let replies = self.replies.clone();
        tracing::debug!(%request_id, %text, "dispatching oracle request");

        let worker = tokio::spawn(async move {
            let evaluation = tokio::task::spawn_blocking(move || {
                evaluate(oracle.as_ref(), &formatter, &text, cursor)
            });
            let outcome = match tokio::time::timeout(timeout, evaluation).await {
                Ok(Ok(evaluation)) => OracleReply::Completed(evaluation),
                Ok(Err(join_error)) => OracleReply::Failed(join_error.to_string()),
                Err(_elapsed) => OracleReply::TimedOut,
            };
            if replies.send(OracleResponded { request_id, outcome }).is_err() {
                tracing::trace!(%request_id, "coordinator stopped before the oracle replied");
            }
        });

        if let Some((superseded, _detached)) = self.in_flight.replace((request_id, worker)) {
            tracing::trace!(request_id = %superseded, "superseded in-flight request");
        }
    }

    fn publish_status(&self) {
        self.emit(EditorSignal::Feedback(self.state.feedback()));
        self.emit(EditorSignal::Gating(self.state.gating()));
    }

    fn emit(&self, signal: EditorSignal) {
        if self.signals.send(signal).is_err() {
            tracing::trace!("signal receiver dropped");
        }
    }
}

/// Runs one oracle round-trip: validation, then completions at the cursor.
fn evaluate(
    oracle: &dyn QueryOracle,
    formatter: &DiagnosticFormatter,
    text: &str,
    cursor: usize,
) -> OracleEvaluation {
    let outcome = oracle.validate(text);
    let validation = formatter.validation_result(&outcome);
    let suggestions = SuggestionContext::from_oracle(&oracle.suggest(text, cursor));
    OracleEvaluation {
        validation,
        suggestions,
    }
}

async fn debounce_elapsed(fire_at: Option<Instant>) {
    match fire_at {
        Some(fire_at) => tokio::time::sleep_until(fire_at).await,
        None => std::future::pending().await,
    }
}

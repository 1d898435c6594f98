//! Conversation controller: the two-state machine that owns the `AppState`.
//!
//! `submit` is the only suspension point in the system. The `AwaitingReply`
//! guard enforces at most one oracle call in flight, so every mutation of the
//! state happens sequentially between suspension points and history always
//! reflects chronological submission order. No cancellation, no client-side
//! timeout, no queueing — excess submissions are rejected, not buffered.

use crate::extractor::MetricsExtractor;
use crate::oracle::{Oracle, OracleError};
use crate::persona::{EMPTY_REPLY_FALLBACK, ORACLE_FAILURE_NOTICE};
use crate::shared::{AppState, Message, Role};
use crate::state_store::{StateStore, StoreError};
use std::sync::Arc;

/// Controller phase. Modeled as an explicit machine rather than a busy flag so
/// future extensions (timeout, cancellation) have somewhere to live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    AwaitingReply,
}

/// Result of a `submit` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The exchange ran to completion (oracle success or failure — both end
    /// with a model message in the transcript).
    Completed,
    /// Guard fired: empty input or a request already in flight. Nothing
    /// changed, including history length.
    Rejected,
}

/// Owns the full application state and the only mutation paths into it.
/// Persists the state as one unit after every transition; persistence errors
/// are logged, never fatal to the session.
pub struct CommandCenter {
    state: AppState,
    phase: Phase,
    store: StateStore,
    oracle: Arc<dyn Oracle>,
    extractor: Box<dyn MetricsExtractor>,
}

impl CommandCenter {
    /// Loads persisted state, falling back to the hardcoded seed when the blob
    /// is missing or unreadable.
    pub fn new(
        store: StateStore,
        oracle: Arc<dyn Oracle>,
        extractor: Box<dyn MetricsExtractor>,
    ) -> Self {
        let state = store.load().unwrap_or_else(AppState::seed);
        Self {
            state,
            phase: Phase::Idle,
            store,
            oracle,
            extractor,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase == Phase::AwaitingReply
    }

    /// `Idle -> AwaitingReply` transition. Guarded: whitespace-only input or a
    /// request already in flight is a no-op and returns `None`.
    ///
    /// On entry: captures the prior history (before the optimistic append — the
    /// new turn travels to the oracle as the current prompt, not as history),
    /// appends the user message, and persists.
    pub fn begin_submit(&mut self, input: &str) -> Option<Vec<Message>> {
        if input.trim().is_empty() || self.phase == Phase::AwaitingReply {
            return None;
        }
        let prior_history = self.state.history.clone();
        self.state.history.push(Message::now(Role::User, input));
        self.phase = Phase::AwaitingReply;
        self.persist();
        Some(prior_history)
    }

    /// `AwaitingReply -> Idle` transition. On oracle success appends the reply
    /// (or the fixed fallback when the reply is empty) and runs the heuristic
    /// extractor against the submitted user text. On oracle failure appends the
    /// fixed failure notice and leaves metrics untouched. Both paths persist.
    pub fn complete_submit(&mut self, submitted: &str, result: Result<String, OracleError>) {
        match result {
            Ok(reply) => {
                let content = if reply.is_empty() {
                    EMPTY_REPLY_FALLBACK.to_string()
                } else {
                    reply
                };
                self.state.history.push(Message::now(Role::Model, content));
                self.state.metrics = self.extractor.extract(submitted, &self.state.metrics);
            }
            Err(e) => {
                tracing::error!("oracle call failed: {}", e);
                self.state
                    .history
                    .push(Message::now(Role::Model, ORACLE_FAILURE_NOTICE));
            }
        }
        self.phase = Phase::Idle;
        self.persist();
    }

    /// Full exchange: guard and optimistic append, one oracle call, reply or
    /// failure notice, heuristic metric update, persist.
    pub async fn submit(&mut self, input: &str) -> SubmitOutcome {
        let Some(prior_history) = self.begin_submit(input) else {
            return SubmitOutcome::Rejected;
        };
        let result = self.oracle.converse(input, &prior_history).await;
        self.complete_submit(input, result);
        SubmitOutcome::Completed
    }

    /// Clears the persisted blob and resets in-memory state to the seed.
    /// Destructive and irreversible; callers must confirm with the operator
    /// first.
    pub fn purge(&mut self) -> Result<(), StoreError> {
        self.store.purge()?;
        self.state = AppState::seed();
        self.phase = Phase::Idle;
        Ok(())
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.state) {
            // A failed write leaves the in-memory session intact; the next
            // transition retries the full overwrite.
            tracing::error!("state persist failed: {}", e);
        }
    }
}

//! Event channel: report an interaction, then refresh the suggestions.
//!
//! `send` is fire-and-forget. Each call spawns one task that posts the event
//! and, only if that succeeded, fetches the session's suggestions and
//! replaces the dock's list. Failures are logged and never reach the caller.
//! Concurrent sends are not sequenced: whichever fetch resolves last wins.

use learnos_core::backend::PersonalizationBackend;
use learnos_core::error::LearnOsError;
use learnos_core::event::{Event, EventDraft};
use learnos_core::session::SessionIdentity;
use learnos_core::suggestion::SuggestionStore;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Anything that accepts event drafts from the shell.
pub trait EventSink: Send + Sync {
    /// Hands off a draft without waiting for delivery.
    fn send(&self, draft: EventDraft);
}

/// Why a delivered event did not change the suggestion list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnchangedReason {
    /// The response had no `suggestions` field.
    NoSuggestions,
    /// The fetch failed or its body was malformed.
    FetchFailed(LearnOsError),
}

/// Result of one delivery, for logging and instrumentation only.
#[derive(Debug, Clone, PartialEq)]
pub enum SendOutcome {
    /// Event delivered and the suggestion list replaced.
    Refreshed { event: Event, apps: usize },
    /// Event delivered, suggestion list left as it was.
    Unchanged {
        event: Event,
        reason: UnchangedReason,
    },
    /// Delivery failed; the event is dropped and no fetch was made.
    Dropped { event: Event, error: LearnOsError },
}

impl SendOutcome {
    pub fn event(&self) -> &Event {
        match self {
            SendOutcome::Refreshed { event, .. }
            | SendOutcome::Unchanged { event, .. }
            | SendOutcome::Dropped { event, .. } => event,
        }
    }

    pub fn is_refreshed(&self) -> bool {
        matches!(self, SendOutcome::Refreshed { .. })
    }
}

/// The event channel bound to one session and one suggestion store.
#[derive(Clone)]
pub struct EventChannel {
    session: Arc<SessionIdentity>,
    backend: Arc<dyn PersonalizationBackend>,
    suggestions: SuggestionStore,
    outcomes: Option<mpsc::UnboundedSender<SendOutcome>>,
}

impl EventChannel {
    pub fn new(
        session: Arc<SessionIdentity>,
        backend: Arc<dyn PersonalizationBackend>,
        suggestions: SuggestionStore,
    ) -> Self {
        Self {
            session,
            backend,
            suggestions,
            outcomes: None,
        }
    }

    /// Forwards every outcome to `sender` in addition to logging it.
    pub fn with_outcomes(mut self, sender: mpsc::UnboundedSender<SendOutcome>) -> Self {
        self.outcomes = Some(sender);
        self
    }

    /// Attaches the session id to a draft.
    pub fn stamp(&self, draft: EventDraft) -> Event {
        draft.stamp(self.session.id())
    }

    /// Delivers one event and refreshes suggestions; awaitable form of `send`.
    pub async fn deliver(&self, event: Event) -> SendOutcome {
        let outcome = self.run(event).await;
        self.report(&outcome);
        outcome
    }

    async fn run(&self, event: Event) -> SendOutcome {
        if let Err(error) = self.backend.post_event(&event).await {
            return SendOutcome::Dropped { event, error };
        }

        match self.backend.fetch_suggestions(&event.session_id).await {
            Ok(Some(list)) => {
                let apps = list.len();
                self.suggestions.replace(list).await;
                SendOutcome::Refreshed { event, apps }
            }
            Ok(None) => SendOutcome::Unchanged {
                event,
                reason: UnchangedReason::NoSuggestions,
            },
            Err(error) => SendOutcome::Unchanged {
                event,
                reason: UnchangedReason::FetchFailed(error),
            },
        }
    }

    fn report(&self, outcome: &SendOutcome) {
        let event = outcome.event();
        match outcome {
            SendOutcome::Refreshed { apps, .. } => {
                tracing::debug!(app = %event.app, kind = %event.kind, apps, "suggestions refreshed");
            }
            SendOutcome::Unchanged { reason, .. } => match reason {
                UnchangedReason::NoSuggestions => {
                    tracing::debug!(app = %event.app, kind = %event.kind, "no suggestion update");
                }
                UnchangedReason::FetchFailed(error) => {
                    tracing::warn!(app = %event.app, kind = %event.kind, %error, "suggestion fetch failed, keeping current dock");
                }
            },
            SendOutcome::Dropped { error, .. } => {
                tracing::warn!(app = %event.app, kind = %event.kind, %error, "event dropped");
            }
        }

        if let Some(sender) = &self.outcomes {
            // Receiver gone means nobody is observing any more.
            let _ = sender.send(outcome.clone());
        }
    }
}

impl EventSink for EventChannel {
    fn send(&self, draft: EventDraft) {
        let event = self.stamp(draft);
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let channel = self.clone();
                handle.spawn(async move {
                    channel.deliver(event).await;
                });
            }
            Err(_) => {
                tracing::warn!(app = %event.app, kind = %event.kind, "no async runtime, event dropped");
            }
        }
    }
}

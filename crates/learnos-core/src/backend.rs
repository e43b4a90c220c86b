//! Personalization backend boundary.

use async_trait::async_trait;

use crate::error::Result;
use crate::event::Event;
use crate::session::SessionId;
use crate::suggestion::SuggestionList;

/// The remote personalization service, seen from the shell.
///
/// Implementations perform I/O; callers treat every error as "stay
/// non-adaptive" and never show it to the visitor.
#[async_trait]
pub trait PersonalizationBackend: Send + Sync {
    /// Delivers one event to the ingestion endpoint.
    ///
    /// Only success or failure matters; any response body is ignored.
    async fn post_event(&self, event: &Event) -> Result<()>;

    /// Fetches the current suggestions for a session.
    ///
    /// Returns `Ok(None)` when the response carries no `suggestions` field,
    /// and `Err(MalformedResponse)` when the body cannot be used at all.
    async fn fetch_suggestions(&self, session_id: &SessionId) -> Result<Option<SuggestionList>>;
}

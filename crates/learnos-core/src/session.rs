//! Per-visit session identity.
//!
//! A session id correlates every event and suggestion request of one visit.
//! It is created lazily the first time anything asks for it and never changes
//! afterwards. Nothing here is persisted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use uuid::Uuid;

/// Opaque per-visit session token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Generates a fresh random session id.
    ///
    /// Uses the simple (hyphen-free) form of a v4 UUID so the id can be
    /// embedded in URL paths without escaping.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SessionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Lazily-created holder for the visit's session id.
///
/// Shared (behind an `Arc`) by the event channel and the shell so both observe
/// the same id.
#[derive(Debug, Default)]
pub struct SessionIdentity {
    id: OnceLock<SessionId>,
}

impl SessionIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an identity with a known id, mainly for tests and replays.
    pub fn with_id(id: SessionId) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(id);
        Self { id: cell }
    }

    /// Returns the session id, generating it on first call.
    pub fn id(&self) -> &SessionId {
        self.id.get_or_init(SessionId::generate)
    }

    /// Whether the id has been generated yet.
    pub fn is_initialized(&self) -> bool {
        self.id.get().is_some()
    }
}

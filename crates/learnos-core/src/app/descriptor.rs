//! Launchable app descriptors.

use serde::{Deserialize, Serialize};

use super::icon::Icon;

/// A launchable app as shown in the dock.
///
/// Descriptors are never patched in place: the dock's list is replaced
/// wholesale whenever the backend sends a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppDescriptor {
    /// Unique identifier; also selects which sandbox the window mounts.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Symbolic icon name as sent by the backend.
    pub icon: String,
    /// Optional hint shown on hover/focus.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl AppDescriptor {
    pub fn new(id: impl Into<String>, title: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: icon.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// The renderable icon, falling back to the generic app icon.
    pub fn resolved_icon(&self) -> Icon {
        Icon::resolve(&self.icon)
    }
}

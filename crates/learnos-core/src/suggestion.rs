//! The dock's suggestion list and its shared store.

use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::app::{AppDescriptor, default_apps};
use crate::error::{LearnOsError, Result};

/// Ordered list of launchable apps with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionList {
    apps: Vec<AppDescriptor>,
}

impl SuggestionList {
    /// Builds a list, rejecting duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns `MalformedResponse` if two descriptors share an id, since the
    /// dock could not launch them unambiguously.
    pub fn try_new(apps: Vec<AppDescriptor>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(apps.len());
        for app in &apps {
            if !seen.insert(app.id.as_str()) {
                return Err(LearnOsError::malformed(format!(
                    "duplicate app id '{}' in suggestion list",
                    app.id
                )));
            }
        }
        Ok(Self { apps })
    }

    pub fn apps(&self) -> &[AppDescriptor] {
        &self.apps
    }

    pub fn ids(&self) -> Vec<&str> {
        self.apps.iter().map(|app| app.id.as_str()).collect()
    }

    pub fn find(&self, app_id: &str) -> Option<&AppDescriptor> {
        self.apps.iter().find(|app| app.id == app_id)
    }

    /// Returns the descriptor at a 1-based dock position.
    pub fn at_position(&self, position: usize) -> Option<&AppDescriptor> {
        position.checked_sub(1).and_then(|index| self.apps.get(index))
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}

impl Default for SuggestionList {
    /// The static default dock.
    fn default() -> Self {
        Self {
            apps: default_apps(),
        }
    }
}

/// Shell-owned container for the current suggestion list.
///
/// Cloning shares the same underlying list. `replace` is the only writer;
/// whichever replacement lands last wins.
#[derive(Debug, Clone, Default)]
pub struct SuggestionStore {
    inner: Arc<RwLock<SuggestionList>>,
}

impl SuggestionStore {
    /// Creates a store seeded with the static default dock.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(list: SuggestionList) -> Self {
        Self {
            inner: Arc::new(RwLock::new(list)),
        }
    }

    /// Returns a copy of the current list.
    pub async fn snapshot(&self) -> SuggestionList {
        self.inner.read().await.clone()
    }

    /// Atomically replaces the whole list.
    pub async fn replace(&self, list: SuggestionList) {
        let mut guard = self.inner.write().await;
        *guard = list;
    }
}

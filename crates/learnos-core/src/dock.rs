//! Dock projection of the suggestion list.
//!
//! The dock holds no state: it is recomputed from the current suggestion
//! list and the window slot every time it is rendered.

use std::str::FromStr;

use crate::app::{AppDescriptor, Icon};
use crate::error::{LearnOsError, Result};
use crate::suggestion::SuggestionList;
use crate::window::WindowManager;

/// One launch target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockItem {
    /// 1-based position in the dock.
    pub position: usize,
    pub id: String,
    pub title: String,
    pub icon: Icon,
    pub hint: Option<String>,
}

/// The rendered dock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockView {
    /// False while an app window is open.
    pub visible: bool,
    pub items: Vec<DockItem>,
}

impl DockView {
    pub fn ids(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.id.as_str()).collect()
    }

    pub fn item(&self, selector: &DockSelector) -> Option<&DockItem> {
        self.items.iter().find(|item| match selector {
            DockSelector::Id(id) => &item.id == id,
            DockSelector::Position(position) => item.position == *position,
        })
    }
}

/// How a visitor points at a dock item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DockSelector {
    Id(String),
    Position(usize),
}

impl FromStr for DockSelector {
    type Err = LearnOsError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LearnOsError::invalid_input("expected an app id or dock position"));
        }
        Ok(match s.parse::<usize>() {
            Ok(position) => DockSelector::Position(position),
            Err(_) => DockSelector::Id(s.to_string()),
        })
    }
}

pub struct Dock;

impl Dock {
    pub fn project(suggestions: &SuggestionList, window: &WindowManager) -> DockView {
        let items = suggestions
            .apps()
            .iter()
            .enumerate()
            .map(|(index, app)| DockItem {
                position: index + 1,
                id: app.id.clone(),
                title: app.title.clone(),
                icon: app.resolved_icon(),
                hint: app.hint.clone(),
            })
            .collect();

        DockView {
            visible: !window.is_open(),
            items,
        }
    }

    /// Resolves a selection to the descriptor to open.
    pub fn select(suggestions: &SuggestionList, selector: &DockSelector) -> Result<AppDescriptor> {
        let found = match selector {
            DockSelector::Id(id) => suggestions.find(id),
            DockSelector::Position(position) => suggestions.at_position(*position),
        };
        found.cloned().ok_or_else(|| {
            let key = match selector {
                DockSelector::Id(id) => id.clone(),
                DockSelector::Position(position) => format!("#{position}"),
            };
            LearnOsError::not_found("AppDescriptor", key)
        })
    }
}

//! Forces: balance a two-sided scale.

use serde_json::json;

use super::Sandbox;
use crate::event::{EventDraft, EventType};

pub const APP_NAME: &str = "Sandboxes/Forces";
pub const PROMPT: &str = "Balance the scale by adjusting weights.";
pub const MIN_WEIGHT: u8 = 1;
pub const MAX_WEIGHT: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForcesAction {
    SetLeft(u8),
    SetRight(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Balance {
    Balanced,
    Tilting,
}

impl Balance {
    pub fn label(&self) -> &'static str {
        match self {
            Balance::Balanced => "Balanced",
            Balance::Tilting => "Tilting",
        }
    }
}

/// Two weights; both start at the minimum, so a fresh scale is balanced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forces {
    left: u8,
    right: u8,
}

impl Default for Forces {
    fn default() -> Self {
        Self {
            left: MIN_WEIGHT,
            right: MIN_WEIGHT,
        }
    }
}

impl Forces {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn left(&self) -> u8 {
        self.left
    }

    pub fn right(&self) -> u8 {
        self.right
    }

    pub fn balance(&self) -> Balance {
        if self.left == self.right {
            Balance::Balanced
        } else {
            Balance::Tilting
        }
    }

    fn milestone() -> EventDraft {
        EventDraft::new(
            APP_NAME,
            EventType::Milestone,
            Some(json!({ "built": "bridge" })),
        )
    }
}

impl Sandbox for Forces {
    type Action = ForcesAction;

    /// A fresh scale is already balanced, which counts as an observation.
    fn mount(&self) -> Option<EventDraft> {
        (self.balance() == Balance::Balanced).then(Self::milestone)
    }

    fn reduce(&mut self, action: ForcesAction) -> Option<EventDraft> {
        let before = self.balance();
        let (slot, value) = match action {
            ForcesAction::SetLeft(value) => (&mut self.left, value),
            ForcesAction::SetRight(value) => (&mut self.right, value),
        };
        let value = value.clamp(MIN_WEIGHT, MAX_WEIGHT);
        if *slot == value {
            return None;
        }
        *slot = value;

        let after = self.balance();
        (after == Balance::Balanced && before != after).then(Self::milestone)
    }
}

//! Sandbox apps and their trigger conditions.
//!
//! Every sandbox is a reducer: an action mutates private state, then the
//! event (if any) is derived from the new state. Nothing here performs I/O;
//! callers forward returned drafts to the event channel.

pub mod forces;
pub mod number_play;
pub mod pattern_garden;

pub use forces::{Balance, Forces, ForcesAction};
pub use number_play::{NumberPlay, NumberPlayAction};
pub use pattern_garden::{PatternGarden, PatternGardenAction};

use crate::app::{FORCES_ID, NUMBER_PLAY_ID, PATTERN_GARDEN_ID};
use crate::error::{LearnOsError, Result};
use crate::event::EventDraft;

/// An interactive widget with a trigger condition over its own state.
pub trait Sandbox {
    type Action;

    /// Evaluated once when the sandbox is mounted into a window.
    fn mount(&self) -> Option<EventDraft> {
        None
    }

    /// Applies one action and returns the event its new state triggers.
    fn reduce(&mut self, action: Self::Action) -> Option<EventDraft>;
}

/// Any action addressed to the open sandbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SandboxAction {
    NumberPlay(NumberPlayAction),
    PatternGarden(PatternGardenAction),
    Forces(ForcesAction),
}

impl SandboxAction {
    /// Id of the app this action is meant for.
    pub fn target(&self) -> &'static str {
        match self {
            SandboxAction::NumberPlay(_) => NUMBER_PLAY_ID,
            SandboxAction::PatternGarden(_) => PATTERN_GARDEN_ID,
            SandboxAction::Forces(_) => FORCES_ID,
        }
    }
}

/// The sandbox mounted in the open window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SandboxApp {
    NumberPlay(NumberPlay),
    PatternGarden(PatternGarden),
    Forces(Forces),
}

impl SandboxApp {
    /// Fresh sandbox for a descriptor id; `None` for apps without a body.
    pub fn for_app(app_id: &str) -> Option<Self> {
        match app_id {
            NUMBER_PLAY_ID => Some(SandboxApp::NumberPlay(NumberPlay::new())),
            PATTERN_GARDEN_ID => Some(SandboxApp::PatternGarden(PatternGarden::new())),
            FORCES_ID => Some(SandboxApp::Forces(Forces::new())),
            _ => None,
        }
    }

    pub fn app_id(&self) -> &'static str {
        match self {
            SandboxApp::NumberPlay(_) => NUMBER_PLAY_ID,
            SandboxApp::PatternGarden(_) => PATTERN_GARDEN_ID,
            SandboxApp::Forces(_) => FORCES_ID,
        }
    }

    pub fn mount(&self) -> Option<EventDraft> {
        match self {
            SandboxApp::NumberPlay(app) => app.mount(),
            SandboxApp::PatternGarden(app) => app.mount(),
            SandboxApp::Forces(app) => app.mount(),
        }
    }

    /// Routes an action to the mounted sandbox.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the action targets a different app.
    pub fn dispatch(&mut self, action: SandboxAction) -> Result<Option<EventDraft>> {
        match (self, action) {
            (SandboxApp::NumberPlay(app), SandboxAction::NumberPlay(action)) => {
                Ok(app.reduce(action))
            }
            (SandboxApp::PatternGarden(app), SandboxAction::PatternGarden(action)) => {
                Ok(app.reduce(action))
            }
            (SandboxApp::Forces(app), SandboxAction::Forces(action)) => Ok(app.reduce(action)),
            (app, action) => Err(LearnOsError::invalid_input(format!(
                "{} is not open (current app: {})",
                action.target(),
                app.app_id()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventType;

    #[test]
    fn test_for_app_matches_ids() {
        assert_eq!(SandboxApp::for_app("NumberPlay").unwrap().app_id(), NUMBER_PLAY_ID);
        assert_eq!(SandboxApp::for_app("PatternGarden").unwrap().app_id(), PATTERN_GARDEN_ID);
        assert_eq!(SandboxApp::for_app("Forces").unwrap().app_id(), FORCES_ID);
        assert!(SandboxApp::for_app("Chess").is_none());
    }

    #[test]
    fn test_only_forces_emits_on_mount() {
        assert!(SandboxApp::for_app("NumberPlay").unwrap().mount().is_none());
        assert!(SandboxApp::for_app("PatternGarden").unwrap().mount().is_none());
        let mounted = SandboxApp::for_app("Forces").unwrap().mount().unwrap();
        assert_eq!(mounted.kind, EventType::Milestone);
    }

    #[test]
    fn test_dispatch_rejects_mismatched_action() {
        let mut app = SandboxApp::for_app("Forces").unwrap();
        let err = app
            .dispatch(SandboxAction::PatternGarden(PatternGardenAction::Toggle(0)))
            .unwrap_err();
        assert!(matches!(err, LearnOsError::InvalidInput(_)));
    }

    #[test]
    fn test_dispatch_routes_to_sandbox() {
        let mut app = SandboxApp::for_app("NumberPlay").unwrap();
        app.dispatch(SandboxAction::NumberPlay(NumberPlayAction::SetA("1".into())))
            .unwrap();
        let event = app
            .dispatch(SandboxAction::NumberPlay(NumberPlayAction::SetB("2".into())))
            .unwrap()
            .unwrap();
        assert_eq!(event.kind, EventType::Action);
    }
}

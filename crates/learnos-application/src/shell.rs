//! The desktop shell use case.
//!
//! Owns the window slot and the mounted sandbox, reads the shared suggestion
//! store for the dock, and forwards every event draft to the event sink.

use learnos_core::app::AppDescriptor;
use learnos_core::dock::{Dock, DockSelector, DockView};
use learnos_core::error::{LearnOsError, Result};
use learnos_core::event::{EventDraft, EventType};
use learnos_core::sandbox::{SandboxAction, SandboxApp};
use learnos_core::session::{SessionId, SessionIdentity};
use learnos_core::suggestion::SuggestionStore;
use learnos_core::window::{WindowManager, WindowTransition};
use std::sync::Arc;

use crate::event_channel::EventSink;

/// What the open window shows.
#[derive(Debug, Clone, Copy)]
pub struct WindowView<'a> {
    pub app: &'a AppDescriptor,
    /// `None` for apps that have no sandbox body.
    pub sandbox: Option<&'a SandboxApp>,
}

pub struct DesktopShell {
    session: Arc<SessionIdentity>,
    sink: Arc<dyn EventSink>,
    suggestions: SuggestionStore,
    window: WindowManager,
    sandbox: Option<SandboxApp>,
}

impl DesktopShell {
    pub fn new(
        session: Arc<SessionIdentity>,
        sink: Arc<dyn EventSink>,
        suggestions: SuggestionStore,
    ) -> Self {
        Self {
            session,
            sink,
            suggestions,
            window: WindowManager::new(),
            sandbox: None,
        }
    }

    pub fn session_id(&self) -> &SessionId {
        self.session.id()
    }

    /// Current dock, projected from the latest suggestion list.
    pub async fn dock(&self) -> DockView {
        let list = self.suggestions.snapshot().await;
        Dock::project(&list, &self.window)
    }

    /// Launches a dock item.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` while an app is open (the dock is hidden)
    /// - `NotFound` if the selector matches no dock item
    pub async fn launch(&mut self, selector: &DockSelector) -> Result<AppDescriptor> {
        if let Some(open) = self.window.current() {
            return Err(LearnOsError::invalid_input(format!(
                "the dock is hidden while {} is open; close it first",
                open.title
            )));
        }
        let list = self.suggestions.snapshot().await;
        let app = Dock::select(&list, selector)?;
        self.open(app.clone());
        Ok(app)
    }

    /// Opens `app`, replacing whatever is open.
    ///
    /// The `open_app` event is handed to the sink before the window changes.
    /// A replaced app is discarded without a close event and the new app
    /// mounts a fresh sandbox.
    pub fn open(&mut self, app: AppDescriptor) -> WindowTransition {
        self.sink.send(EventDraft::open_app(app.id.clone()));

        let sandbox = SandboxApp::for_app(&app.id);
        let transition = self.window.open(app);
        if let WindowTransition::Replaced { previous } = &transition {
            tracing::debug!(previous = %previous.id, "replacing open app");
        }

        if let Some(draft) = sandbox.as_ref().and_then(SandboxApp::mount) {
            self.sink.send(draft);
        }
        self.sandbox = sandbox;
        transition
    }

    /// Closes the open app. No event is emitted.
    pub fn close(&mut self) -> Option<AppDescriptor> {
        self.sandbox = None;
        self.window.close()
    }

    /// Applies a sandbox action and forwards any triggered event.
    ///
    /// Returns the type of the event that was sent, if any.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if no sandbox is open or the action targets a
    /// different app.
    pub fn interact(&mut self, action: SandboxAction) -> Result<Option<EventType>> {
        let sandbox = self.sandbox.as_mut().ok_or_else(|| {
            LearnOsError::invalid_input(format!("{} is not open", action.target()))
        })?;

        let draft = sandbox.dispatch(action)?;
        let kind = draft.as_ref().map(|d| d.kind);
        if let Some(draft) = draft {
            self.sink.send(draft);
        }
        Ok(kind)
    }

    pub fn open_app(&self) -> Option<&AppDescriptor> {
        self.window.current()
    }

    pub fn window(&self) -> Option<WindowView<'_>> {
        self.window.current().map(|app| WindowView {
            app,
            sandbox: self.sandbox.as_ref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use learnos_core::app::default_apps;
    use learnos_core::sandbox::{ForcesAction, NumberPlayAction, PatternGardenAction};
    use learnos_core::suggestion::SuggestionList;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        drafts: Mutex<Vec<EventDraft>>,
    }

    impl RecordingSink {
        fn take(&self) -> Vec<EventDraft> {
            std::mem::take(&mut *self.drafts.lock().unwrap())
        }
    }

    impl EventSink for RecordingSink {
        fn send(&self, draft: EventDraft) {
            self.drafts.lock().unwrap().push(draft);
        }
    }

    fn shell() -> (DesktopShell, Arc<RecordingSink>, SuggestionStore) {
        let sink = Arc::new(RecordingSink::default());
        let store = SuggestionStore::new();
        let shell = DesktopShell::new(
            Arc::new(SessionIdentity::new()),
            sink.clone(),
            store.clone(),
        );
        (shell, sink, store)
    }

    #[tokio::test]
    async fn test_launch_emits_single_open_app() {
        let (mut shell, sink, _) = shell();

        let app = shell.launch(&"PatternGarden".parse().unwrap()).await.unwrap();

        assert_eq!(app.id, "PatternGarden");
        let drafts = sink.take();
        assert_eq!(drafts, vec![EventDraft::open_app("PatternGarden")]);
        assert_eq!(shell.open_app().map(|a| a.id.as_str()), Some("PatternGarden"));
        assert!(!shell.dock().await.visible);
    }

    /// Refuses every draft, so `open` unwinds at its first send.
    struct RefusingSink;

    impl EventSink for RefusingSink {
        fn send(&self, _draft: EventDraft) {
            panic!("sink refused draft");
        }
    }

    #[test]
    fn test_open_app_is_sent_before_window_changes() {
        let mut shell = DesktopShell::new(
            Arc::new(SessionIdentity::new()),
            Arc::new(RefusingSink),
            SuggestionStore::new(),
        );

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            shell.open(default_apps()[0].clone());
        }));

        assert!(result.is_err());
        assert!(shell.window().is_none());
        assert!(shell.open_app().is_none());
    }

    #[tokio::test]
    async fn test_launch_refused_while_open() {
        let (mut shell, sink, _) = shell();
        shell.launch(&DockSelector::Position(1)).await.unwrap();
        sink.take();

        let err = shell.launch(&DockSelector::Position(2)).await.unwrap_err();
        assert!(matches!(err, LearnOsError::InvalidInput(_)));
        assert!(sink.take().is_empty());
        assert_eq!(shell.open_app().map(|a| a.id.as_str()), Some("NumberPlay"));
    }

    #[tokio::test]
    async fn test_launch_unknown_item() {
        let (mut shell, sink, _) = shell();
        let err = shell.launch(&"Chess".parse().unwrap()).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(sink.take().is_empty());
        assert!(shell.window().is_none());
    }

    #[test]
    fn test_open_forces_reports_open_then_mount_milestone() {
        let (mut shell, sink, _) = shell();
        let forces = default_apps()[2].clone();

        assert_eq!(shell.open(forces), WindowTransition::Opened);

        let drafts = sink.take();
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0], EventDraft::open_app("Forces"));
        assert_eq!(drafts[1].kind, EventType::Milestone);
        assert_eq!(drafts[1].app, "Sandboxes/Forces");
    }

    #[test]
    fn test_close_emits_nothing_and_clears_window() {
        let (mut shell, sink, _) = shell();
        shell.open(default_apps()[0].clone());
        sink.take();

        assert_eq!(shell.close().map(|a| a.id), Some("NumberPlay".to_string()));
        assert!(sink.take().is_empty());
        assert!(shell.window().is_none());
        assert!(shell.close().is_none());
    }

    #[test]
    fn test_open_while_open_replaces_without_close_event() {
        let (mut shell, sink, _) = shell();
        let apps = default_apps();
        shell.open(apps[0].clone());
        shell
            .interact(SandboxAction::NumberPlay(NumberPlayAction::SetA("3".into())))
            .unwrap();
        sink.take();

        let transition = shell.open(apps[1].clone());

        assert_eq!(
            transition,
            WindowTransition::Replaced {
                previous: apps[0].clone()
            }
        );
        assert_eq!(sink.take(), vec![EventDraft::open_app("PatternGarden")]);
        let view = shell.window().unwrap();
        assert_eq!(view.app.id, "PatternGarden");
        assert!(matches!(view.sandbox, Some(SandboxApp::PatternGarden(_))));
    }

    #[test]
    fn test_reopening_same_app_mounts_fresh_state() {
        let (mut shell, _sink, _) = shell();
        let number_play = default_apps()[0].clone();
        shell.open(number_play.clone());
        shell
            .interact(SandboxAction::NumberPlay(NumberPlayAction::SetA("3".into())))
            .unwrap();

        shell.open(number_play);

        match shell.window().and_then(|w| w.sandbox) {
            Some(SandboxApp::NumberPlay(play)) => assert_eq!(play.a(), ""),
            other => panic!("unexpected sandbox: {other:?}"),
        }
    }

    #[test]
    fn test_interactions_forward_triggered_events() {
        let (mut shell, sink, _) = shell();
        shell.open(default_apps()[0].clone());
        sink.take();

        let first = shell
            .interact(SandboxAction::NumberPlay(NumberPlayAction::SetA("3".into())))
            .unwrap();
        let second = shell
            .interact(SandboxAction::NumberPlay(NumberPlayAction::SetB("4".into())))
            .unwrap();

        assert_eq!(first, None);
        assert_eq!(second, Some(EventType::Action));
        let drafts = sink.take();
        assert_eq!(drafts.len(), 1);
        assert_eq!(
            drafts[0].payload,
            Some(json!({ "operation": "add", "values": [3, 4] }))
        );
    }

    #[test]
    fn test_interact_requires_matching_open_app() {
        let (mut shell, _sink, _) = shell();
        let closed = shell.interact(SandboxAction::Forces(ForcesAction::SetLeft(3)));
        assert!(closed.is_err());

        shell.open(default_apps()[0].clone());
        let mismatched = shell.interact(SandboxAction::PatternGarden(PatternGardenAction::Toggle(0)));
        assert!(mismatched.is_err());
    }

    #[test]
    fn test_app_without_sandbox_opens_empty_window() {
        let (mut shell, sink, _) = shell();
        let chess = AppDescriptor::new("Chess", "Chess", "Knight");

        shell.open(chess.clone());

        assert_eq!(sink.take(), vec![EventDraft::open_app("Chess")]);
        let view = shell.window().unwrap();
        assert_eq!(view.app, &chess);
        assert!(view.sandbox.is_none());
        assert!(shell.interact(SandboxAction::Forces(ForcesAction::SetLeft(2))).is_err());
    }

    #[tokio::test]
    async fn test_dock_follows_store_replacements() {
        let (shell, _sink, store) = shell();
        assert_eq!(shell.dock().await.ids(), vec!["NumberPlay", "PatternGarden", "Forces"]);

        store
            .replace(
                SuggestionList::try_new(vec![
                    AppDescriptor::new("Forces", "Forces Sandbox", "Orbit"),
                    AppDescriptor::new("Chess", "Chess", "Knight"),
                ])
                .unwrap(),
            )
            .await;

        assert_eq!(shell.dock().await.ids(), vec!["Forces", "Chess"]);
    }
}

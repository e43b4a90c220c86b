//! Interaction events reported to the personalization backend.
//!
//! Sandboxes and the shell build [`EventDraft`]s; the event channel stamps
//! them with the session id to produce the wire-level [`Event`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::session::SessionId;

/// The closed vocabulary of event types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// An app was launched from the dock.
    OpenApp,
    /// Number Play computed something.
    Action,
    /// Pattern Garden crossed its activity threshold.
    Discovery,
    /// Forces reached balance.
    Milestone,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::OpenApp => "open_app",
            EventType::Action => "action",
            EventType::Discovery => "discovery",
            EventType::Milestone => "milestone",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An event that has not yet been attached to a session.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub app: String,
    pub kind: EventType,
    pub payload: Option<Value>,
}

impl EventDraft {
    pub fn new(app: impl Into<String>, kind: EventType, payload: Option<Value>) -> Self {
        Self {
            app: app.into(),
            kind,
            payload,
        }
    }

    /// The `open_app` event emitted when the dock launches `app_id`.
    pub fn open_app(app_id: impl Into<String>) -> Self {
        Self::new(app_id, EventType::OpenApp, None)
    }

    /// Attaches the session id, producing the immutable wire event.
    pub fn stamp(self, session_id: &SessionId) -> Event {
        Event {
            app: self.app,
            kind: self.kind,
            payload: self.payload,
            session_id: session_id.clone(),
        }
    }
}

/// A complete event as posted to `POST {base}/event`.
///
/// `open_app` events carry no payload; the key is then omitted from the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub app: String,
    #[serde(rename = "type")]
    pub kind: EventType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
    pub session_id: SessionId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stamp_attaches_session() {
        let session = SessionId::from("s-1".to_string());
        let event = EventDraft::new(
            "PatternGarden",
            EventType::Discovery,
            Some(json!({ "active": 8 })),
        )
        .stamp(&session);

        assert_eq!(event.session_id, session);
        assert_eq!(event.app, "PatternGarden");
        assert_eq!(event.kind, EventType::Discovery);
    }

    #[test]
    fn test_wire_shape() {
        let session = SessionId::from("s-2".to_string());
        let event = EventDraft::new(
            "NumberPlay",
            EventType::Action,
            Some(json!({ "operation": "add", "values": [3.0, 4.0] })),
        )
        .stamp(&session);

        let body = serde_json::to_value(&event).unwrap();
        assert_eq!(
            body,
            json!({
                "app": "NumberPlay",
                "type": "action",
                "payload": { "operation": "add", "values": [3.0, 4.0] },
                "session_id": "s-2"
            })
        );
    }

    #[test]
    fn test_open_app_omits_payload() {
        let event = EventDraft::open_app("Forces").stamp(&SessionId::from("s-3".to_string()));
        let body = serde_json::to_value(&event).unwrap();
        assert_eq!(
            body,
            json!({ "app": "Forces", "type": "open_app", "session_id": "s-3" })
        );
    }
}

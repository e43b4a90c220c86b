//! Application layer for LearnOS.
//!
//! Coordinates the domain types with the personalization backend: the event
//! channel reports interactions and refreshes suggestions, and the desktop
//! shell ties the dock, the window slot and the mounted sandbox together.

pub mod event_channel;
pub mod shell;

pub use event_channel::{EventChannel, EventSink, SendOutcome, UnchangedReason};
pub use shell::{DesktopShell, WindowView};

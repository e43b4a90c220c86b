//! Domain layer for LearnOS.
//!
//! Session identity, the event vocabulary, the suggestion list, the
//! single-window manager, the dock projection and the sandbox reducers.
//! Nothing in this crate performs I/O; the backend is reached through the
//! [`backend::PersonalizationBackend`] trait.

pub mod app;
pub mod backend;
pub mod config;
pub mod dock;
pub mod error;
pub mod event;
pub mod sandbox;
pub mod session;
pub mod suggestion;
pub mod window;

// Re-export common error type
pub use error::LearnOsError;

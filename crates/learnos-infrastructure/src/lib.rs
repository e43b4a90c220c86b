//! Infrastructure layer for LearnOS.
//!
//! HTTP access to the personalization backend and configuration loading.

pub mod config_service;
pub mod dto;
pub mod http_backend;
pub mod paths;

pub use crate::config_service::{ConfigOverrides, ConfigService};
pub use crate::http_backend::HttpPersonalizationBackend;
pub use crate::paths::LearnOsPaths;

//! Platform paths for LearnOS configuration.
//!
//! ```text
//! ~/.config/learnos/           # Config directory (XDG on Linux)
//! └── config.toml              # Backend settings
//! ```

use learnos_core::error::{LearnOsError, Result};
use std::path::PathBuf;

const APP_DIR: &str = "learnos";
const CONFIG_FILE: &str = "config.toml";

pub struct LearnOsPaths;

impl LearnOsPaths {
    /// Returns the LearnOS configuration directory.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| LearnOsError::config("Cannot find config directory"))
    }

    /// Returns the path to `config.toml`.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }
}

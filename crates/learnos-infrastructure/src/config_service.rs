//! Configuration service.
//!
//! Resolves the backend settings from, highest priority first: explicit
//! overrides (CLI flags), environment variables, `config.toml`, defaults.

use learnos_core::config::{BackendConfig, ConfigRoot};
use learnos_core::error::{LearnOsError, Result};
use reqwest::Url;
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths::LearnOsPaths;

pub const BACKEND_URL_ENV: &str = "LEARNOS_BACKEND_URL";
pub const TIMEOUT_ENV: &str = "LEARNOS_REQUEST_TIMEOUT_SECS";

/// Values supplied explicitly by the caller (usually CLI flags).
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub backend_url: Option<String>,
    pub timeout_secs: Option<u64>,
    /// Read this file instead of the default `config.toml`.
    pub config_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigService {
    overrides: ConfigOverrides,
}

impl ConfigService {
    pub fn new(overrides: ConfigOverrides) -> Self {
        Self { overrides }
    }

    /// Resolves the backend config using the process environment.
    pub fn backend_config(&self) -> Result<BackendConfig> {
        self.resolve_with_env(|key| std::env::var(key).ok())
    }

    /// Resolves the backend config with an explicit environment lookup.
    pub fn resolve_with_env<F>(&self, env: F) -> Result<BackendConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = self.load_file()?.backend;

        if let Some(url) = env(BACKEND_URL_ENV).filter(|v| !v.trim().is_empty()) {
            config.base_url = url;
        }
        if let Some(raw) = env(TIMEOUT_ENV).filter(|v| !v.trim().is_empty()) {
            config.timeout_secs = raw.trim().parse().map_err(|_| {
                LearnOsError::config(format!("{TIMEOUT_ENV} must be a whole number of seconds, got '{raw}'"))
            })?;
        }

        if let Some(url) = &self.overrides.backend_url {
            config.base_url = url.clone();
        }
        if let Some(secs) = self.overrides.timeout_secs {
            config.timeout_secs = secs;
        }

        if config.timeout_secs == 0 {
            return Err(LearnOsError::config("timeout must be at least 1 second"));
        }
        config.base_url = config.base().trim().to_string();
        validate_base_url(&config.base_url)?;
        Ok(config)
    }

    /// Loads `config.toml`; a missing file yields defaults.
    fn load_file(&self) -> Result<ConfigRoot> {
        let path = match &self.overrides.config_path {
            Some(path) => path.clone(),
            None => match LearnOsPaths::config_file() {
                Ok(path) => path,
                Err(err) => {
                    tracing::debug!("No config directory, using defaults: {}", err);
                    return Ok(ConfigRoot::default());
                }
            },
        };
        load_config_file(&path)
    }
}

/// Reads a config file, treating a missing or blank file as defaults.
pub fn load_config_file(path: &Path) -> Result<ConfigRoot> {
    if !path.exists() {
        tracing::debug!("Config file {:?} not found, using defaults", path);
        return Ok(ConfigRoot::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        LearnOsError::config(format!("Failed to read config file at {:?}: {}", path, e))
    })?;

    if content.trim().is_empty() {
        return Ok(ConfigRoot::default());
    }

    toml::from_str(&content).map_err(|e| {
        LearnOsError::config(format!("Failed to parse config file at {:?}: {}", path, e))
    })
}

fn validate_base_url(raw: &str) -> Result<()> {
    let url = Url::parse(raw)
        .map_err(|e| LearnOsError::config(format!("Invalid backend URL '{raw}': {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(LearnOsError::config(format!(
            "Backend URL must use http or https, got '{other}'"
        ))),
    }
}

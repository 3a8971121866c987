//! Loading and validating `Settings`.
//!
//! `Settings::load(None)` returns the defaults. With a path, the file is read,
//! parsed, and validated; any failure is a `ConfigError`.

use std::path::Path;

use tracing::{debug, info};

use healthhub_contracts::error::{HealthHubError, HealthHubResult};

use crate::settings::Settings;

impl Settings {
    /// Parse `s` as TOML and validate the result.
    pub fn from_toml_str(s: &str) -> HealthHubResult<Self> {
        let settings: Settings = toml::from_str(s).map_err(|e| HealthHubError::ConfigError {
            reason: format!("failed to parse settings TOML: {}", e),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read the file at `path` and parse it as settings.
    pub fn from_file(path: &Path) -> HealthHubResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| HealthHubError::ConfigError {
            reason: format!("failed to read settings file '{}': {}", path.display(), e),
        })?;
        let settings = Self::from_toml_str(&contents)?;
        info!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Load from `path` when given, otherwise fall back to the defaults.
    pub fn load(path: Option<&Path>) -> HealthHubResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("no settings file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Reject values the page state machines cannot honour.
    pub fn validate(&self) -> HealthHubResult<()> {
        let step = self.timings.progress_step;
        if !(1..=100).contains(&step) {
            return Err(HealthHubError::ConfigError {
                reason: format!("timings.progress_step must be between 1 and 100, got {}", step),
            });
        }
        if self.log_filter.trim().is_empty() {
            return Err(HealthHubError::ConfigError {
                reason: "log_filter must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

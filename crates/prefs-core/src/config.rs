//! Settings window configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use prefs_storage::StorageKeys;

use crate::error::CoreError;
use crate::Result;

/// Longest animation we accept; anything slower feels broken.
const MAX_ANIMATION_MS: u64 = 2_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the database holding persisted window state
    pub database_path: PathBuf,
    /// Namespace for persistence keys, one per window role
    pub namespace: String,
    /// Shown in the window title when there is only one pane
    pub app_name: String,
    /// Duration of the resize animation between panes
    pub animation_duration_ms: u64,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("settings.db"),
            namespace: StorageKeys::default().namespace().to_string(),
            app_name: "Prefs".to_string(),
            animation_duration_ms: 250,
        }
    }

    /// Per-user data directory, falling back to `.prefs` in the working
    /// directory when the platform has none
    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("Prefs"))
            .unwrap_or_else(|| PathBuf::from(".prefs"))
    }

    /// Parse a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.app_name.trim().is_empty() {
            return Err(CoreError::Config("app_name cannot be empty".to_string()));
        }
        if self.animation_duration_ms > MAX_ANIMATION_MS {
            return Err(CoreError::Config(format!(
                "animation_duration_ms must be at most {}",
                MAX_ANIMATION_MS
            )));
        }
        Ok(())
    }

    pub fn keys(&self) -> StorageKeys {
        StorageKeys::new(self.namespace.clone())
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

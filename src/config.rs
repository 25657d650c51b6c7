//! Tracker configuration.
//!
//! Settings live in `<data-dir>/settings.json`. Every field is optional;
//! a missing file means defaults.
//!
//! ```json
//! {
//!   "storageKey": "dvt_history_v1",
//!   "historyLimit": 60,
//!   "recentLimit": 20,
//!   "color": true
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};
use crate::history::DEFAULT_STORAGE_KEY;

/// Name of the settings file inside the data directory.
pub const SETTINGS_FILENAME: &str = "settings.json";

/// Name of the data directory under the platform data dir.
pub const APP_DIR_NAME: &str = "dvt";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerConfig {
    /// Key the history blob is stored under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Rounds shown in the history badge strip.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Rounds shown in the strip under the prediction.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// Colourise terminal output.
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_history_limit() -> usize {
    60
}

fn default_recent_limit() -> usize {
    20
}

fn default_true() -> bool {
    true
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            history_limit: default_history_limit(),
            recent_limit: default_recent_limit(),
            color: true,
        }
    }
}

impl TrackerConfig {
    /// Load configuration from a data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file exists but cannot be read or parsed.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let settings_path = Self::settings_path(data_dir);

        if !settings_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&settings_path).map_err(|e| {
            TrackerError::config_with_path(e.to_string(), settings_path.clone())
        })?;
        serde_json::from_str(&content)
            .map_err(|e| TrackerError::config_with_path(e.to_string(), settings_path))
    }

    /// Get the settings.json path for a data directory
    pub fn settings_path(data_dir: &Path) -> PathBuf {
        data_dir.join(SETTINGS_FILENAME)
    }

    /// Platform default data directory, falling back to `./.dvt`.
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from(".dvt"))
    }

    /// Check that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(TrackerError::invalid_config("storageKey", "must not be empty"));
        }
        if self
            .storage_key
            .contains(|c: char| std::path::is_separator(c) || c == '.')
        {
            return Err(TrackerError::invalid_config(
                "storageKey",
                "must not contain path separators or dots",
            ));
        }
        if self.history_limit == 0 {
            return Err(TrackerError::invalid_config("historyLimit", "must be positive"));
        }
        if self.recent_limit == 0 {
            return Err(TrackerError::invalid_config("recentLimit", "must be positive"));
        }
        Ok(())
    }
}

//! History persistence.
//!
//! The whole log lives as one JSON blob under a single key in a
//! [`KeyValueStore`]. A blob that is missing or fails to parse is treated as
//! an empty log; that fallback is deliberate and never surfaces as an error.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, warn};

use super::confirm::Confirmation;
use super::types::{HistoryLog, Outcome, RoundOutcome};
use crate::error::{IntoTrackerError, Result};

/// Default key the history blob is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "dvt_history_v1";

/// Prompt shown before wiping the history.
pub const CLEAR_PROMPT: &str = "Clear all history?";

/// Key-value persistence collaborator.
pub trait KeyValueStore {
    /// Returns the stored blob, or `None` if nothing readable is stored.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-process key-value store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw value, bypassing serialization.
    #[must_use]
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed key-value store: one `<key>.json` file per key.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`. The directory is created on first write.
    #[must_use]
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Returns the directory holding the value files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file path used for `key`.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        if !path.exists() {
            return None;
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir).into_tracker_storage(key)?;

        let temp_path = self.dir.join(format!("{}.json.tmp", key));
        std::fs::write(&temp_path, value).into_tracker_storage(key)?;
        std::fs::rename(&temp_path, self.path_for(key)).into_tracker_storage(key)?;

        Ok(())
    }
}

/// Append-only round history on top of a [`KeyValueStore`].
///
/// The log is only ever appended to, popped from the end, or cleared.
#[derive(Debug, Clone)]
pub struct HistoryStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// Creates a history store using [`DEFAULT_STORAGE_KEY`].
    #[must_use]
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    /// Uses a different storage key.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Returns the storage key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the underlying key-value store.
    #[must_use]
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Loads the persisted log.
    ///
    /// Absent or corrupt data yields an empty log.
    #[must_use]
    pub fn load(&self) -> HistoryLog {
        let Some(blob) = self.backend.get(&self.key) else {
            return HistoryLog::new();
        };

        match serde_json::from_str::<Option<HistoryLog>>(&blob) {
            Ok(log) => log.unwrap_or_default(),
            Err(e) => {
                warn!("History under '{}' is corrupted, starting fresh: {}", self.key, e);
                HistoryLog::new()
            }
        }
    }

    fn save(&mut self, log: &[RoundOutcome]) -> Result<()> {
        let json = serde_json::to_string(log)?;
        self.backend.set(&self.key, &json)
    }

    /// Appends a round stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated log cannot be persisted.
    pub fn append(&mut self, outcome: Outcome) -> Result<RoundOutcome> {
        self.append_at(outcome, Utc::now().timestamp_millis())
    }

    /// Appends a round with an explicit timestamp (epoch milliseconds).
    ///
    /// # Errors
    ///
    /// Returns an error if the updated log cannot be persisted.
    pub fn append_at(&mut self, outcome: Outcome, timestamp: i64) -> Result<RoundOutcome> {
        let mut log = self.load();
        let round = RoundOutcome::new(outcome, timestamp);
        log.push(round);
        self.save(&log)?;

        debug!("Recorded {} (round {})", outcome, log.len());
        Ok(round)
    }

    /// Wipes the history once `confirmation` agrees.
    ///
    /// Returns `false` and leaves the log untouched when declined.
    ///
    /// # Errors
    ///
    /// Returns an error if the empty log cannot be persisted.
    pub fn clear(&mut self, confirmation: &impl Confirmation) -> Result<bool> {
        if !confirmation.confirm(CLEAR_PROMPT) {
            debug!("Clear declined");
            return Ok(false);
        }

        self.save(&[])?;
        debug!("History cleared");
        Ok(true)
    }

    /// Removes the most recent round, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated log cannot be persisted.
    pub fn remove_last(&mut self) -> Result<Option<RoundOutcome>> {
        let mut log = self.load();
        let removed = log.pop();
        self.save(&log)?;

        if let Some(round) = &removed {
            debug!("Removed last round ({})", round.result);
        }
        Ok(removed)
    }
}

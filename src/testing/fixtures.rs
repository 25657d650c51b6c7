//! Test fixtures for building reproducible histories.

use std::path::Path;
use tempfile::TempDir;

use crate::history::{HistoryLog, Outcome, RoundOutcome, DEFAULT_STORAGE_KEY};

/// Builds a log from outcome codes, e.g. `"DDTI"`.
///
/// Timestamps are the 1-based position of each round.
///
/// # Panics
///
/// Panics on any character other than `D`, `T` or `I`.
#[must_use]
pub fn log_from_codes(codes: &str) -> HistoryLog {
    codes
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let result = match c {
                'D' => Outcome::Dragon,
                'T' => Outcome::Tiger,
                'I' => Outcome::Tie,
                other => panic!("unknown outcome code '{}'", other),
            };
            RoundOutcome::new(result, i as i64 + 1)
        })
        .collect()
}

/// A temporary data directory, cleaned up when dropped.
pub struct TestFixture {
    temp_dir: TempDir,
}

impl TestFixture {
    /// Create an empty data directory.
    ///
    /// # Panics
    ///
    /// Panics if temporary directory creation fails.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Create a data directory whose history file holds `codes`.
    ///
    /// # Panics
    ///
    /// Panics if the history file cannot be written.
    #[must_use]
    pub fn with_history(codes: &str) -> Self {
        let fixture = Self::empty();
        let json = serde_json::to_string(&log_from_codes(codes)).expect("serialize history");
        std::fs::write(fixture.history_path(), json).expect("Failed to write history");
        fixture
    }

    /// Create a data directory with a raw, possibly invalid, history file.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    #[must_use]
    pub fn with_raw_history(content: &str) -> Self {
        let fixture = Self::empty();
        std::fs::write(fixture.history_path(), content).expect("Failed to write history");
        fixture
    }

    /// Path of the data directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the default history file.
    #[must_use]
    pub fn history_path(&self) -> std::path::PathBuf {
        self.path().join(format!("{}.json", DEFAULT_STORAGE_KEY))
    }
}

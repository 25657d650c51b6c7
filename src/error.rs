//! Custom error types for the tracker.
//!
//! Corrupt or missing history is never an error (it degrades to an empty
//! log); these variants cover configuration, input parsing and writes.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Failed to load configuration
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {reason}")]
    InvalidConfig { field: String, reason: String },

    // =========================================================================
    // Storage Errors
    // =========================================================================
    /// Persisting a value failed
    #[error("Storage error for key '{key}': {message}")]
    Storage { key: String, message: String },

    // =========================================================================
    // Input Errors
    // =========================================================================
    /// User supplied something that is not a round outcome
    #[error("Invalid outcome '{input}' (expected dragon/d, tiger/t or tie/i)")]
    InvalidOutcome { input: String },

    // =========================================================================
    // Wrapped Errors
    // =========================================================================
    /// IO error wrapper
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON error wrapper
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TrackerError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
        }
    }

    /// Create a configuration error with path
    pub fn config_with_path(message: impl Into<String>, path: PathBuf) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a storage error
    pub fn storage(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Storage {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Get error code for exit status
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidOutcome { .. } => 2,
            Self::Storage { .. } | Self::Io(_) => 3,
            Self::Config { .. } | Self::InvalidConfig { .. } => 7,
            _ => 1,
        }
    }
}

/// Type alias for tracker results
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Extension trait for converting foreign errors to [`TrackerError`]
pub trait IntoTrackerError<T> {
    fn into_tracker_config(self) -> Result<T>;
    fn into_tracker_storage(self, key: &str) -> Result<T>;
}

impl<T, E: Into<anyhow::Error>> IntoTrackerError<T> for std::result::Result<T, E> {
    fn into_tracker_config(self) -> Result<T> {
        self.map_err(|e| TrackerError::config(e.into().to_string()))
    }

    fn into_tracker_storage(self, key: &str) -> Result<T> {
        self.map_err(|e| TrackerError::storage(key, e.into().to_string()))
    }
}

//! dvt - Dragon/Tiger round tracker
//!
//! Records the outcome of each Dragon/Tiger round, summarises the history,
//! and makes a trend-based guess at the next round.
//!
//! # Architecture
//!
//! - [`history`] - Outcome types and the append-only history store
//! - [`stats`] - Frequency counts and the trailing streak
//! - [`predictor`] - Fixed-weight rules that produce the next-round guess
//! - [`view`] - Pure display models built from the history
//! - [`render`] - Writes display models to terminal targets
//! - [`config`] - Settings loading and validation
//! - [`error`] - Custom error types and handling
//! - [`testing`] - Test doubles for the store and confirmation collaborators
//!
//! # Example
//!
//! ```rust
//! use dvt::history::{AssumeYes, HistoryStore, MemoryStore, Outcome};
//! use dvt::predictor::{score_prediction, Guess};
//!
//! let mut store = HistoryStore::new(MemoryStore::new());
//! store.append(Outcome::Dragon)?;
//! store.append(Outcome::Dragon)?;
//! store.append(Outcome::Dragon)?;
//!
//! let prediction = score_prediction(&store.load());
//! assert_ne!(prediction.guess, Guess::InsufficientData);
//!
//! store.clear(&AssumeYes)?;
//! assert!(store.load().is_empty());
//! # Ok::<(), dvt::TrackerError>(())
//! ```

pub mod config;
pub mod error;
pub mod history;
pub mod predictor;
pub mod render;
pub mod stats;
pub mod testing;
pub mod view;

// Re-export commonly used types
pub use error::{IntoTrackerError, Result, TrackerError};

pub use config::TrackerConfig;

pub use history::{
    Confirmation, FileStore, HistoryLog, HistoryStore, KeyValueStore, MemoryStore, Outcome,
    RoundOutcome,
};

pub use predictor::{score_prediction, Guess, Prediction};
pub use render::{Renderer, Surface, Target};
pub use stats::{count_stats, streak_info, RoundStats, Streak};
pub use view::{PredictionView, StatsView};

// TestFixture is only available in test builds
#[cfg(test)]
pub use testing::TestFixture;

//! Round outcome types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TrackerError;

/// Result of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Dragon side won.
    #[serde(rename = "D")]
    Dragon,
    /// Tiger side won.
    #[serde(rename = "T")]
    Tiger,
    /// Neither side won.
    #[serde(rename = "I")]
    Tie,
}

impl Outcome {
    /// Returns all outcomes in display order.
    #[must_use]
    pub fn all() -> [Outcome; 3] {
        [Self::Dragon, Self::Tiger, Self::Tie]
    }

    /// Single-character code used in badges and persisted data.
    #[must_use]
    pub fn code(&self) -> char {
        match self {
            Self::Dragon => 'D',
            Self::Tiger => 'T',
            Self::Tie => 'I',
        }
    }

    /// Human-readable label with the side's emoji.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dragon => "🐉 Dragon",
            Self::Tiger => "🐯 Tiger",
            Self::Tie => "🤝 Tie",
        }
    }

    /// The other side of the table. Ties have no opposite.
    #[must_use]
    pub fn opposite(&self) -> Option<Outcome> {
        match self {
            Self::Dragon => Some(Self::Tiger),
            Self::Tiger => Some(Self::Dragon),
            Self::Tie => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dragon => write!(f, "dragon"),
            Self::Tiger => write!(f, "tiger"),
            Self::Tie => write!(f, "tie"),
        }
    }
}

impl FromStr for Outcome {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "d" | "dragon" => Ok(Self::Dragon),
            "t" | "tiger" => Ok(Self::Tiger),
            "i" | "tie" => Ok(Self::Tie),
            _ => Err(TrackerError::InvalidOutcome {
                input: s.to_string(),
            }),
        }
    }
}

/// A recorded round: the outcome plus when it was entered.
///
/// Serialized as `{"r": "D", "t": 1700000000000}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// Outcome of the round.
    #[serde(rename = "r")]
    pub result: Outcome,
    /// Entry time in epoch milliseconds. Informational only.
    #[serde(rename = "t")]
    pub timestamp: i64,
}

impl RoundOutcome {
    /// Creates a round record.
    #[must_use]
    pub fn new(result: Outcome, timestamp: i64) -> Self {
        Self { result, timestamp }
    }
}

/// Chronologically ordered round records, oldest first.
pub type HistoryLog = Vec<RoundOutcome>;

/// Returns the outcomes of the last `n` rounds, oldest first.
///
/// Shorter logs yield a shorter window; nothing is padded.
#[must_use]
pub fn last_n(log: &[RoundOutcome], n: usize) -> Vec<Outcome> {
    let start = log.len().saturating_sub(n);
    log[start..].iter().map(|round| round.result).collect()
}

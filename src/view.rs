//! Display models computed from the history.
//!
//! Everything here is a pure projection of the log; writing the result
//! somewhere is the job of [`crate::render`].

use serde::Serialize;

use crate::history::{last_n, Outcome, RoundOutcome};
use crate::predictor::{score_prediction, Guess, Prediction};
use crate::stats::{count_stats, streak_info, RoundStats, Streak};

/// Outcomes of the last `limit` rounds, oldest first.
#[must_use]
pub fn recent_badges(log: &[RoundOutcome], limit: usize) -> Vec<Outcome> {
    last_n(log, limit)
}

/// One line of the stats block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatRow {
    pub outcome: Outcome,
    pub count: usize,
    pub percentage: f64,
}

/// Stats summary block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsView {
    pub total: usize,
    pub rows: Vec<StatRow>,
    pub streak: Streak,
}

impl StatsView {
    #[must_use]
    pub fn from_log(log: &[RoundOutcome]) -> Self {
        let stats: RoundStats = count_stats(log);
        let rows = Outcome::all()
            .into_iter()
            .map(|outcome| StatRow {
                outcome,
                count: stats.count(outcome),
                percentage: stats.percentage(outcome),
            })
            .collect();

        Self {
            total: stats.total,
            rows,
            streak: streak_info(log),
        }
    }

    /// Streak as `<code> × <length>`, or `- × 0` with no history.
    #[must_use]
    pub fn streak_label(&self) -> String {
        let code = self
            .streak
            .last
            .map(|o| o.code().to_string())
            .unwrap_or_else(|| "-".to_string());
        format!("{} × {}", code, self.streak.length)
    }
}

/// Prediction block: guess, confidence, reasons and the recent strip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionView {
    pub label: String,
    #[serde(flatten)]
    pub prediction: Prediction,
    pub recent: Vec<Outcome>,
}

impl PredictionView {
    #[must_use]
    pub fn from_log(log: &[RoundOutcome], recent_limit: usize) -> Self {
        let prediction = score_prediction(log);
        Self {
            label: prediction.guess.label().to_string(),
            prediction,
            recent: recent_badges(log, recent_limit),
        }
    }

    #[must_use]
    pub fn guess(&self) -> Guess {
        self.prediction.guess
    }
}

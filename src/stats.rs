//! Frequency and streak aggregation over a round history.

use serde::Serialize;

use crate::history::{Outcome, RoundOutcome};

/// Outcome counts over the whole log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RoundStats {
    pub total: usize,
    pub dragon: usize,
    pub tiger: usize,
    pub tie: usize,
}

impl RoundStats {
    /// Number of rounds that ended with `outcome`.
    #[must_use]
    pub fn count(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::Dragon => self.dragon,
            Outcome::Tiger => self.tiger,
            Outcome::Tie => self.tie,
        }
    }

    /// Share of rounds that ended with `outcome`, in percent.
    ///
    /// Returns 0.0 for an empty log.
    #[must_use]
    pub fn percentage(&self, outcome: Outcome) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(outcome) as f64 / self.total as f64 * 100.0
    }
}

/// Trailing run of identical outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Streak {
    /// Most recent outcome, `None` for an empty log.
    pub last: Option<Outcome>,
    /// How many trailing rounds equal `last`.
    pub length: usize,
}

impl Streak {
    /// True when the streak is on `outcome` and at least `min` long.
    #[must_use]
    pub fn is_run_of(&self, outcome: Outcome, min: usize) -> bool {
        self.last == Some(outcome) && self.length >= min
    }
}

/// Counts every outcome in the log.
#[must_use]
pub fn count_stats(log: &[RoundOutcome]) -> RoundStats {
    log.iter().fold(
        RoundStats {
            total: log.len(),
            ..RoundStats::default()
        },
        |mut stats, round| {
            match round.result {
                Outcome::Dragon => stats.dragon += 1,
                Outcome::Tiger => stats.tiger += 1,
                Outcome::Tie => stats.tie += 1,
            }
            stats
        },
    )
}

/// Finds the outcome of the last round and how long it has repeated.
#[must_use]
pub fn streak_info(log: &[RoundOutcome]) -> Streak {
    let Some(last) = log.last().map(|round| round.result) else {
        return Streak::default();
    };

    let length = log
        .iter()
        .rev()
        .take_while(|round| round.result == last)
        .count();

    Streak {
        last: Some(last),
        length,
    }
}

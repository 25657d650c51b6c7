//! Trend-based next-round guessing.
//!
//! The predictor scores Dragon and Tiger with a handful of fixed-weight rules
//! over the tail of the history and picks the higher-scoring side. There is
//! no learning and no randomness: the same log always yields the same
//! [`Prediction`].
//!
//! # Rules
//!
//! | Rule | Weight | Fires when |
//! |------|--------|------------|
//! | Medium window | 2 | One side strictly leads the last 10 rounds |
//! | Short window | 2 | One side strictly leads the last 5 rounds |
//! | Streak reversal | 2 | The trailing streak is 3+ long (scores the *other* side) |
//! | Alternation | 2 | The last 4 rounds alternate pairwise (scores the side opposite the last round) |
//!
//! Equal scores resolve to Tiger. Confidence is
//! `min(85, 50 + 10 * |dragon - tiger|)`, so it reads 50 at equal scores even
//! though a side is still named.
//!
//! # Example
//!
//! ```rust
//! use dvt::history::{Outcome, RoundOutcome};
//! use dvt::predictor::{score_prediction, Guess};
//!
//! let log: Vec<RoundOutcome> = [Outcome::Dragon, Outcome::Tiger, Outcome::Dragon, Outcome::Tiger]
//!     .into_iter()
//!     .enumerate()
//!     .map(|(i, o)| RoundOutcome::new(o, i as i64))
//!     .collect();
//!
//! let prediction = score_prediction(&log);
//! assert_eq!(prediction.guess, Guess::Dragon);
//! assert_eq!(prediction.confidence, 70);
//! ```

use std::fmt;

use serde::Serialize;

use crate::history::{last_n, Outcome, RoundOutcome};
use crate::stats::streak_info;

/// Rounds required before any guess is made.
pub const MIN_ROUNDS: usize = 3;

/// Size of the medium trailing window.
pub const MEDIUM_WINDOW: usize = 10;

/// Size of the short trailing window.
pub const SHORT_WINDOW: usize = 5;

/// Streak length at which a reversal is expected.
pub const STREAK_THRESHOLD: usize = 3;

/// Number of trailing rounds checked for alternation.
pub const ALTERNATION_WINDOW: usize = 4;

/// Score added by every rule that fires.
pub const RULE_WEIGHT: u32 = 2;

/// Confidence reported whenever a guess is made.
pub const BASE_CONFIDENCE: u8 = 50;

/// Confidence added per point of score gap.
pub const CONFIDENCE_PER_POINT: u32 = 10;

/// Upper bound on reported confidence.
pub const MAX_CONFIDENCE: u8 = 85;

/// Reason given when the log is too short.
pub const INSUFFICIENT_DATA_REASON: &str = "Add results with `dvt add` to generate a prediction.";

/// Next-round guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Guess {
    Dragon,
    Tiger,
    /// Fewer than [`MIN_ROUNDS`] rounds recorded.
    InsufficientData,
}

impl Guess {
    /// The guessed outcome, if any.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Self::Dragon => Some(Outcome::Dragon),
            Self::Tiger => Some(Outcome::Tiger),
            Self::InsufficientData => None,
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dragon => Outcome::Dragon.label(),
            Self::Tiger => Outcome::Tiger.label(),
            Self::InsufficientData => "Need more data (Add at least 3 rounds)",
        }
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dragon => write!(f, "dragon"),
            Self::Tiger => write!(f, "tiger"),
            Self::InsufficientData => write!(f, "insufficient-data"),
        }
    }
}

/// Outcome of [`score_prediction`]. Recomputed on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prediction {
    pub guess: Guess,
    /// Percentage in `0..=MAX_CONFIDENCE`.
    pub confidence: u8,
    /// Human-readable justifications, in rule order.
    pub reasons: Vec<String>,
    pub score_dragon: u32,
    pub score_tiger: u32,
}

impl Prediction {
    fn insufficient_data() -> Self {
        Self {
            guess: Guess::InsufficientData,
            confidence: 0,
            reasons: vec![INSUFFICIENT_DATA_REASON.to_string()],
            score_dragon: 0,
            score_tiger: 0,
        }
    }
}

/// Running Dragon/Tiger tally plus the reasons collected so far.
#[derive(Debug, Default)]
struct Scoreboard {
    dragon: u32,
    tiger: u32,
    reasons: Vec<String>,
}

impl Scoreboard {
    fn award(&mut self, side: Outcome) {
        match side {
            Outcome::Dragon => self.dragon += RULE_WEIGHT,
            Outcome::Tiger => self.tiger += RULE_WEIGHT,
            Outcome::Tie => {}
        }
    }

    fn note(&mut self, reason: &str) {
        self.reasons.push(reason.to_string());
    }

    fn gap(&self) -> u32 {
        self.dragon.abs_diff(self.tiger)
    }
}

/// Side that strictly leads `window`, ignoring ties.
fn majority(window: &[Outcome]) -> Option<Outcome> {
    let dragon = window.iter().filter(|o| **o == Outcome::Dragon).count();
    let tiger = window.iter().filter(|o| **o == Outcome::Tiger).count();

    match dragon.cmp(&tiger) {
        std::cmp::Ordering::Greater => Some(Outcome::Dragon),
        std::cmp::Ordering::Less => Some(Outcome::Tiger),
        std::cmp::Ordering::Equal => None,
    }
}

fn score_medium_window(log: &[RoundOutcome], board: &mut Scoreboard) {
    match majority(&last_n(log, MEDIUM_WINDOW)) {
        Some(Outcome::Dragon) => {
            board.award(Outcome::Dragon);
            board.note("Last 10 rounds: Dragon more frequent");
        }
        Some(Outcome::Tiger) => {
            board.award(Outcome::Tiger);
            board.note("Last 10 rounds: Tiger more frequent");
        }
        _ => {}
    }
}

fn score_short_window(log: &[RoundOutcome], board: &mut Scoreboard) {
    match majority(&last_n(log, SHORT_WINDOW)) {
        Some(Outcome::Dragon) => {
            board.award(Outcome::Dragon);
            board.note("Last 5 rounds: Dragon stronger");
        }
        Some(Outcome::Tiger) => {
            board.award(Outcome::Tiger);
            board.note("Last 5 rounds: Tiger stronger");
        }
        _ => {}
    }
}

fn score_streak_reversal(log: &[RoundOutcome], board: &mut Scoreboard) {
    let streak = streak_info(log);

    if streak.is_run_of(Outcome::Dragon, STREAK_THRESHOLD) {
        board.award(Outcome::Tiger);
        board.note("Dragon streak is long → possible switch");
    }
    if streak.is_run_of(Outcome::Tiger, STREAK_THRESHOLD) {
        board.award(Outcome::Dragon);
        board.note("Tiger streak is long → possible switch");
    }
}

/// True when every adjacent pair in the last four rounds differs.
///
/// This is pairwise alternation, not distinctness: `D T D T` qualifies.
fn is_alternating(log: &[RoundOutcome]) -> bool {
    let window = last_n(log, ALTERNATION_WINDOW);
    window.len() == ALTERNATION_WINDOW && window.windows(2).all(|pair| pair[0] != pair[1])
}

fn score_alternation(log: &[RoundOutcome], board: &mut Scoreboard) {
    if !is_alternating(log) {
        return;
    }

    // A trailing tie has no opposite side; the pattern is still reported.
    if let Some(side) = log.last().and_then(|round| round.result.opposite()) {
        board.award(side);
    }
    board.note("Alternating pattern detected in last 4");
}

/// Scores the history and guesses the next round.
#[must_use]
pub fn score_prediction(log: &[RoundOutcome]) -> Prediction {
    if log.len() < MIN_ROUNDS {
        return Prediction::insufficient_data();
    }

    let mut board = Scoreboard::default();
    score_medium_window(log, &mut board);
    score_short_window(log, &mut board);
    score_streak_reversal(log, &mut board);
    score_alternation(log, &mut board);

    let guess = if board.tiger >= board.dragon {
        Guess::Tiger
    } else {
        Guess::Dragon
    };

    let confidence = (u32::from(BASE_CONFIDENCE) + CONFIDENCE_PER_POINT * board.gap())
        .min(u32::from(MAX_CONFIDENCE)) as u8;

    Prediction {
        guess,
        confidence,
        reasons: board.reasons,
        score_dragon: board.dragon,
        score_tiger: board.tiger,
    }
}

//! Terminal rendering of the display models.
//!
//! A [`Surface`] hands out a writer per [`Target`]. Targets it does not
//! provide are skipped silently.

use std::collections::{HashMap, HashSet};
use std::io::{self, Write};

use colored::Colorize;

use crate::config::TrackerConfig;
use crate::history::{Outcome, RoundOutcome};
use crate::view::{recent_badges, PredictionView, StatsView};

/// Message shown in a badge strip when nothing has been recorded.
pub const EMPTY_HISTORY: &str = "No history yet.";

/// Independent display regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    History,
    Stats,
    Prediction,
}

impl Target {
    #[must_use]
    pub fn all() -> [Target; 3] {
        [Self::History, Self::Stats, Self::Prediction]
    }
}

/// Somewhere the render targets can be written to.
pub trait Surface {
    /// Writer for `target`, or `None` if this surface does not show it.
    fn target(&mut self, target: Target) -> Option<&mut dyn Write>;
}

/// Writes the enabled targets to a single stream, one after another.
pub struct StreamSurface<W> {
    out: W,
    enabled: HashSet<Target>,
}

impl<W: Write> StreamSurface<W> {
    /// A surface showing every target.
    pub fn new(out: W) -> Self {
        Self {
            out,
            enabled: Target::all().into_iter().collect(),
        }
    }

    /// A surface showing only `targets`.
    pub fn only(out: W, targets: &[Target]) -> Self {
        Self {
            out,
            enabled: targets.iter().copied().collect(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Surface for StreamSurface<W> {
    fn target(&mut self, target: Target) -> Option<&mut dyn Write> {
        if self.enabled.contains(&target) {
            Some(&mut self.out as &mut dyn Write)
        } else {
            None
        }
    }
}

/// Collects each target into its own buffer.
#[derive(Debug, Default)]
pub struct BufferSurface {
    buffers: HashMap<Target, Vec<u8>>,
}

impl BufferSurface {
    /// A surface with no targets at all.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty buffer for `target`.
    #[must_use]
    pub fn with_target(mut self, target: Target) -> Self {
        self.buffers.insert(target, Vec::new());
        self
    }

    /// Text written to `target`, or `None` if it is not provided.
    #[must_use]
    pub fn contents(&self, target: Target) -> Option<String> {
        self.buffers
            .get(&target)
            .map(|buf| String::from_utf8_lossy(buf).into_owned())
    }
}

impl Surface for BufferSurface {
    fn target(&mut self, target: Target) -> Option<&mut dyn Write> {
        self.buffers
            .get_mut(&target)
            .map(|buf| buf as &mut dyn Write)
    }
}

/// Formats display models as plain or coloured text.
#[derive(Debug, Clone)]
pub struct Renderer {
    history_limit: usize,
    recent_limit: usize,
    color: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::from_config(&TrackerConfig::default())
    }
}

impl Renderer {
    #[must_use]
    pub fn from_config(config: &TrackerConfig) -> Self {
        Self {
            history_limit: config.history_limit,
            recent_limit: config.recent_limit,
            color: config.color,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn badge(&self, outcome: Outcome) -> String {
        let code = outcome.code().to_string();
        if !self.color {
            return code;
        }
        let code = code.as_str();
        match outcome {
            Outcome::Dragon => code.red().bold().to_string(),
            Outcome::Tiger => code.yellow().bold().to_string(),
            Outcome::Tie => code.green().bold().to_string(),
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            text.cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn muted(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    fn write_strip(&self, out: &mut dyn Write, badges: &[Outcome]) -> io::Result<()> {
        if badges.is_empty() {
            return writeln!(out, "{}", self.muted(EMPTY_HISTORY));
        }
        let strip: Vec<String> = badges.iter().map(|o| self.badge(*o)).collect();
        writeln!(out, "{}", strip.join(" "))
    }

    /// Renders the recent-history badge strip.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the target fails.
    pub fn render_history(
        &self,
        log: &[RoundOutcome],
        surface: &mut dyn Surface,
    ) -> io::Result<()> {
        let Some(out) = surface.target(Target::History) else {
            return Ok(());
        };

        writeln!(
            out,
            "{}",
            self.heading(&format!("History (last {})", self.history_limit))
        )?;
        self.write_strip(out, &recent_badges(log, self.history_limit))?;
        writeln!(out)
    }

    /// Renders the stats summary block.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the target fails.
    pub fn render_stats(&self, log: &[RoundOutcome], surface: &mut dyn Surface) -> io::Result<()> {
        let Some(out) = surface.target(Target::Stats) else {
            return Ok(());
        };

        let view = StatsView::from_log(log);
        writeln!(out, "{}", self.heading("Stats"))?;
        writeln!(out, "Total: {}", view.total)?;
        for row in &view.rows {
            writeln!(
                out,
                "{}: {} ({:.1}%)",
                row.outcome.label(),
                row.count,
                row.percentage
            )?;
        }
        writeln!(out, "Current streak: {}", view.streak_label())?;
        writeln!(out)
    }

    /// Renders the prediction block.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the target fails.
    pub fn render_prediction(
        &self,
        log: &[RoundOutcome],
        surface: &mut dyn Surface,
    ) -> io::Result<()> {
        let Some(out) = surface.target(Target::Prediction) else {
            return Ok(());
        };

        let view = PredictionView::from_log(log, self.recent_limit);
        writeln!(out, "{}", self.heading("Prediction"))?;
        writeln!(out, "Guess: {}", view.label)?;
        writeln!(
            out,
            "Confidence: {}% (trend-based)",
            view.prediction.confidence
        )?;
        writeln!(out, "Reasons:")?;
        for reason in &view.prediction.reasons {
            writeln!(out, "  - {}", reason)?;
        }
        write!(out, "Last {}: ", self.recent_limit)?;
        self.write_strip(out, &view.recent)?;
        writeln!(out)
    }

    /// Renders every target the surface provides.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to any target fails.
    pub fn render_all(&self, log: &[RoundOutcome], surface: &mut dyn Surface) -> io::Result<()> {
        self.render_history(log, surface)?;
        self.render_stats(log, surface)?;
        self.render_prediction(log, surface)
    }
}

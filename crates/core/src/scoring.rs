//! Scoring module - classic line-clear points and level progression
//!
//! Points for a clear are `LINE_SCORES[lines] * level`, with the level
//! starting at 1. Every `LINES_PER_LEVEL` cleared lines promote one level;
//! the remainder carries over.

use crate::types::{LINES_PER_LEVEL, LINE_SCORES, STARTING_LEVEL};

/// Base points for clearing `lines` rows in one event.
///
/// More than four rows cannot happen with the catalog; it scores as four.
pub fn line_clear_points(lines: usize) -> u32 {
    LINE_SCORES[lines.min(LINE_SCORES.len() - 1)]
}

/// What a single line-clear event changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreEvent {
    pub lines: u32,
    pub points: u32,
    pub levels_gained: u32,
}

/// Score, level and line counters for one game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTracker {
    score: u32,
    level: u32,
    lines_since_level_up: u32,
    total_lines: u32,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self {
            score: 0,
            level: STARTING_LEVEL,
            lines_since_level_up: 0,
            total_lines: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Lines counted toward the next level, always below `LINES_PER_LEVEL`
    pub fn lines_since_level_up(&self) -> u32 {
        self.lines_since_level_up
    }

    /// Lines cleared over the whole session
    pub fn total_lines(&self) -> u32 {
        self.total_lines
    }

    /// Apply a line-clear event. Zero lines is a no-op.
    pub fn on_lines_cleared(&mut self, lines: usize) -> ScoreEvent {
        if lines == 0 {
            return ScoreEvent::default();
        }

        // Points use the level in effect before this clear promotes it.
        let points = line_clear_points(lines).saturating_mul(self.level);
        self.score = self.score.saturating_add(points);

        let lines = lines as u32;
        self.total_lines = self.total_lines.saturating_add(lines);
        self.lines_since_level_up += lines;

        let mut levels_gained = 0;
        while self.lines_since_level_up >= LINES_PER_LEVEL {
            self.level += 1;
            self.lines_since_level_up -= LINES_PER_LEVEL;
            levels_gained += 1;
        }

        if levels_gained > 0 {
            log::debug!("level up: now level {}", self.level);
        }

        ScoreEvent {
            lines,
            points,
            levels_gained,
        }
    }
}

impl Default for ScoreTracker {
    fn default() -> Self {
        Self::new()
    }
}

//! Scoring module - line-clear points and the running/best score
//!
//! Clearing `k` lines with one placement is worth `100 * k * k`, so bigger
//! simultaneous clears are rewarded quadratically. Rows and columns count
//! alike.

use block_grid_types::LINE_BASE_POINTS;

/// Points for clearing `lines` lines with a single placement.
///
/// Returns 0 for 0 lines. Saturates instead of overflowing.
pub fn points_for(lines: u32) -> u32 {
    lines
        .saturating_mul(lines)
        .saturating_mul(LINE_BASE_POINTS)
}

/// Current score plus the best score seen in this process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scoreboard {
    score: u32,
    high_score: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a known best score (e.g. carried over by the caller)
    pub fn with_high_score(high_score: u32) -> Self {
        Self {
            score: 0,
            high_score,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Add points and raise the high score if it was beaten
    pub fn apply_points(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
        self.high_score = self.high_score.max(self.score);
    }

    /// Zero the score for a new game; the high score is kept
    pub fn reset(&mut self) {
        self.score = 0;
    }
}

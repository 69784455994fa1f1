//! Scoring module - fixed points per fruit
//!
//! Score only ever grows: no decay, no penalties.

use crate::types::FRUIT_SCORE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreTracker {
    score: u32,
    increment: u32,
    fruits: u32,
}

impl ScoreTracker {
    pub fn new(increment: u32) -> Self {
        Self {
            score: 0,
            increment,
            fruits: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn fruits_eaten(&self) -> u32 {
        self.fruits
    }

    /// Add the fixed increment, returning the new score.
    pub fn on_fruit_consumed(&mut self) -> u32 {
        self.score = self.score.saturating_add(self.increment);
        self.fruits = self.fruits.saturating_add(1);
        self.score
    }
}

impl Default for ScoreTracker {
    fn default() -> Self {
        Self::new(FRUIT_SCORE)
    }
}

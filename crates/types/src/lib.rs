//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Geometry
//!
//! The board is a square N×N grid. Cells are addressed as `(row, col)`:
//!
//! - **row**: 0 at the top, grows downwards
//! - **col**: 0 at the left, grows to the right
//!
//! Coordinates are signed so that a candidate head one step outside the board
//! (row or column `-1`) can be represented and rejected.
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_INTERVAL_MS` | 100 | Tick interval at session start |
//! | `SPEED_STEP_MS` | 10 | Interval decrease per eaten fruit |
//! | `MIN_INTERVAL_MS` | 5 | Interval floor |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Cell, Direction, DEFAULT_BOARD_SIZE};
//!
//! let head = Cell::new(10, 14);
//! assert_eq!(head.step(Direction::Right), Cell::new(10, 15));
//! assert_eq!(head.step(Direction::Up), Cell::new(9, 14));
//!
//! assert!(Direction::Left.is_opposite(Direction::Right));
//! assert_eq!(Direction::from_str("DOWN"), Some(Direction::Down));
//!
//! assert_eq!(DEFAULT_BOARD_SIZE, 40);
//! ```

/// Default board side length (40×40 cells)
pub const DEFAULT_BOARD_SIZE: u16 = 40;

/// Largest supported board side length
pub const MAX_BOARD_SIZE: u16 = 1024;

/// Tick interval at session start (100ms)
pub const INITIAL_INTERVAL_MS: u32 = 100;

/// Interval decrease applied on every eaten fruit (10ms)
pub const SPEED_STEP_MS: u32 = 10;

/// The interval never drops below this value (5ms)
pub const MIN_INTERVAL_MS: u32 = 5;

/// Points awarded per eaten fruit
pub const FRUIT_SCORE: u32 = 100;

/// Row of the default starting snake
pub const INITIAL_SNAKE_ROW: i16 = 10;

/// Column of the default starting head; the body trails to the left
pub const INITIAL_HEAD_COL: i16 = 14;

/// Number of cells in the default starting snake
pub const INITIAL_SNAKE_LEN: i16 = 8;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_timing_defaults() {
        assert_eq!(INITIAL_INTERVAL_MS, 100);
        assert_eq!(SPEED_STEP_MS, 10);
        assert_eq!(MIN_INTERVAL_MS, 5);
        assert_eq!(FRUIT_SCORE, 100);
    }

    #[test]
    fn default_snake_fits_default_board() {
        let tail_col = INITIAL_HEAD_COL - (INITIAL_SNAKE_LEN - 1);
        assert!(tail_col >= 0);
        assert!((INITIAL_HEAD_COL as u16) < DEFAULT_BOARD_SIZE);
        assert!((INITIAL_SNAKE_ROW as u16) < DEFAULT_BOARD_SIZE);
    }

    #[test]
    fn opposite_pairs() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert!(d.is_opposite(d.opposite()));
            assert!(!d.is_opposite(d));
        }
        assert!(!Direction::Up.is_opposite(Direction::Left));
    }

    #[test]
    fn deltas_are_unit_steps() {
        for d in Direction::ALL {
            let (dr, dc) = d.delta();
            assert_eq!(dr.abs() + dc.abs(), 1);
        }
    }
}

/// A board position, `(row, col)`, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub row: i16,
    pub col: i16,
}

impl Cell {
    pub const fn new(row: i16, col: i16) -> Self {
        Self { row, col }
    }

    /// The neighbouring cell one step in `direction` (may lie off the board)
    pub fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self {
            row: self.row.saturating_add(dr),
            col: self.col.saturating_add(dc),
        }
    }

    /// Check if the cell lies on an `size`×`size` board
    pub fn in_bounds(self, size: u16) -> bool {
        let n = size as i32;
        (0..n).contains(&(self.row as i32)) && (0..n).contains(&(self.col as i32))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i16, i16)> for Cell {
    fn from((row, col): (i16, i16)) -> Self {
        Self { row, col }
    }
}

/// Movement directions
///
/// Each direction maps to a unit delta on `(row, col)`:
/// - **Up**: `(-1, 0)`
/// - **Down**: `(+1, 0)`
/// - **Left**: `(0, -1)`
/// - **Right**: `(0, +1)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit `(row, col)` delta
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The exactly reversed direction
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Check whether `other` would reverse this direction
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "up" | "u", "down" | "d",
    /// "left" | "l", "right" | "r".
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("left"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("R"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Classification of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceResult {
    /// The candidate head hit a wall or the body; nothing was committed
    Blocked,
    /// The candidate head landed on the fruit; the snake grew by one cell
    Grew,
    /// Plain move; head prepended, tail dropped
    Moved,
}

impl AdvanceResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdvanceResult::Blocked => "blocked",
            AdvanceResult::Grew => "grew",
            AdvanceResult::Moved => "moved",
        }
    }
}

/// Lifecycle of a session
///
/// `GameOver` is absorbing: no transition leads out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Idle,
    Running,
    GameOver,
}

impl GameStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, GameStatus::Running)
    }

    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::GameOver)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Idle => "idle",
            GameStatus::Running => "running",
            GameStatus::GameOver => "game_over",
        }
    }
}

//! Session configuration.
//!
//! Defaults reproduce the classic layout: a 40×40 board, an 8-cell snake on
//! row 10 heading right, a 100ms tick that speeds up by 10ms per fruit down to 5ms.

use std::collections::HashSet;

use thiserror::Error;

use crate::types::{
    Cell, Direction, DEFAULT_BOARD_SIZE, FRUIT_SCORE, INITIAL_HEAD_COL, INITIAL_INTERVAL_MS,
    INITIAL_SNAKE_LEN, INITIAL_SNAKE_ROW, MAX_BOARD_SIZE, MIN_INTERVAL_MS, SPEED_STEP_MS,
};

/// Reasons a configuration cannot start a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size {0} is outside 1..={}", MAX_BOARD_SIZE)]
    BoardSize(u16),
    #[error("snake body is empty")]
    EmptySnake,
    #[error("cell {cell} lies outside the {size}x{size} board")]
    OutOfBounds { cell: Cell, size: u16 },
    #[error("cell {0} appears more than once in the snake body")]
    DuplicateCell(Cell),
    #[error("tick interval must be positive")]
    ZeroInterval,
    #[error("minimum interval {min_ms}ms exceeds initial interval {initial_ms}ms")]
    MinAboveInitial { min_ms: u32, initial_ms: u32 },
}

/// Where freshly spawned fruit may land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FruitPlacement {
    /// Anywhere on the board, snake cells included
    #[default]
    Anywhere,
    /// Only on cells not covered by the snake (falls back to anywhere when full)
    AvoidSnake,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: u16,
    /// Head first.
    pub initial_snake: Vec<Cell>,
    pub initial_direction: Direction,
    /// Fixed first fruit; a random one is spawned when `None`.
    pub initial_fruit: Option<Cell>,
    pub initial_interval_ms: u32,
    pub speed_step_ms: u32,
    pub min_interval_ms: u32,
    pub fruit_score: u32,
    pub fruit_placement: FruitPlacement,
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        let initial_snake = (0..INITIAL_SNAKE_LEN)
            .map(|i| Cell::new(INITIAL_SNAKE_ROW, INITIAL_HEAD_COL - i))
            .collect();

        Self {
            board_size: DEFAULT_BOARD_SIZE,
            initial_snake,
            initial_direction: Direction::Right,
            initial_fruit: None,
            initial_interval_ms: INITIAL_INTERVAL_MS,
            speed_step_ms: SPEED_STEP_MS,
            min_interval_ms: MIN_INTERVAL_MS,
            fruit_score: FRUIT_SCORE,
            fruit_placement: FruitPlacement::Anywhere,
            seed: 1,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_board_size(mut self, size: u16) -> Self {
        self.board_size = size;
        self
    }

    pub fn with_snake(mut self, body: impl IntoIterator<Item = Cell>, direction: Direction) -> Self {
        self.initial_snake = body.into_iter().collect();
        self.initial_direction = direction;
        self
    }

    pub fn with_fruit(mut self, fruit: Cell) -> Self {
        self.initial_fruit = Some(fruit);
        self
    }

    pub fn with_interval_ms(mut self, interval_ms: u32) -> Self {
        self.initial_interval_ms = interval_ms;
        self
    }

    pub fn with_fruit_placement(mut self, placement: FruitPlacement) -> Self {
        self.fruit_placement = placement;
        self
    }

    /// Check every constraint a session relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardSize(self.board_size));
        }
        validate_body(&self.initial_snake, self.board_size)?;

        if let Some(fruit) = self.initial_fruit {
            if !fruit.in_bounds(self.board_size) {
                return Err(ConfigError::OutOfBounds {
                    cell: fruit,
                    size: self.board_size,
                });
            }
        }

        if self.initial_interval_ms == 0 || self.min_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.min_interval_ms > self.initial_interval_ms {
            return Err(ConfigError::MinAboveInitial {
                min_ms: self.min_interval_ms,
                initial_ms: self.initial_interval_ms,
            });
        }
        Ok(())
    }

    /// Create from environment variables, falling back to defaults.
    ///
    /// - `SNAKE_BOARD_SIZE`: board side length
    /// - `SNAKE_SEED`: fruit RNG seed
    /// - `SNAKE_INTERVAL_MS`: starting tick interval
    /// - `SNAKE_AVOID_SNAKE_FRUIT`: "1" or "true" to keep fruit off the body
    ///
    /// A board size other than the default re-centres the starting snake.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(size) = parse_var::<u16>(&lookup, "SNAKE_BOARD_SIZE") {
            if size != config.board_size {
                config = config.with_board_size(size);
                config.initial_snake = centred_snake(size);
            }
        }
        if let Some(seed) = parse_var::<u32>(&lookup, "SNAKE_SEED") {
            config.seed = seed;
        }
        if let Some(interval) = parse_var::<u32>(&lookup, "SNAKE_INTERVAL_MS") {
            config.initial_interval_ms = interval;
        }
        let avoid = lookup("SNAKE_AVOID_SNAKE_FRUIT")
            .map(|v| {
                let v = v.trim();
                v == "1" || v.eq_ignore_ascii_case("true")
            })
            .unwrap_or(false);
        if avoid {
            config.fruit_placement = FruitPlacement::AvoidSnake;
        }

        config
    }
}

/// Bounds, emptiness and uniqueness checks for a snake body.
pub(crate) fn validate_body(body: &[Cell], size: u16) -> Result<(), ConfigError> {
    if body.is_empty() {
        return Err(ConfigError::EmptySnake);
    }
    let mut seen = HashSet::with_capacity(body.len());
    for &cell in body {
        if !cell.in_bounds(size) {
            return Err(ConfigError::OutOfBounds { cell, size });
        }
        if !seen.insert(cell) {
            return Err(ConfigError::DuplicateCell(cell));
        }
    }
    Ok(())
}

/// A horizontal snake heading right, as long as the board allows (up to the
/// classic 8 cells), with its head on the centre column.
fn centred_snake(size: u16) -> Vec<Cell> {
    let mid = (size / 2) as i16;
    let len = INITIAL_SNAKE_LEN.min(mid + 1).max(1);
    (0..len).map(|i| Cell::new(mid, mid - i)).collect()
}

fn parse_var<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, var: &str) -> Option<T> {
    let raw = lookup(var)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("ignoring {}={:?}: not a valid value", var, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.initial_snake.len(), 8);
        assert_eq!(config.initial_snake[0], Cell::new(10, 14));
        assert_eq!(config.initial_snake[7], Cell::new(10, 7));
        assert_eq!(config.initial_direction, Direction::Right);
    }

    #[test]
    fn rejects_empty_snake() {
        let config = GameConfig::default().with_snake([], Direction::Up);
        assert_eq!(config.validate(), Err(ConfigError::EmptySnake));
    }

    #[test]
    fn rejects_duplicate_cells() {
        let config = GameConfig::default().with_snake(
            [Cell::new(1, 1), Cell::new(1, 2), Cell::new(1, 1)],
            Direction::Up,
        );
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateCell(Cell::new(1, 1)))
        );
    }

    #[test]
    fn rejects_out_of_bounds_fruit() {
        let config = GameConfig::default()
            .with_board_size(5)
            .with_snake([Cell::new(2, 2)], Direction::Right)
            .with_fruit(Cell::new(5, 0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfBounds { size: 5, .. })
        ));
    }

    #[test]
    fn rejects_bad_board_size() {
        let config = GameConfig::default().with_board_size(0);
        assert_eq!(config.validate(), Err(ConfigError::BoardSize(0)));
    }

    #[test]
    fn rejects_min_above_initial() {
        let mut config = GameConfig::default().with_interval_ms(3);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MinAboveInitial { .. })
        ));
        config.initial_interval_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroInterval));
    }

    #[test]
    fn centred_snake_fits_small_boards() {
        for size in 1..=20u16 {
            let body = centred_snake(size);
            assert_eq!(validate_body(&body, size), Ok(()), "size {}", size);
        }
    }

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key: &str| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn from_lookup_without_vars_is_default() {
        assert_eq!(GameConfig::from_lookup(|_| None), GameConfig::default());
    }

    #[test]
    fn from_lookup_ignores_unparsable_values() {
        let config = GameConfig::from_lookup(lookup(&[
            ("SNAKE_BOARD_SIZE", "huge"),
            ("SNAKE_SEED", "-3"),
            ("SNAKE_INTERVAL_MS", "fast"),
            ("SNAKE_AVOID_SNAKE_FRUIT", "maybe"),
        ]));
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn from_lookup_reads_seed_and_interval() {
        let config = GameConfig::from_lookup(lookup(&[
            ("SNAKE_SEED", " 42 "),
            ("SNAKE_INTERVAL_MS", "150"),
        ]));
        assert_eq!(config.seed, 42);
        assert_eq!(config.initial_interval_ms, 150);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn from_lookup_recentres_snake_on_resized_board() {
        let config = GameConfig::from_lookup(lookup(&[("SNAKE_BOARD_SIZE", "20")]));
        assert_eq!(config.board_size, 20);
        assert_eq!(config.initial_snake.len(), 8);
        assert_eq!(config.initial_snake[0], Cell::new(10, 10));
        assert_eq!(config.initial_snake[7], Cell::new(10, 3));
        assert_eq!(config.validate(), Ok(()));

        let tiny = GameConfig::from_lookup(lookup(&[("SNAKE_BOARD_SIZE", "3")]));
        assert_eq!(tiny.validate(), Ok(()));
    }

    #[test]
    fn from_lookup_avoid_flag() {
        for value in ["1", "true", "TRUE", " True "] {
            let config = GameConfig::from_lookup(lookup(&[("SNAKE_AVOID_SNAKE_FRUIT", value)]));
            assert_eq!(config.fruit_placement, FruitPlacement::AvoidSnake, "{value:?}");
        }
        for value in ["0", "false", "yes", ""] {
            let config = GameConfig::from_lookup(lookup(&[("SNAKE_AVOID_SNAKE_FRUIT", value)]));
            assert_eq!(config.fruit_placement, FruitPlacement::Anywhere, "{value:?}");
        }
    }

    #[test]
    fn error_messages_are_readable() {
        let err = ConfigError::OutOfBounds {
            cell: Cell::new(-1, 3),
            size: 5,
        };
        assert_eq!(err.to_string(), "cell (-1, 3) lies outside the 5x5 board");
    }
}

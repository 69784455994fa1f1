//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the snake simulation: grid, collision rules,
//! steering, fruit, score and the tick scheduler.
//! It has **zero dependencies** on UI, terminals or timers, making it:
//!
//! - **Deterministic**: Same seed produces identical fruit sequences
//! - **Testable**: Every rule is reachable through plain method calls
//! - **Portable**: Can run in any environment (terminal, headless, async runtime)
//!
//! # Module Structure
//!
//! - [`grid`]: board bounds, snake body and fruit; `advance` commits moves
//! - [`collision`]: classifies a candidate head as blocked, growing or moving
//! - [`direction`]: reversal filter with a single pending slot
//! - [`fruit`]: uniform fruit placement
//! - [`scheduler`]: variable-interval tick timer and the speed-up rule
//! - [`scoring`]: fixed points per fruit
//! - [`game_state`]: the owning aggregate
//! - [`config`]: session configuration and validation
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameConfig, GameState};
//! use tui_snake_types::{AdvanceResult, Cell, Direction, GameStatus};
//!
//! let config = GameConfig::default()
//!     .with_board_size(5)
//!     .with_snake([Cell::new(2, 2)], Direction::Right)
//!     .with_fruit(Cell::new(2, 3));
//! let mut game = GameState::with_config(config).unwrap();
//! game.start();
//!
//! // One full interval elapses: the snake eats the fruit.
//! let outcome = game.tick(100).unwrap();
//! assert_eq!(outcome.result, AdvanceResult::Grew);
//! assert_eq!(game.score(), 100);
//! assert_eq!(game.interval_ms(), 90);
//!
//! // Reversing is ignored; walking off the board ends the game.
//! game.request_direction(Direction::Left);
//! game.request_direction(Direction::Up);
//! while game.status() == GameStatus::Running {
//!     game.step();
//! }
//! assert!(game.game_over());
//! ```
//!
//! # Timing
//!
//! The game starts at a 100ms interval. Each fruit shortens it by 10ms, down
//! to a 5ms floor. Call [`GameState::tick`](game_state::GameState::tick) with
//! elapsed time, or [`GameState::step`](game_state::GameState::step) to fire a
//! tick immediately.

pub mod collision;
pub mod config;
pub mod direction;
pub mod fruit;
pub mod game_state;
pub mod grid;
pub mod rng;
pub mod scheduler;
pub mod scoring;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use collision::{classify, CollisionKind};
pub use config::{ConfigError, FruitPlacement, GameConfig};
pub use direction::DirectionGate;
pub use fruit::FruitSpawner;
pub use game_state::{GameState, TickOutcome};
pub use grid::GridModel;
pub use rng::SimpleRng;
pub use scheduler::{SpeedRule, TickScheduler};
pub use scoring::ScoreTracker;
pub use snapshot::GameSnapshot;

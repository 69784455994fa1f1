//! Session engine - connects the pure core to its collaborators.
//!
//! - [`sink`]: render and termination capabilities (closures work too)
//! - [`session`]: owns a `GameState`, fires due ticks, publishes snapshots
//! - [`runtime`]: drives a session from a tokio timer with async input
//!
//! ```
//! use tui_snake_core::{GameConfig, GameState};
//! use tui_snake_engine::{FinalScore, LatestSnapshot, Session};
//! use tui_snake_types::{Cell, Direction};
//!
//! let config = GameConfig::default()
//!     .with_board_size(3)
//!     .with_snake([Cell::new(1, 1)], Direction::Right)
//!     .with_fruit(Cell::new(0, 0));
//! let state = GameState::with_config(config).unwrap();
//!
//! let mut session = Session::new(state, LatestSnapshot::default(), FinalScore::default());
//! session.start();
//! session.update(200);
//! assert!(session.is_over());
//! assert_eq!(session.termination_sink().0, Some(0));
//! ```

pub mod runtime;
pub mod session;
pub mod sink;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use runtime::run;
pub use session::Session;
pub use sink::{FinalScore, LatestSnapshot, NullSink, RenderSink, TerminationSink};

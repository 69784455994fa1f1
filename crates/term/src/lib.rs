//! Terminal rendering for the snake board.
//!
//! Snapshots are drawn into a plain [`FrameBuffer`] by [`GameView`] and then
//! flushed by [`TerminalRenderer`], which only re-emits glyphs that changed.
//! No widget toolkit is involved; board cells are two columns wide by default
//! so the grid looks square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{AnchorY, BoardLayout, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

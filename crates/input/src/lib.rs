//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework beyond
//! `crossterm` key types. It maps key events into steering
//! [`Direction`](crate::types::Direction)s and front-end commands. Unknown keys
//! map to `None` and are dropped by the caller.

pub mod map;

pub use tui_snake_types as types;

pub use map::{direction_from_key, direction_from_key_code, handle_key_event, should_quit, InputCommand};

//! Collision resolution - classifies a candidate head position
//!
//! Order of checks:
//! 1. Outside `[0, N)` on either axis → `Blocked` (wall)
//! 2. Equal to any cell of the pre-move body → `Blocked` (self)
//! 3. Equal to the fruit → `Grew`
//! 4. Otherwise → `Moved`
//!
//! The tail cell is checked like every other body cell even though a plain
//! move would vacate it, so chasing your own tail one cell behind is fatal.

use crate::types::{AdvanceResult, Cell};

/// Why a move was blocked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    Wall,
    SelfBody,
}

impl CollisionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollisionKind::Wall => "wall",
            CollisionKind::SelfBody => "self",
        }
    }
}

/// Report the collision, if any, a candidate head would cause.
pub fn collision_kind<'a>(
    board_size: u16,
    body: impl IntoIterator<Item = &'a Cell>,
    candidate: Cell,
) -> Option<CollisionKind> {
    if !candidate.in_bounds(board_size) {
        return Some(CollisionKind::Wall);
    }
    if body.into_iter().any(|&c| c == candidate) {
        return Some(CollisionKind::SelfBody);
    }
    None
}

/// Classify a candidate head against the board, the full pre-move body and the fruit.
pub fn classify<'a>(
    board_size: u16,
    body: impl IntoIterator<Item = &'a Cell>,
    fruit: Cell,
    candidate: Cell,
) -> AdvanceResult {
    if collision_kind(board_size, body, candidate).is_some() {
        AdvanceResult::Blocked
    } else if candidate == fruit {
        AdvanceResult::Grew
    } else {
        AdvanceResult::Moved
    }
}

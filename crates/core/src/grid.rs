//! Grid model - board bounds, snake body and fruit
//!
//! The body is stored head-first in a `VecDeque` so a move is a
//! `push_front` plus an optional `pop_back`. Coordinates follow
//! [`Cell`]: `(row, col)` with `(0, 0)` in the top-left corner.

use std::collections::VecDeque;

use crate::collision::{self, CollisionKind};
use crate::config::{validate_body, ConfigError};
use crate::types::{AdvanceResult, Cell, Direction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridModel {
    size: u16,
    /// Head at the front, tail at the back. Never empty, never contains duplicates.
    body: VecDeque<Cell>,
    fruit: Cell,
}

impl GridModel {
    /// Create a grid, validating that the body is non-empty, unique and on the board.
    pub fn new(size: u16, body: &[Cell], fruit: Cell) -> Result<Self, ConfigError> {
        validate_body(body, size)?;
        if !fruit.in_bounds(size) {
            return Err(ConfigError::OutOfBounds { cell: fruit, size });
        }
        Ok(Self {
            size,
            body: body.iter().copied().collect(),
            fruit,
        })
    }

    pub fn size(&self) -> u16 {
        self.size
    }

    pub fn head(&self) -> Cell {
        // Non-empty by construction; advance never pops without pushing first.
        self.body.front().copied().unwrap_or_default()
    }

    pub fn tail(&self) -> Cell {
        self.body.back().copied().unwrap_or_default()
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn fruit(&self) -> Cell {
        self.fruit
    }

    pub fn set_fruit(&mut self, fruit: Cell) {
        self.fruit = fruit;
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.in_bounds(self.size)
    }

    /// The cell the head would occupy after one step in `direction`.
    pub fn candidate_head(&self, direction: Direction) -> Cell {
        self.head().step(direction)
    }

    /// Classify a step without mutating anything.
    pub fn classify(&self, direction: Direction) -> AdvanceResult {
        collision::classify(
            self.size,
            &self.body,
            self.fruit,
            self.candidate_head(direction),
        )
    }

    /// Why a step in `direction` would be blocked, if it would.
    pub fn collision(&self, direction: Direction) -> Option<CollisionKind> {
        collision::collision_kind(self.size, &self.body, self.candidate_head(direction))
    }

    /// Advance the snake one cell.
    ///
    /// - `Moved`: head prepended, tail dropped
    /// - `Grew`: head prepended, body kept (the fruit is left in place for the
    ///   owner to respawn)
    /// - `Blocked`: nothing changes
    pub fn advance(&mut self, direction: Direction) -> AdvanceResult {
        let candidate = self.candidate_head(direction);
        let result = collision::classify(self.size, &self.body, self.fruit, candidate);

        match result {
            AdvanceResult::Blocked => {}
            AdvanceResult::Grew => {
                self.body.push_front(candidate);
            }
            AdvanceResult::Moved => {
                self.body.push_front(candidate);
                self.body.pop_back();
            }
        }

        result
    }

    /// Cells not covered by the snake, row-major.
    pub fn free_cells(&self) -> Vec<Cell> {
        let n = self.size as i16;
        let mut out = Vec::with_capacity((self.size as usize).pow(2).saturating_sub(self.len()));
        for row in 0..n {
            for col in 0..n {
                let cell = Cell::new(row, col);
                if !self.contains(cell) {
                    out.push(cell);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(size: u16, body: &[(i16, i16)], fruit: (i16, i16)) -> GridModel {
        let body: Vec<Cell> = body.iter().map(|&c| Cell::from(c)).collect();
        GridModel::new(size, &body, Cell::from(fruit)).unwrap()
    }

    #[test]
    fn test_new_validates() {
        assert_eq!(
            GridModel::new(5, &[], Cell::new(0, 0)),
            Err(ConfigError::EmptySnake)
        );
        assert!(GridModel::new(5, &[Cell::new(0, 0)], Cell::new(0, 9)).is_err());
        assert!(GridModel::new(5, &[Cell::new(0, 0), Cell::new(0, 0)], Cell::new(1, 1)).is_err());
    }

    #[test]
    fn test_moved_keeps_length() {
        let mut g = grid(5, &[(2, 2), (2, 1), (2, 0)], (4, 4));
        assert_eq!(g.advance(Direction::Right), AdvanceResult::Moved);
        assert_eq!(g.len(), 3);
        assert_eq!(
            g.body().iter().copied().collect::<Vec<_>>(),
            vec![Cell::new(2, 3), Cell::new(2, 2), Cell::new(2, 1)]
        );
    }

    #[test]
    fn test_grew_keeps_whole_body() {
        let mut g = grid(5, &[(2, 2)], (2, 3));
        assert_eq!(g.advance(Direction::Right), AdvanceResult::Grew);
        assert_eq!(
            g.body().iter().copied().collect::<Vec<_>>(),
            vec![Cell::new(2, 3), Cell::new(2, 2)]
        );
        assert_eq!(g.head(), Cell::new(2, 3));
        assert_eq!(g.tail(), Cell::new(2, 2));
    }

    #[test]
    fn test_blocked_does_not_mutate() {
        let mut g = grid(5, &[(0, 0)], (3, 3));
        let before = g.clone();
        assert_eq!(g.advance(Direction::Left), AdvanceResult::Blocked);
        assert_eq!(g, before);
        assert_eq!(g.collision(Direction::Left), Some(CollisionKind::Wall));
    }

    #[test]
    fn test_neck_collision() {
        let mut g = grid(5, &[(1, 1), (1, 2), (1, 3)], (4, 4));
        assert_eq!(g.classify(Direction::Right), AdvanceResult::Blocked);
        assert_eq!(g.advance(Direction::Right), AdvanceResult::Blocked);
        assert_eq!(g.collision(Direction::Right), Some(CollisionKind::SelfBody));
        assert_eq!(g.len(), 3);
    }

    #[test]
    fn test_free_cells_excludes_body() {
        let g = grid(2, &[(0, 0), (0, 1)], (1, 1));
        assert_eq!(g.free_cells(), vec![Cell::new(1, 0), Cell::new(1, 1)]);
    }

    #[test]
    fn test_candidate_head() {
        let g = grid(5, &[(0, 4)], (2, 2));
        assert_eq!(g.candidate_head(Direction::Right), Cell::new(0, 5));
        assert!(!g.in_bounds(g.candidate_head(Direction::Up)));
        assert!(g.in_bounds(g.candidate_head(Direction::Down)));
    }
}

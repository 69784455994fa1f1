//! Direction gate - filters steering requests between ticks
//!
//! A request is accepted only if it does not reverse the direction currently
//! in effect (the one applied on the last successful tick). Accepted requests
//! overwrite the single pending slot, so the last valid request before a tick
//! wins. Rejected requests leave no trace.

use crate::types::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionGate {
    current: Direction,
    pending: Option<Direction>,
}

impl DirectionGate {
    pub fn new(initial: Direction) -> Self {
        Self {
            current: initial,
            pending: None,
        }
    }

    /// The direction applied on the last successful tick.
    pub fn current(&self) -> Direction {
        self.current
    }

    pub fn pending(&self) -> Option<Direction> {
        self.pending
    }

    /// Store `requested` for the next tick unless it reverses the current direction.
    ///
    /// Returns whether the request was accepted.
    pub fn request(&mut self, requested: Direction) -> bool {
        if self.current.is_opposite(requested) {
            return false;
        }
        self.pending = Some(requested);
        true
    }

    /// Direction to apply on the next tick, clearing the pending slot.
    pub fn take_next(&mut self) -> Direction {
        self.pending.take().unwrap_or(self.current)
    }

    /// Record the direction of a committed move.
    pub fn commit(&mut self, applied: Direction) {
        self.current = applied;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversal_is_discarded() {
        for d in Direction::ALL {
            let mut gate = DirectionGate::new(d);
            assert!(gate.request(d.opposite().opposite()));
            let before = gate.pending();
            assert!(!gate.request(d.opposite()));
            assert_eq!(gate.pending(), before);
        }
    }

    #[test]
    fn test_reversal_discarded_with_empty_slot() {
        let mut gate = DirectionGate::new(Direction::Right);
        assert!(!gate.request(Direction::Left));
        assert_eq!(gate.pending(), None);
        assert_eq!(gate.take_next(), Direction::Right);
    }

    #[test]
    fn test_last_valid_request_wins() {
        let mut gate = DirectionGate::new(Direction::Right);
        assert!(gate.request(Direction::Up));
        assert!(gate.request(Direction::Down));
        // Left reverses the *current* direction, not the pending one.
        assert!(!gate.request(Direction::Left));
        assert_eq!(gate.take_next(), Direction::Down);
        assert_eq!(gate.pending(), None);
    }

    #[test]
    fn test_reversal_checked_against_applied_direction() {
        let mut gate = DirectionGate::new(Direction::Right);
        assert!(gate.request(Direction::Up));
        let next = gate.take_next();
        gate.commit(next);
        assert_eq!(gate.current(), Direction::Up);
        assert!(gate.request(Direction::Left));
        assert!(!gate.request(Direction::Down));
        assert_eq!(gate.pending(), Some(Direction::Left));
    }

    #[test]
    fn test_same_direction_is_accepted() {
        let mut gate = DirectionGate::new(Direction::Up);
        assert!(gate.request(Direction::Up));
        assert_eq!(gate.take_next(), Direction::Up);
    }
}

//! Tick scheduler - variable-interval fixed-step timer
//!
//! The scheduler never sleeps; callers feed it elapsed time and pull due
//! ticks one at a time, so each tick (including any reschedule it triggers)
//! completes before the next one is considered.
//!
//! # State machine
//!
//! ```text
//! Idle --start--> Running --cancel--> GameOver
//!                  |   ^
//!                  +---+ reschedule
//! ```
//!
//! `GameOver` is absorbing: `start` and `reschedule` are no-ops there.
//!
//! # Speed rule
//!
//! Every eaten fruit shortens the interval by a fixed step, floored at a
//! minimum (10ms and 5ms by default): 100, 90, ..., 10, 5, 5, ...

use crate::types::{GameStatus, MIN_INTERVAL_MS, SPEED_STEP_MS};

/// Linear speed-up applied on growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedRule {
    pub step_ms: u32,
    pub min_ms: u32,
}

impl SpeedRule {
    pub fn new(step_ms: u32, min_ms: u32) -> Self {
        Self { step_ms, min_ms }
    }

    /// Next interval after a fruit: `max(interval - step, min)`.
    pub fn accelerate(&self, interval_ms: u32) -> u32 {
        interval_ms.saturating_sub(self.step_ms).max(self.min_ms)
    }
}

impl Default for SpeedRule {
    fn default() -> Self {
        Self::new(SPEED_STEP_MS, MIN_INTERVAL_MS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickScheduler {
    state: GameStatus,
    interval_ms: u32,
    /// Time accumulated since the timer was (re)started or last fired.
    elapsed_ms: u32,
    /// Number of timer restarts (start + reschedules).
    generation: u32,
}

impl TickScheduler {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            state: GameStatus::Idle,
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
            generation: 0,
        }
    }

    pub fn state(&self) -> GameStatus {
        self.state
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Time left until the next tick is due (0 if already due or not running).
    pub fn remaining_ms(&self) -> u32 {
        if !self.state.is_running() {
            return 0;
        }
        self.interval_ms.saturating_sub(self.elapsed_ms)
    }

    /// Idle → Running. Returns false if the scheduler was not idle.
    pub fn start(&mut self) -> bool {
        if self.state != GameStatus::Idle {
            return false;
        }
        self.state = GameStatus::Running;
        self.elapsed_ms = 0;
        self.generation = self.generation.wrapping_add(1);
        true
    }

    /// Tear the timer down and restart it with `interval_ms`.
    ///
    /// Accumulated time is discarded: the next tick fires a full new interval
    /// after the restart.
    pub fn reschedule(&mut self, interval_ms: u32) -> bool {
        if self.state != GameStatus::Running {
            return false;
        }
        self.interval_ms = interval_ms.max(1);
        self.elapsed_ms = 0;
        self.generation = self.generation.wrapping_add(1);
        true
    }

    /// Stop ticking for good.
    pub fn cancel(&mut self) {
        self.state = GameStatus::GameOver;
        self.elapsed_ms = 0;
    }

    /// Feed wall-clock time. Ignored unless running.
    pub fn elapse(&mut self, ms: u32) {
        if self.state.is_running() {
            self.elapsed_ms = self.elapsed_ms.saturating_add(ms);
        }
    }

    /// Consume one due tick, if any.
    pub fn take_due(&mut self) -> bool {
        if !self.state.is_running() || self.elapsed_ms < self.interval_ms {
            return false;
        }
        self.elapsed_ms -= self.interval_ms;
        true
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new(crate::types::INITIAL_INTERVAL_MS)
    }
}

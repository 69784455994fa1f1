//! Session - binds a `GameState` to its render and termination sinks.
//!
//! The session is the only writer of the game state. Each fired tick runs to
//! completion (advance, respawn, reschedule) and is followed by exactly one
//! snapshot to the render sink. Entering `GameOver` notifies the termination
//! sink once; later calls cannot fire it again because no tick fires after
//! `GameOver`.

use crate::core::{GameSnapshot, GameState, TickOutcome};
use crate::sink::{RenderSink, TerminationSink};
use crate::types::{Direction, GameStatus};

pub struct Session<R, T> {
    state: GameState,
    render: R,
    termination: T,
    snapshot: GameSnapshot,
    notified: bool,
}

impl<R: RenderSink, T: TerminationSink> Session<R, T> {
    pub fn new(state: GameState, render: R, termination: T) -> Self {
        Self {
            state,
            render,
            termination,
            snapshot: GameSnapshot::default(),
            notified: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    pub fn is_over(&self) -> bool {
        self.state.game_over()
    }

    pub fn render_sink(&self) -> &R {
        &self.render
    }

    pub fn termination_sink(&self) -> &T {
        &self.termination
    }

    /// Start ticking and publish the initial frame.
    pub fn start(&mut self) {
        if self.state.started() {
            return;
        }
        self.state.start();
        self.publish();
    }

    pub fn request_direction(&mut self, direction: Direction) -> bool {
        self.state.request_direction(direction)
    }

    /// Advance the clock by `elapsed_ms` and fire every tick that became due.
    ///
    /// Returns the number of ticks fired.
    pub fn update(&mut self, elapsed_ms: u32) -> usize {
        let mut fired = 0;
        let mut elapsed = elapsed_ms;
        while let Some(outcome) = self.state.tick(elapsed) {
            elapsed = 0;
            fired += 1;
            self.after_tick(&outcome);
        }
        fired
    }

    /// Fire a single tick immediately.
    pub fn step(&mut self) -> Option<TickOutcome> {
        let outcome = self.state.step()?;
        self.after_tick(&outcome);
        Some(outcome)
    }

    /// Milliseconds until the next tick is due, `None` once ticking stopped.
    pub fn time_to_next_tick(&self) -> Option<u32> {
        if !self.state.status().is_running() {
            return None;
        }
        Some(self.state.scheduler().remaining_ms())
    }

    /// Tear the session down, handing back the state and both sinks.
    pub fn into_parts(self) -> (GameState, R, T) {
        (self.state, self.render, self.termination)
    }

    fn after_tick(&mut self, outcome: &TickOutcome) {
        self.publish();
        if outcome.is_game_over() && !self.notified {
            self.notified = true;
            self.termination.game_over(self.state.score());
        }
    }

    fn publish(&mut self) {
        self.state.snapshot_into(&mut self.snapshot);
        self.render.render(&self.snapshot);
    }
}

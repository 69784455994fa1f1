//! Output capabilities a session reports to.

use crate::core::GameSnapshot;

/// Receives one complete snapshot per tick.
pub trait RenderSink {
    fn render(&mut self, snapshot: &GameSnapshot);
}

/// Notified exactly once when the session ends.
pub trait TerminationSink {
    fn game_over(&mut self, final_score: u32);
}

impl<F> RenderSink for F
where
    F: FnMut(&GameSnapshot),
{
    fn render(&mut self, snapshot: &GameSnapshot) {
        self(snapshot)
    }
}

impl<F> TerminationSink for F
where
    F: FnMut(u32),
{
    fn game_over(&mut self, final_score: u32) {
        self(final_score)
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn render(&mut self, _snapshot: &GameSnapshot) {}
}

impl TerminationSink for NullSink {
    fn game_over(&mut self, _final_score: u32) {}
}

/// Keeps the most recent snapshot; useful for front-ends that render on their
/// own schedule.
#[derive(Debug, Clone, Default)]
pub struct LatestSnapshot {
    latest: GameSnapshot,
    frames: u64,
}

impl LatestSnapshot {
    pub fn get(&self) -> &GameSnapshot {
        &self.latest
    }

    /// Number of snapshots received so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl RenderSink for LatestSnapshot {
    fn render(&mut self, snapshot: &GameSnapshot) {
        self.latest.clone_from(snapshot);
        self.frames += 1;
    }
}

/// Remembers the final score, if the session has ended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FinalScore(pub Option<u32>);

impl TerminationSink for FinalScore {
    fn game_over(&mut self, final_score: u32) {
        self.0 = Some(final_score);
    }
}

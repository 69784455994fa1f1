//! Game state module - owns the complete session
//!
//! This module ties together all core components: grid, direction gate, fruit
//! spawner, score and scheduler. Nothing outside `GameState` holds a mutable
//! reference to the snake or the fruit; observers get [`GameSnapshot`]s.

use crate::config::{ConfigError, GameConfig};
use crate::scheduler::{SpeedRule, TickScheduler};
use crate::snapshot::GameSnapshot;
use crate::types::*;
use crate::{DirectionGate, FruitSpawner, GridModel, ScoreTracker};

/// What a fired tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    pub result: AdvanceResult,
    /// Direction the tick tried to move in.
    pub direction: Direction,
    /// Interval in effect after the tick.
    pub interval_ms: u32,
    /// Whether the timer was restarted with a new interval.
    pub rescheduled: bool,
    /// 1-based index of this tick within the session.
    pub tick: u64,
}

impl TickOutcome {
    pub fn is_game_over(&self) -> bool {
        self.result == AdvanceResult::Blocked
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: GridModel,
    gate: DirectionGate,
    spawner: FruitSpawner,
    score: ScoreTracker,
    scheduler: TickScheduler,
    speed: SpeedRule,
    status: GameStatus,
    ticks: u64,
}

impl GameState {
    /// Create a classic game with the given fruit RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_config(GameConfig::default().with_seed(seed))
            .unwrap_or_else(|e| unreachable!("default config is valid: {e}"))
    }

    /// Create a game from an explicit configuration
    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut spawner = FruitSpawner::new(config.seed, config.fruit_placement);
        // Placeholder fruit so the grid can validate the body first.
        let mut grid = GridModel::new(
            config.board_size,
            &config.initial_snake,
            config.initial_snake[0],
        )?;
        let fruit = match config.initial_fruit {
            Some(f) => f,
            None => spawner.spawn_for(&grid),
        };
        grid.set_fruit(fruit);

        Ok(Self {
            grid,
            gate: DirectionGate::new(config.initial_direction),
            spawner,
            score: ScoreTracker::new(config.fruit_score),
            scheduler: TickScheduler::new(config.initial_interval_ms),
            speed: SpeedRule::new(config.speed_step_ms, config.min_interval_ms),
            status: GameStatus::Idle,
            ticks: 0,
        })
    }

    /// Idle → Running; starts the scheduler at the current interval.
    pub fn start(&mut self) {
        if self.status != GameStatus::Idle {
            return;
        }
        self.status = GameStatus::Running;
        self.scheduler.start();
        log::info!(
            "session started: board {}x{}, snake length {}, interval {}ms",
            self.grid.size(),
            self.grid.size(),
            self.grid.len(),
            self.scheduler.interval_ms()
        );
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn started(&self) -> bool {
        self.status != GameStatus::Idle
    }

    pub fn game_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn score(&self) -> u32 {
        self.score.score()
    }

    pub fn fruits_eaten(&self) -> u32 {
        self.score.fruits_eaten()
    }

    pub fn interval_ms(&self) -> u32 {
        self.scheduler.interval_ms()
    }

    /// Direction applied on the last successful tick
    pub fn direction(&self) -> Direction {
        self.gate.current()
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.gate.pending()
    }

    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    pub fn snake(&self) -> impl Iterator<Item = Cell> + '_ {
        self.grid.body().iter().copied()
    }

    pub fn head(&self) -> Cell {
        self.grid.head()
    }

    pub fn fruit(&self) -> Cell {
        self.grid.fruit()
    }

    pub fn board_size(&self) -> u16 {
        self.grid.size()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    /// Steer for the next tick. Reversals are dropped silently, as is any
    /// request once the game is over.
    pub fn request_direction(&mut self, requested: Direction) -> bool {
        if self.status.is_over() {
            return false;
        }
        self.gate.request(requested)
    }

    /// Feed elapsed time and fire at most one due tick.
    ///
    /// When more than one interval has elapsed, call `tick(0)` until it
    /// returns `None` to drain the backlog.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<TickOutcome> {
        self.scheduler.elapse(elapsed_ms);
        if !self.scheduler.take_due() {
            return None;
        }
        self.step()
    }

    /// Fire one tick now, regardless of accumulated time.
    pub fn step(&mut self) -> Option<TickOutcome> {
        if !self.status.is_running() {
            return None;
        }

        let direction = self.gate.take_next();
        let result = self.grid.advance(direction);
        self.ticks = self.ticks.wrapping_add(1);
        let mut rescheduled = false;

        match result {
            AdvanceResult::Blocked => {
                let reason = self
                    .grid
                    .collision(direction)
                    .map(|k| k.as_str())
                    .unwrap_or("unknown");
                self.status = GameStatus::GameOver;
                self.scheduler.cancel();
                log::info!(
                    "game over after {} ticks: {} collision at {}, final score {}",
                    self.ticks,
                    reason,
                    self.grid.candidate_head(direction),
                    self.score.score()
                );
            }
            AdvanceResult::Grew => {
                self.gate.commit(direction);
                let fruit = self.spawner.spawn_for(&self.grid);
                self.grid.set_fruit(fruit);
                let score = self.score.on_fruit_consumed();
                let next = self.speed.accelerate(self.scheduler.interval_ms());
                rescheduled = self.scheduler.reschedule(next);
                log::debug!(
                    "fruit eaten: length {}, score {}, next fruit {}, interval {}ms",
                    self.grid.len(),
                    score,
                    fruit,
                    next
                );
            }
            AdvanceResult::Moved => {
                self.gate.commit(direction);
            }
        }

        Some(TickOutcome {
            result,
            direction,
            interval_ms: self.scheduler.interval_ms(),
            rescheduled,
            tick: self.ticks,
        })
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.snake_cells.clear();
        out.snake_cells.extend(self.grid.body().iter().copied());
        out.head = self.grid.head();
        out.fruit = self.grid.fruit();
        out.score = self.score.score();
        out.status = self.status;
        out.direction = self.gate.current();
        out.interval_ms = self.scheduler.interval_ms();
        out.tick = self.ticks;
        out.board_size = self.grid.size();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut GridModel {
        &mut self.grid
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

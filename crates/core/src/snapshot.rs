use crate::types::{Cell, Direction, GameStatus};

/// Read-only view of a session, handed to render sinks once per tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Head first.
    pub snake_cells: Vec<Cell>,
    pub head: Cell,
    pub fruit: Cell,
    pub score: u32,
    pub status: GameStatus,
    pub direction: Direction,
    pub interval_ms: u32,
    pub tick: u64,
    pub board_size: u16,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.snake_cells.clear();
        self.head = Cell::default();
        self.fruit = Cell::default();
        self.score = 0;
        self.status = GameStatus::Idle;
        self.direction = Direction::Right;
        self.interval_ms = 0;
        self.tick = 0;
        self.board_size = 0;
    }

    pub fn playable(&self) -> bool {
        self.status.is_running()
    }

    pub fn snake_len(&self) -> usize {
        self.snake_cells.len()
    }

    pub fn is_snake(&self, cell: Cell) -> bool {
        self.snake_cells.contains(&cell)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            snake_cells: Vec::new(),
            head: Cell::default(),
            fruit: Cell::default(),
            score: 0,
            status: GameStatus::Idle,
            direction: Direction::Right,
            interval_ms: 0,
            tick: 0,
            board_size: 0,
        }
    }
}

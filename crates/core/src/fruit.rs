//! Fruit spawner - picks the next fruit cell
//!
//! With [`FruitPlacement::Anywhere`] every one of the N×N cells is equally
//! likely, whether or not the snake currently covers it. A fruit that lands on
//! the body cannot be eaten until the body moves off it.

use crate::config::FruitPlacement;
use crate::grid::GridModel;
use crate::rng::SimpleRng;
use crate::types::Cell;

#[derive(Debug, Clone)]
pub struct FruitSpawner {
    rng: SimpleRng,
    placement: FruitPlacement,
}

impl FruitSpawner {
    pub fn new(seed: u32, placement: FruitPlacement) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            placement,
        }
    }

    pub fn placement(&self) -> FruitPlacement {
        self.placement
    }

    /// Uniformly random cell on a `board_size`×`board_size` board.
    ///
    /// An empty board has no cells; `(0, 0)` is returned without touching the RNG.
    pub fn spawn(&mut self, board_size: u16) -> Cell {
        let n = board_size as u32;
        if n == 0 {
            return Cell::default();
        }
        let idx = self.rng.next_range(n * n);
        Cell::new((idx / n) as i16, (idx % n) as i16)
    }

    /// Next fruit for `grid`, honouring the placement policy.
    pub fn spawn_for(&mut self, grid: &GridModel) -> Cell {
        match self.placement {
            FruitPlacement::Anywhere => self.spawn(grid.size()),
            FruitPlacement::AvoidSnake => {
                let free = grid.free_cells();
                if free.is_empty() {
                    return self.spawn(grid.size());
                }
                free[self.rng.next_range(free.len() as u32) as usize]
            }
        }
    }
}

impl Default for FruitSpawner {
    fn default() -> Self {
        Self::new(1, FruitPlacement::Anywhere)
    }
}

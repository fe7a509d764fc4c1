use macroquad::rand::gen_range;

use crate::grid::{Cell, GRID_HEIGHT, GRID_WIDTH};

// Random picks tried before falling back to a scan for a free cell.
const SPAWN_ATTEMPTS: usize = 64;

pub struct Food {
    position: Cell,
}

impl Food {
    pub fn new(occupied: &[Cell]) -> Self {
        let mut food = Self { position: Cell::new(1, 1) };
        food.spawn(occupied);
        food
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Moves the food to a random inner cell not covered by `occupied`.
    /// Stays put when every inner cell is taken.
    pub fn spawn(&mut self, occupied: &[Cell]) {
        for _ in 0..SPAWN_ATTEMPTS {
            let cell = random_inner_cell();
            if !occupied.contains(&cell) {
                self.position = cell;
                return;
            }
        }
        if let Some(cell) = inner_cells().find(|c| !occupied.contains(c)) {
            self.position = cell;
        }
    }

    #[cfg(test)]
    pub fn place(&mut self, cell: Cell) {
        self.position = cell;
    }
}

fn random_inner_cell() -> Cell {
    Cell::new(gen_range(1, GRID_WIDTH - 1), gen_range(1, GRID_HEIGHT - 1))
}

fn inner_cells() -> impl Iterator<Item = Cell> {
    (1..GRID_HEIGHT - 1).flat_map(|y| (1..GRID_WIDTH - 1).map(move |x| Cell::new(x, y)))
}

use crate::grid::Grid;
use serde::{Deserialize, Serialize};

/// Starter patterns that can be stamped onto the board while paused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Pattern {
    #[default]
    Glider,
    Blinker,
    Block,
    Beacon,
    RPentomino,
}

impl Pattern {
    pub fn name(&self) -> &str {
        match self {
            Pattern::Glider => "Glider",
            Pattern::Blinker => "Blinker",
            Pattern::Block => "Block",
            Pattern::Beacon => "Beacon",
            Pattern::RPentomino => "R-pentomino",
        }
    }

    pub fn next(&self) -> Pattern {
        match self {
            Pattern::Glider => Pattern::Blinker,
            Pattern::Blinker => Pattern::Block,
            Pattern::Block => Pattern::Beacon,
            Pattern::Beacon => Pattern::RPentomino,
            Pattern::RPentomino => Pattern::Glider,
        }
    }

    pub fn prev(&self) -> Pattern {
        match self {
            Pattern::Glider => Pattern::RPentomino,
            Pattern::Blinker => Pattern::Glider,
            Pattern::Block => Pattern::Blinker,
            Pattern::Beacon => Pattern::Block,
            Pattern::RPentomino => Pattern::Beacon,
        }
    }

    /// Live cells as (row, col) offsets around the stamp point
    pub fn cells(&self) -> &'static [(i32, i32)] {
        match self {
            Pattern::Glider => &[(-1, 0), (0, 1), (1, -1), (1, 0), (1, 1)],
            Pattern::Blinker => &[(0, -1), (0, 0), (0, 1)],
            Pattern::Block => &[(0, 0), (0, 1), (1, 0), (1, 1)],
            Pattern::Beacon => &[
                (-2, -2),
                (-2, -1),
                (-1, -2),
                (-1, -1),
                (0, 0),
                (0, 1),
                (1, 0),
                (1, 1),
            ],
            Pattern::RPentomino => &[(-1, 0), (-1, 1), (0, -1), (0, 0), (1, 0)],
        }
    }
}

pub const DEFAULT_SPEED: i32 = 10;
pub const DEFAULT_SPEED_DELTA: i32 = 1;

/// Conway's Game of Life on a wrap-around board with a tick-driven run state
pub struct Life {
    pub grid: Grid<bool>,
    pub is_running: bool,
    /// Ticks between generations
    pub speed: i32,
    pub speed_delta: i32,
    /// Ticks remaining until the next generation
    pub time_left: i32,
    pub generation: u64,
    pub pattern: Pattern,
}

impl Life {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: Grid::new(width, height, false),
            is_running: false,
            speed: DEFAULT_SPEED,
            speed_delta: DEFAULT_SPEED_DELTA,
            time_left: DEFAULT_SPEED,
            generation: 0,
            pattern: Pattern::default(),
        }
    }

    pub fn with_speed(mut self, speed: i32, speed_delta: i32) -> Self {
        self.speed = speed;
        self.speed_delta = speed_delta;
        self.time_left = speed;
        self
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.grid.get(row, col).copied().unwrap_or(false)
    }

    /// Live cells among the 8 wrap-around neighbors
    pub fn live_neighbors(&self, row: usize, col: usize) -> usize {
        self.grid
            .neighbors_wrapped(row, col)
            .filter(|&(r, c)| self.is_alive(r, c))
            .count()
    }

    pub fn population(&self) -> usize {
        self.grid.iter().filter(|(_, alive)| **alive).count()
    }

    /// Compute the next generation from the current one and swap it in
    pub fn advance_generation(&mut self) {
        let mut next = Grid::new(self.grid.width(), self.grid.height(), false);
        next.set_view(self.grid.view());

        for ((row, col), &alive) in self.grid.iter() {
            let neighbors = self.live_neighbors(row, col);
            let next_alive = if alive {
                neighbors == 2 || neighbors == 3
            } else {
                neighbors == 3
            };
            if next_alive {
                next.set(row, col, true);
            }
        }

        self.grid = next;
        self.generation += 1;
        log::trace!("Generation {} population {}", self.generation, self.population());
    }

    /// Flip between running and paused
    pub fn toggle_running(&mut self) {
        self.is_running = !self.is_running;
        log::info!(
            "Life {} at generation {}",
            if self.is_running { "running" } else { "paused" },
            self.generation
        );
    }

    /// Add the speed delta; speed is the tick count per generation, so this
    /// lengthens the interval between generations
    pub fn increase_speed(&mut self) {
        self.speed += self.speed_delta;
        log::debug!("Life speed set to {}", self.speed);
    }

    /// Subtract the speed delta. Not clamped: at or below zero every tick advances.
    pub fn decrease_speed(&mut self) {
        self.speed -= self.speed_delta;
        log::debug!("Life speed set to {}", self.speed);
    }

    /// Advance the countdown by one external tick.
    /// Returns true when a generation was computed.
    pub fn tick(&mut self) -> bool {
        if !self.is_running {
            return false;
        }
        self.time_left -= 1;
        if self.time_left <= 0 {
            self.advance_generation();
            self.time_left = self.speed;
            return true;
        }
        false
    }

    /// Toggle a single cell; edits are refused while running
    pub fn on_click(&mut self, row: usize, col: usize) {
        if self.is_running {
            return;
        }
        if let Some(cell) = self.grid.get_mut(row, col) {
            *cell = !*cell;
        }
    }

    /// Advance exactly one generation while paused
    pub fn step_once(&mut self) {
        if !self.is_running {
            self.advance_generation();
        }
    }

    /// Kill every cell and restart the generation count
    pub fn clear(&mut self) {
        self.grid.fill(false);
        self.generation = 0;
        self.time_left = self.speed;
    }

    /// Bring the pattern's cells to life around the board center.
    /// Cells wrap around the edges like neighbors do. Ignored while running.
    pub fn place_pattern(&mut self, pattern: Pattern) -> bool {
        if self.is_running || self.grid.is_empty() {
            return false;
        }
        let (height, width) = (self.grid.height() as i32, self.grid.width() as i32);
        let (center_row, center_col) = (height / 2, width / 2);
        for &(dr, dc) in pattern.cells() {
            let row = (center_row + dr).rem_euclid(height) as usize;
            let col = (center_col + dc).rem_euclid(width) as usize;
            self.grid.set(row, col, true);
        }
        self.pattern = pattern;
        log::debug!("Placed {} pattern", pattern.name());
        true
    }
}

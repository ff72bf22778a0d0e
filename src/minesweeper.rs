use crate::grid::{Grid, View};
use rand::seq::index;
use rand::Rng;

/// State of a single minesweeper cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MineCell {
    Mine,
    Unopened,
    /// Revealed, holding the number of adjacent mines (0-8)
    Opened(u8),
}

/// Minesweeper board: mines are fixed at construction, cells only ever go
/// from `Unopened` to `Opened`
pub struct Minesweeper {
    grid: Grid<MineCell>,
    mines: usize,
    /// Built from explicit positions; resets keep the same mines
    fixed: bool,
}

impl Minesweeper {
    /// Create a board with `mines` randomly placed mines.
    /// Asking for at least as many mines as cells fills the whole board.
    pub fn new<R: Rng + ?Sized>(width: usize, height: usize, mines: usize, rng: &mut R) -> Self {
        let mut board = Self {
            grid: Grid::new(width, height, MineCell::Unopened),
            mines,
            fixed: false,
        };
        board.place_mines(rng);
        board
    }

    /// Create a board with mines at exactly the given (row, col) positions
    pub fn with_mines(width: usize, height: usize, positions: &[(usize, usize)]) -> Self {
        let mut grid = Grid::new(width, height, MineCell::Unopened);
        for &(row, col) in positions {
            grid.set(row, col, MineCell::Mine);
        }
        let mines = grid.iter().filter(|(_, cell)| **cell == MineCell::Mine).count();
        Self {
            grid,
            mines,
            fixed: true,
        }
    }

    fn place_mines<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let total = self.grid.len();
        if self.mines >= total {
            self.grid.fill(MineCell::Mine);
            return;
        }

        self.grid.fill(MineCell::Unopened);
        let width = self.grid.width();
        for idx in index::sample(rng, total, self.mines) {
            self.grid.set(idx / width, idx % width, MineCell::Mine);
        }
    }

    /// Start over. Random boards get a fresh layout with the same size and
    /// mine count; fixed layouts keep their mines and close every opened cell.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.fixed {
            let opened: Vec<_> = self
                .grid
                .iter()
                .filter(|(_, cell)| matches!(cell, MineCell::Opened(_)))
                .map(|(pos, _)| pos)
                .collect();
            for (row, col) in opened {
                self.grid.set(row, col, MineCell::Unopened);
            }
        } else {
            self.place_mines(rng);
        }
        log::info!(
            "New minesweeper board {}x{} with {} mines",
            self.grid.width(),
            self.grid.height(),
            self.mine_count()
        );
    }

    /// Read-only access to the cells
    pub fn grid(&self) -> &Grid<MineCell> {
        &self.grid
    }

    pub fn set_view(&mut self, view: View) {
        self.grid.set_view(view);
    }

    pub fn mine_count(&self) -> usize {
        self.mines.min(self.grid.len())
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<MineCell> {
        self.grid.get(row, col).copied()
    }

    /// Number of mines among the up to 8 in-bounds neighbors
    pub fn adjacent_mines(&self, row: usize, col: usize) -> u8 {
        self.grid
            .neighbors_bounded(row, col)
            .filter(|&(r, c)| self.grid.get(r, c) == Some(&MineCell::Mine))
            .count() as u8
    }

    /// Reveal (row, col) and flood outward through cells with no adjacent mines.
    ///
    /// The cell is set to its adjacent-mine count. When that count is zero every
    /// unopened neighbor is revealed the same way. Each cell is expanded at most
    /// once, so the work is bounded by the board size.
    pub fn open_cell(&mut self, row: usize, col: usize) {
        if !self.grid.in_bounds(row, col) {
            return;
        }

        let mut pending = vec![(row, col)];
        let mut opened = 0usize;
        let mut first = true;

        while let Some((r, c)) = pending.pop() {
            // A cell can be queued by several zero-count neighbors
            if !first && self.grid.get(r, c) != Some(&MineCell::Unopened) {
                continue;
            }
            first = false;

            let count = self.adjacent_mines(r, c);
            self.grid.set(r, c, MineCell::Opened(count));
            opened += 1;

            if count == 0 {
                pending.extend(
                    self.grid
                        .neighbors_bounded(r, c)
                        .filter(|&(nr, nc)| self.grid.get(nr, nc) == Some(&MineCell::Unopened)),
                );
            }
        }

        log::debug!("Opened {} cells starting at ({}, {})", opened, row, col);
    }

    /// Click handler: only unopened cells are revealed
    pub fn on_click(&mut self, row: usize, col: usize) {
        if self.cell(row, col) == Some(MineCell::Unopened) {
            self.open_cell(row, col);
        }
    }

    pub fn opened_count(&self) -> usize {
        self.grid
            .iter()
            .filter(|(_, cell)| matches!(cell, MineCell::Opened(_)))
            .count()
    }

    /// True once every non-mine cell has been revealed
    pub fn is_cleared(&self) -> bool {
        !self.grid.iter().any(|(_, cell)| *cell == MineCell::Unopened)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn diagonal_board() -> Minesweeper {
        let mines: Vec<_> = (0..10).map(|i| (i, i)).collect();
        Minesweeper::with_mines(10, 10, &mines)
    }

    #[test]
    fn test_random_placement_has_exact_mine_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = Minesweeper::new(10, 10, 10, &mut rng);
        let mines = board.grid.iter().filter(|(_, c)| **c == MineCell::Mine).count();
        assert_eq!(mines, 10);
        assert_eq!(board.mine_count(), 10);
        assert_eq!(board.opened_count(), 0);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = Minesweeper::new(12, 8, 20, &mut StdRng::seed_from_u64(42));
        let b = Minesweeper::new(12, 8, 20, &mut StdRng::seed_from_u64(42));
        assert_eq!(a.grid, b.grid);
    }

    #[test]
    fn test_too_many_mines_fills_board() {
        let mut rng = StdRng::seed_from_u64(1);
        for mines in [12, 13, 100] {
            let board = Minesweeper::new(4, 3, mines, &mut rng);
            assert!(board.grid.iter().all(|(_, c)| *c == MineCell::Mine));
            assert_eq!(board.mine_count(), 12);
        }
    }

    #[test]
    fn test_adjacent_mines_at_edges() {
        let board = Minesweeper::with_mines(3, 3, &[(0, 0), (0, 2), (2, 1)]);
        assert_eq!(board.adjacent_mines(1, 1), 3);
        assert_eq!(board.adjacent_mines(0, 1), 2);
        assert_eq!(board.adjacent_mines(2, 2), 1);
        assert_eq!(board.adjacent_mines(1, 0), 2);
    }

    #[test]
    fn test_open_cell_next_to_mine_does_not_expand() {
        let mut board = diagonal_board();
        board.open_cell(0, 1);
        assert_eq!(board.cell(0, 1), Some(MineCell::Opened(2)));
        assert_eq!(board.opened_count(), 1);
    }

    #[test]
    fn test_flood_fill_stops_at_mine_boundary() {
        let mut board = diagonal_board();
        // (0, 9) sits in the upper-right triangle, away from the diagonal
        board.open_cell(0, 9);

        for row in 0..10 {
            for col in 0..10 {
                let cell = board.cell(row, col).unwrap();
                // Reachable: the zero region (col >= row + 3), its border
                // (col == row + 2) and cells diagonally touching the zero region
                let reachable = col >= row + 2 || (col == row + 1 && (1..=7).contains(&row));
                if row == col {
                    assert_eq!(cell, MineCell::Mine);
                } else if reachable {
                    let expected = board.adjacent_mines(row, col);
                    assert_eq!(cell, MineCell::Opened(expected), "({}, {})", row, col);
                } else {
                    assert_eq!(cell, MineCell::Unopened, "({}, {})", row, col);
                }
            }
        }
        assert_eq!(board.cell(0, 5), Some(MineCell::Opened(0)));
        assert_eq!(board.cell(0, 2), Some(MineCell::Opened(1)));
        assert_eq!(board.cell(0, 1), Some(MineCell::Unopened));
        assert_eq!(board.cell(5, 4), Some(MineCell::Unopened));
    }

    #[test]
    fn test_flood_fill_opens_whole_empty_board() {
        let mut board = Minesweeper::with_mines(8, 6, &[]);
        board.open_cell(3, 4);
        assert!(board.grid.iter().all(|(_, c)| *c == MineCell::Opened(0)));
        assert!(board.is_cleared());
    }

    #[test]
    fn test_flood_fill_large_board_does_not_overflow_stack() {
        let mut board = Minesweeper::with_mines(400, 400, &[(399, 399)]);
        board.open_cell(0, 0);
        assert_eq!(board.opened_count(), 400 * 400 - 1);
        assert_eq!(board.cell(398, 398), Some(MineCell::Opened(1)));
        assert!(board.is_cleared());
    }

    #[test]
    fn test_click_ignores_mines_and_opened_cells() {
        let mut board = diagonal_board();
        board.on_click(4, 4);
        assert_eq!(board.cell(4, 4), Some(MineCell::Mine));

        board.on_click(0, 1);
        assert_eq!(board.opened_count(), 1);
        board.on_click(0, 1);
        assert_eq!(board.cell(0, 1), Some(MineCell::Opened(2)));
        assert_eq!(board.opened_count(), 1);

        board.on_click(20, 20);
        assert_eq!(board.opened_count(), 1);
    }

    #[test]
    fn test_reset_keeps_dimensions_and_count() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut board = Minesweeper::new(9, 9, 10, &mut rng);
        board.on_click(0, 0);
        board.reset(&mut rng);
        assert_eq!(board.opened_count(), 0);
        assert_eq!(board.grid.width(), 9);
        let mines = board.grid.iter().filter(|(_, c)| **c == MineCell::Mine).count();
        assert_eq!(mines, 10);
    }

    #[test]
    fn test_reset_fixed_layout_keeps_mines() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut board = diagonal_board();
        board.on_click(0, 9);
        assert!(board.opened_count() > 0);

        board.reset(&mut rng);
        assert_eq!(board.opened_count(), 0);
        for (row, col) in (0..10).map(|i| (i, i)) {
            assert_eq!(board.cell(row, col), Some(MineCell::Mine));
        }
        assert_eq!(board.grid().iter().filter(|(_, c)| **c == MineCell::Mine).count(), 10);
    }
}

/// Offsets of the 8-connected Moore neighborhood as (row, col) deltas
const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

/// Screen placement of a grid: offset of the board and the size of one cell.
///
/// Positions are measured in terminal cells. A grid cell `(row, col)` covers the
/// half-open pixel span `(left + col * cell_width, left + (col + 1) * cell_width]`
/// horizontally (and likewise vertically), so the pixel sitting exactly on the
/// offset belongs to no cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct View {
    pub left: i32,
    pub top: i32,
    pub cell_width: u16,
    pub cell_height: u16,
}

impl Default for View {
    fn default() -> Self {
        Self::square(10, 10, 30)
    }
}

impl View {
    pub fn new(left: i32, top: i32, cell_width: u16, cell_height: u16) -> Self {
        Self {
            left,
            top,
            cell_width: cell_width.max(1),
            cell_height: cell_height.max(1),
        }
    }

    /// View with equally sized square cells
    pub fn square(left: i32, top: i32, cell_size: u16) -> Self {
        Self::new(left, top, cell_size, cell_size)
    }

    /// First on-screen position (x, y) drawn for a cell
    pub fn cell_origin(&self, row: usize, col: usize) -> (i32, i32) {
        (
            self.left + col as i32 * self.cell_width as i32 + 1,
            self.top + row as i32 * self.cell_height as i32 + 1,
        )
    }
}

/// Integer `ceil(value / step)` for a positive step
fn ceil_div(value: i32, step: i32) -> i32 {
    let quotient = value / step;
    if value % step > 0 {
        quotient + 1
    } else {
        quotient
    }
}

/// Rectangular width x height board of cells stored row-major
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
    view: View,
}

impl<T: Clone> Grid<T> {
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
            view: View::default(),
        }
    }

    /// Overwrite every cell with `value`
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }
}

impl<T> Grid<T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        self.in_bounds(row, col).then(|| row * self.width + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.index(row, col).map(|idx| &self.cells[idx])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        match self.index(row, col) {
            Some(idx) => Some(&mut self.cells[idx]),
            None => None,
        }
    }

    /// Store `value` at (row, col); out-of-bounds writes are ignored
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        if let Some(cell) = self.get_mut(row, col) {
            *cell = value;
        }
    }

    /// Iterate every cell in row-major order as ((row, col), value)
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, cell)| ((idx / width, idx % width), cell))
    }

    /// Map a screen position to the (row, col) of the cell containing it.
    ///
    /// Returns `None` when the position lies outside the rendered board.
    pub fn cell_at(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        let col = ceil_div(x - self.view.left, self.view.cell_width as i32) - 1;
        let row = ceil_div(y - self.view.top, self.view.cell_height as i32) - 1;
        if col < 0 || row < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        self.in_bounds(row, col).then_some((row, col))
    }

    /// Up to 8 surrounding cells; edges do not wrap
    pub fn neighbors_bounded(
        &self,
        row: usize,
        col: usize,
    ) -> impl Iterator<Item = (usize, usize)> + '_ {
        MOORE_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr as isize)?;
            let c = col.checked_add_signed(dc as isize)?;
            self.in_bounds(r, c).then_some((r, c))
        })
    }

    /// Exactly 8 surrounding cells with toroidal wrap-around on both axes
    pub fn neighbors_wrapped(
        &self,
        row: usize,
        col: usize,
    ) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (height, width) = (self.height as i64, self.width as i64);
        MOORE_OFFSETS.iter().map(move |&(dr, dc)| {
            let r = (row as i64 + dr as i64).rem_euclid(height);
            let c = (col as i64 + dc as i64).rem_euclid(width);
            (r as usize, c as usize)
        })
    }
}

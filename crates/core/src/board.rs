//! Board module - manages the game grid
//!
//! The board is a 10x10 grid where each cell is empty or filled with a color.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (row, col), row 0 at the top, col 0 on the left.
//!
//! Full rows and full columns are both lines. Clearing empties the cells in
//! place; nothing shifts.

use std::fmt;

use arrayvec::ArrayVec;

use block_grid_types::{cell_index, Cell, CellIndex, Color, BOARD_SIZE, CELL_COUNT};

use crate::pieces::Shape;

const SIZE: usize = BOARD_SIZE as usize;

/// Result of a single [`Board::clear_lines`] pass
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineClear {
    /// Every emptied cell once, ascending
    pub cleared_cells: ArrayVec<CellIndex, CELL_COUNT>,
    /// Full rows found, ascending
    pub rows: ArrayVec<u8, SIZE>,
    /// Full columns found, ascending
    pub cols: ArrayVec<u8, SIZE>,
}

impl LineClear {
    /// Rows plus columns; an intersection cell still credits both lines
    pub fn lines_cleared(&self) -> u32 {
        (self.rows.len() + self.cols.len()) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.cols.is_empty()
    }
}

/// The game board - 10 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * SIZE + col)
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Calculate flat index from signed (row, col); `None` when off the board
    #[inline(always)]
    fn index(row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 {
            return None;
        }
        cell_index(row as usize, col as usize).map(usize::from)
    }

    /// Rows and columns on the board
    pub fn size(&self) -> u8 {
        BOARD_SIZE
    }

    /// Get cell at (row, col). Returns None if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_empty_at(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_filled(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= SIZE {
            return false;
        }
        let start = row * SIZE;
        self.cells[start..start + SIZE].iter().all(Option::is_some)
    }

    /// Check if a column is completely filled
    pub fn is_col_full(&self, col: usize) -> bool {
        if col >= SIZE {
            return false;
        }
        (0..SIZE).all(|row| self.cells[row * SIZE + col].is_some())
    }

    /// Whether `shape` fits with its top-left corner at (top_row, left_col).
    ///
    /// Every filled cell must land on an empty cell inside the board. The
    /// extent pre-check covers exactly the cells the per-cell loop would
    /// reject for bounds, so both paths agree.
    pub fn can_place(&self, top_row: i32, left_col: i32, shape: &Shape) -> bool {
        let (min_r, max_r, min_c, max_c) = shape.extent();
        let (top, left, size) = (top_row as i64, left_col as i64, SIZE as i64);
        if top + (min_r as i64) < 0
            || top + (max_r as i64) >= size
            || left + (min_c as i64) < 0
            || left + (max_c as i64) >= size
        {
            return false;
        }

        shape
            .offsets()
            .iter()
            .all(|&(i, j)| self.is_empty_at(top_row + i as i32, left_col + j as i32))
    }

    /// Commit `shape` with the given color.
    ///
    /// Returns false and leaves the board untouched when the placement is not
    /// legal.
    pub fn place(&mut self, top_row: i32, left_col: i32, shape: &Shape, color: Color) -> bool {
        if !self.can_place(top_row, left_col, shape) {
            return false;
        }

        for &(i, j) in shape.offsets() {
            self.set(top_row + i as i32, left_col + j as i32, Some(color));
        }

        true
    }

    /// Clear every full row and column.
    ///
    /// All lines are detected against the board as it was before this call,
    /// then emptied together.
    pub fn clear_lines(&mut self) -> LineClear {
        let mut result = LineClear::default();

        for line in 0..SIZE {
            if self.is_row_full(line) {
                result.rows.push(line as u8);
            }
            if self.is_col_full(line) {
                result.cols.push(line as u8);
            }
        }

        if result.is_empty() {
            return result;
        }

        let mut marked = [false; CELL_COUNT];
        for &row in &result.rows {
            let start = row as usize * SIZE;
            marked[start..start + SIZE].fill(true);
        }
        for &col in &result.cols {
            for row in 0..SIZE {
                marked[row * SIZE + col as usize] = true;
            }
        }

        for (idx, hit) in marked.iter().enumerate() {
            if *hit {
                self.cells[idx] = None;
                result.cleared_cells.push(idx as CellIndex);
            }
        }

        result
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        CELL_COUNT - self.filled_count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// One line per row, `#` for filled and `.` for empty
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(SIZE) {
            for cell in row {
                f.write_str(if cell.is_some() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

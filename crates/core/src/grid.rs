//! Grid module - the persistent playfield
//!
//! The grid is `rows x columns` cells, each either empty (`0`) or holding the
//! colour id of a locked piece. Storage is a flat row-major buffer sized once
//! at construction; nothing here reallocates after that.
//! Coordinates are (row, col) with row 0 at the top.

use crate::types::{Cell, EMPTY};

/// The game grid, row-major flat storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![EMPTY; rows * cols],
        }
    }

    /// Build a grid from explicit rows.
    ///
    /// Returns `None` if the rows are not all the same length.
    pub fn from_rows(rows: &[Vec<Cell>]) -> Option<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != cols) {
            return None;
        }
        Some(Self {
            rows: rows.len(),
            cols,
            cells: rows.iter().flatten().copied().collect(),
        })
    }

    /// Calculate flat index from signed (row, col)
    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if !self.in_bounds(row, col) {
            return None;
        }
        Some(row as usize * self.cols + col as usize)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.cols
    }

    /// Whether (row, col) lies inside `[0, rows) x [0, cols)`
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// Get cell at (row, col), `None` if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and non-empty
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(v) if v != EMPTY)
    }

    /// One row as a slice
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.rows || self.cols == 0 {
            return false;
        }
        self.row(row).iter().all(|&cell| cell != EMPTY)
    }

    /// Remove `row` and shift every row above it down by one, leaving an
    /// empty row at the top.
    pub fn collapse_row(&mut self, row: usize) {
        if row >= self.rows {
            return;
        }
        let width = self.cols;
        // copy_within handles the overlap between source and destination.
        self.cells.copy_within(0..row * width, width);
        self.cells[..width].fill(EMPTY);
    }

    /// Flat row-major cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        (0..self.rows).map(|r| self.row(r).to_vec()).collect()
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY).count()
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }
}

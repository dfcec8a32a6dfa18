use serde::Serialize;

use crate::piece::ActivePiece;
use crate::types::{Cell, EMPTY};

/// Falling piece as seen by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub row: i32,
    pub col: i32,
    pub mask: Vec<Vec<Cell>>,
}

impl ActiveSnapshot {
    /// Occupied cells in grid coordinates: (row, col, colour id)
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        self.mask.iter().enumerate().flat_map(move |(dr, line)| {
            line.iter()
                .enumerate()
                .filter(|&(_, &v)| v != EMPTY)
                .map(move |(dc, &v)| (self.row + dr as i32, self.col + dc as i32, v))
        })
    }
}

impl From<&ActivePiece> for ActiveSnapshot {
    fn from(value: &ActivePiece) -> Self {
        Self {
            row: value.row,
            col: value.col,
            mask: value.shape.to_rows(),
        }
    }
}

/// Read-only copy of everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    pub rows: usize,
    pub columns: usize,
    /// Row-major grid cells, `rows * columns` long
    pub grid: Vec<Cell>,
    /// `None` once the game is over
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub pieces_locked: u32,
    pub game_over: bool,
    pub seed: u32,
}

impl GameSnapshot {
    /// Grid cell at (row, col); out of range reads as empty
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        if row >= self.rows || col >= self.columns {
            return EMPTY;
        }
        self.grid[row * self.columns + col]
    }

    pub fn clear(&mut self) {
        self.rows = 0;
        self.columns = 0;
        self.grid.clear();
        self.active = None;
        self.score = 0;
        self.level = 0;
        self.lines = 0;
        self.pieces_locked = 0;
        self.game_over = false;
        self.seed = 0;
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            rows: 0,
            columns: 0,
            grid: Vec::new(),
            active: None,
            score: 0,
            level: 0,
            lines: 0,
            pieces_locked: 0,
            game_over: false,
            seed: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::SHAPES;

    #[test]
    fn test_active_snapshot_cells() {
        let piece = ActivePiece {
            shape: SHAPES[0],
            row: 3,
            col: 4,
        };
        let snap = ActiveSnapshot::from(&piece);
        let cells: Vec<_> = snap.cells().collect();
        assert_eq!(cells, vec![(3, 4, 1), (3, 5, 1), (3, 6, 1), (4, 5, 1)]);
    }

    #[test]
    fn test_cell_out_of_range_is_empty() {
        let snap = GameSnapshot::default();
        assert_eq!(snap.cell(5, 5), EMPTY);
    }
}

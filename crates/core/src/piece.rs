//! Active piece - the falling, player-controlled shape
//!
//! All operations take the piece by reference and return the next piece.
//! A blocked move or rotation returns the input unchanged; nothing here
//! reports an error.

use arrayvec::ArrayVec;

use crate::collision::collides;
use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::shapes::{self, ShapeMask, MASK_CAPACITY};
use crate::types::Cell;

/// Falling piece: a mask anchored by its top-left cell in grid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub shape: ShapeMask,
    pub row: i32,
    pub col: i32,
}

impl ActivePiece {
    /// Place `shape` at the top of a board `columns` wide, horizontally
    /// centred: `floor(columns / 2) - floor(width / 2)`.
    pub fn new(shape: ShapeMask, columns: usize) -> Self {
        Self {
            shape,
            row: 0,
            col: spawn_column(columns, shape.width()),
        }
    }

    /// Whether the piece overlaps a wall, the floor or a locked cell
    pub fn collides(&self, grid: &Grid) -> bool {
        collides(self.row, self.col, &self.shape, grid)
    }

    /// Occupied cells in grid coordinates: (row, col, colour id)
    pub fn cells(&self) -> ArrayVec<(i32, i32, Cell), MASK_CAPACITY> {
        self.shape
            .occupied()
            .iter()
            .map(|&(dr, dc, v)| (self.row + dr as i32, self.col + dc as i32, v))
            .collect()
    }
}

/// Leftmost column of a freshly spawned mask of the given width
pub fn spawn_column(columns: usize, mask_width: usize) -> i32 {
    (columns / 2) as i32 - (mask_width / 2) as i32
}

/// Sample a shape from the catalog and place it at the top of the board.
///
/// No collision check happens here; the caller probes for game over.
pub fn spawn(columns: usize, rng: &mut SimpleRng) -> ActivePiece {
    ActivePiece::new(shapes::sample(rng), columns)
}

/// Shift the piece by (`d_col`, `d_row`) if the target is free.
pub fn move_piece(piece: &ActivePiece, d_col: i32, d_row: i32, grid: &Grid) -> ActivePiece {
    let row = piece.row + d_row;
    let col = piece.col + d_col;
    if collides(row, col, &piece.shape, grid) {
        return *piece;
    }
    ActivePiece { row, col, ..*piece }
}

/// Rotate the mask a quarter turn in place, keeping the anchor.
///
/// There is no kick search: if the rotated mask does not fit at the same
/// anchor, the piece is returned as it was.
pub fn rotate_piece(piece: &ActivePiece, grid: &Grid) -> ActivePiece {
    let shape = piece.shape.rotated();
    if collides(piece.row, piece.col, &shape, grid) {
        return *piece;
    }
    ActivePiece { shape, ..*piece }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::SHAPES;

    #[test]
    fn test_spawn_column_centres_mask() {
        assert_eq!(spawn_column(10, 3), 4);
        assert_eq!(spawn_column(10, 2), 4);
        assert_eq!(spawn_column(10, 4), 3);
        assert_eq!(spawn_column(9, 3), 3);
    }

    #[test]
    fn test_new_piece_at_top() {
        let piece = ActivePiece::new(SHAPES[6], 10);
        assert_eq!(piece.row, 0);
        assert_eq!(piece.col, 3);
    }

    #[test]
    fn test_spawn_uses_catalog() {
        let mut rng = SimpleRng::new(5);
        let piece = spawn(10, &mut rng);
        assert!(SHAPES.contains(&piece.shape));
        assert_eq!(piece.row, 0);
        assert_eq!(piece.col, spawn_column(10, piece.shape.width()));
    }

    #[test]
    fn test_cells_are_absolute() {
        let piece = ActivePiece {
            shape: SHAPES[3],
            row: 2,
            col: 5,
        };
        let cells: Vec<_> = piece.cells().into_iter().collect();
        assert_eq!(cells, vec![(2, 5, 4), (2, 6, 4), (3, 5, 4), (3, 6, 4)]);
    }

    #[test]
    fn test_move_free_and_blocked() {
        let grid = Grid::new(20, 10);
        let piece = ActivePiece::new(SHAPES[3], 10);

        let moved = move_piece(&piece, 1, 0, &grid);
        assert_eq!((moved.row, moved.col), (0, 5));

        // Can't move above the top.
        let up = move_piece(&piece, 0, -1, &grid);
        assert_eq!(up, piece);
    }

    #[test]
    fn test_rotate_rejected_keeps_mask() {
        let grid = Grid::new(20, 10);
        // Horizontal bar on the bottom row cannot stand up in place.
        let piece = ActivePiece {
            shape: SHAPES[6],
            row: 19,
            col: 3,
        };
        assert_eq!(rotate_piece(&piece, &grid), piece);
    }

    #[test]
    fn test_rotate_accepted_changes_mask_only() {
        let grid = Grid::new(20, 10);
        let piece = ActivePiece::new(SHAPES[6], 10);
        let rotated = rotate_piece(&piece, &grid);
        assert_eq!((rotated.row, rotated.col), (piece.row, piece.col));
        assert_eq!((rotated.shape.height(), rotated.shape.width()), (4, 1));
    }
}

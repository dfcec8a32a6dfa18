//! Shapes module - the seven piece masks and their rotation
//!
//! A mask is a small rectangular matrix of cells: `0` is empty, any other
//! value is the colour id written into the grid when the piece locks.
//! Masks are stored inline (no heap) and are `Copy`.

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::types::{Cell, EMPTY, MAX_MASK_DIM, SHAPE_COUNT};

/// Maximum number of cells in a mask
pub const MASK_CAPACITY: usize = MAX_MASK_DIM * MAX_MASK_DIM;

/// An occupied mask cell: (row offset, column offset, colour id)
pub type MaskCell = (u8, u8, Cell);

/// Rectangular cell-occupancy pattern of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMask {
    rows: u8,
    cols: u8,
    /// Row-major, only the first `rows * cols` entries are meaningful
    cells: [Cell; MASK_CAPACITY],
}

impl ShapeMask {
    /// Build a mask from a fixed-size matrix.
    ///
    /// Evaluated at compile time for the catalog, so an oversized mask is a
    /// build error rather than a runtime one.
    pub const fn from_rows<const R: usize, const C: usize>(rows: [[Cell; C]; R]) -> Self {
        assert!(R > 0 && C > 0, "mask must not be empty");
        assert!(R <= MAX_MASK_DIM && C <= MAX_MASK_DIM, "mask too large");

        let mut cells = [EMPTY; MASK_CAPACITY];
        let mut r = 0;
        while r < R {
            let mut c = 0;
            while c < C {
                cells[r * C + c] = rows[r][c];
                c += 1;
            }
            r += 1;
        }

        Self {
            rows: R as u8,
            cols: C as u8,
            cells,
        }
    }

    /// Number of rows in the mask
    pub fn height(&self) -> usize {
        self.rows as usize
    }

    /// Number of columns in the mask
    pub fn width(&self) -> usize {
        self.cols as usize
    }

    /// Cell at (row, col), `None` outside the mask
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.height() || col >= self.width() {
            return None;
        }
        Some(self.cells[row * self.width() + col])
    }

    /// All occupied cells, in row-major order.
    pub fn occupied(&self) -> ArrayVec<MaskCell, MASK_CAPACITY> {
        let mut out = ArrayVec::new();
        for r in 0..self.rows {
            for c in 0..self.cols {
                let v = self.cells[r as usize * self.width() + c as usize];
                if v != EMPTY {
                    out.push((r, c, v));
                }
            }
        }
        out
    }

    /// The mask as a list of rows (for tests, snapshots and display)
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        (0..self.height())
            .map(|r| self.cells[r * self.width()..(r + 1) * self.width()].to_vec())
            .collect()
    }

    /// Quarter turn: transpose, then reverse the row order.
    ///
    /// `new[i][j] = old[j][old_cols - 1 - i]`; the result has the old width
    /// as its height and vice versa.
    pub fn rotated(&self) -> Self {
        let old_rows = self.height();
        let old_cols = self.width();
        let mut cells = [EMPTY; MASK_CAPACITY];

        for i in 0..old_cols {
            for j in 0..old_rows {
                cells[i * old_rows + j] = self.cells[j * old_cols + (old_cols - 1 - i)];
            }
        }

        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

/// The piece catalog, indexed 0-6 (T, S, Z, O, J, L and the 4-wide bar).
pub const SHAPES: [ShapeMask; SHAPE_COUNT] = [
    ShapeMask::from_rows([[1, 1, 1], [0, 1, 0]]),
    ShapeMask::from_rows([[0, 2, 2], [2, 2, 0]]),
    ShapeMask::from_rows([[3, 3, 0], [0, 3, 3]]),
    ShapeMask::from_rows([[4, 4], [4, 4]]),
    ShapeMask::from_rows([[5, 0, 0], [5, 5, 5]]),
    ShapeMask::from_rows([[0, 0, 6], [6, 6, 6]]),
    ShapeMask::from_rows([[7, 7, 7, 7]]),
];

/// Widest mask in the catalog
pub fn max_shape_width() -> usize {
    SHAPES.iter().map(ShapeMask::width).max().unwrap_or(0)
}

/// Draw one catalog mask uniformly at random (repeats allowed).
pub fn sample(rng: &mut SimpleRng) -> ShapeMask {
    SHAPES[rng.next_range(SHAPE_COUNT as u32) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_masks_are_well_formed() {
        for (i, shape) in SHAPES.iter().enumerate() {
            let cells = shape.occupied();
            assert_eq!(cells.len(), 4, "shape {} should have four cells", i);
            // Colour id matches the catalog position.
            assert!(cells.iter().all(|&(_, _, v)| v as usize == i + 1));
        }
    }

    #[test]
    fn test_catalog_dimensions() {
        let dims: Vec<(usize, usize)> = SHAPES.iter().map(|s| (s.height(), s.width())).collect();
        assert_eq!(
            dims,
            vec![(2, 3), (2, 3), (2, 3), (2, 2), (2, 3), (2, 3), (1, 4)]
        );
        assert_eq!(max_shape_width(), 4);
    }

    #[test]
    fn test_rotate_j_matches_transpose_then_reverse() {
        let j = SHAPES[4];
        assert_eq!(j.rotated().to_rows(), vec![vec![0, 5], vec![0, 5], vec![5, 5]]);
    }

    #[test]
    fn test_rotate_bar_turns_vertical() {
        let bar = SHAPES[6].rotated();
        assert_eq!((bar.height(), bar.width()), (4, 1));
        assert_eq!(bar.to_rows(), vec![vec![7], vec![7], vec![7], vec![7]]);
    }

    #[test]
    fn test_four_rotations_are_identity() {
        for shape in SHAPES {
            let back = shape.rotated().rotated().rotated().rotated();
            assert_eq!(back, shape);
        }
    }

    #[test]
    fn test_square_is_rotation_invariant() {
        assert_eq!(SHAPES[3].rotated(), SHAPES[3]);
    }

    #[test]
    fn test_get_out_of_range() {
        let t = SHAPES[0];
        assert_eq!(t.get(0, 0), Some(1));
        assert_eq!(t.get(1, 0), Some(0));
        assert_eq!(t.get(2, 0), None);
        assert_eq!(t.get(0, 3), None);
    }

    #[test]
    fn test_sample_draws_every_shape() {
        let mut rng = SimpleRng::new(2024);
        let mut seen = [false; SHAPE_COUNT];
        for _ in 0..500 {
            let shape = sample(&mut rng);
            let idx = SHAPES.iter().position(|s| *s == shape).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}

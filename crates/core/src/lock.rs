//! Lock & clear - committing a piece into the grid and removing full rows

use crate::grid::Grid;
use crate::piece::ActivePiece;

/// Write every occupied cell of `piece` into `grid` using the mask's colour
/// id. Only the cells under the mask change.
///
/// The caller must already have backed the piece up to a collision-free
/// position; cells that would land outside the grid are skipped.
pub fn lock(piece: &ActivePiece, grid: &mut Grid) {
    for (row, col, color) in piece.cells() {
        let written = grid.set(row, col, color);
        debug_assert!(written, "locked cell ({}, {}) outside the grid", row, col);
    }
}

/// Remove every complete row, inserting an empty row at the top for each,
/// and return how many were removed.
///
/// Rows are scanned bottom to top. After a removal the same index is checked
/// again, because the row that slid into it has not been examined yet.
pub fn clear_completed_rows(grid: &mut Grid) -> usize {
    let mut cleared = 0;
    let mut row = grid.rows();

    while row > 0 {
        if grid.is_row_full(row - 1) {
            grid.collapse_row(row - 1);
            cleared += 1;
        } else {
            row -= 1;
        }
    }

    if cleared > 0 {
        log::debug!("cleared {} row(s)", cleared);
    }
    cleared
}

//! Collision detection - the single placement predicate
//!
//! Movement, rotation, gravity and the game-over probe all go through
//! [`collides`]; there is no second copy of this rule anywhere.

use crate::grid::Grid;
use crate::shapes::ShapeMask;

/// True if placing `mask` with its top-left cell at (`row`, `col`) would put
/// any occupied mask cell outside the grid or onto an occupied grid cell.
pub fn collides(row: i32, col: i32, mask: &ShapeMask, grid: &Grid) -> bool {
    mask.occupied().iter().any(|&(dr, dc, _)| {
        let r = row + dr as i32;
        let c = col + dc as i32;
        !grid.in_bounds(r, c) || grid.is_occupied(r, c)
    })
}

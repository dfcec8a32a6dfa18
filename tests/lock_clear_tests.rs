//! Locking pieces and clearing rows

use blockfall::core::{clear_completed_rows, lock, ActivePiece, Grid, SHAPES};

fn fill_row_except(grid: &mut Grid, row: i32, gap: i32) {
    for col in 0..grid.columns() as i32 {
        if col != gap {
            grid.set(row, col, 2);
        }
    }
}

#[test]
fn test_filling_the_gap_clears_bottom_row() {
    let mut grid = Grid::new(20, 10);
    fill_row_except(&mut grid, 19, 0);

    // Upright bar dropped into the gap at column 0.
    let piece = ActivePiece {
        shape: SHAPES[6].rotated(),
        row: 16,
        col: 0,
    };
    lock(&piece, &mut grid);
    assert!(grid.is_row_full(19));

    let before = grid.to_rows();
    assert_eq!(clear_completed_rows(&mut grid), 1);

    let after = grid.to_rows();
    assert!(after[0].iter().all(|&c| c == 0));
    assert_eq!(&after[1..20], &before[0..19]);
}

#[test]
fn test_lock_keeps_colour_id() {
    let mut grid = Grid::new(20, 10);
    let piece = ActivePiece {
        shape: SHAPES[5],
        row: 18,
        col: 2,
    };
    lock(&piece, &mut grid);

    assert_eq!(grid.get(18, 4), Some(6));
    assert_eq!(grid.get(19, 2), Some(6));
    assert_eq!(grid.get(18, 2), Some(0));
    assert_eq!(grid.occupied_count(), 4);
}

#[test]
fn test_stacked_full_rows_clear_together() {
    let mut grid = Grid::new(6, 4);
    grid.set(1, 1, 5);
    for row in 2..6 {
        fill_row_except(&mut grid, row, -1);
    }

    assert_eq!(clear_completed_rows(&mut grid), 4);
    assert_eq!(grid.occupied_count(), 1);
    assert_eq!(grid.get(5, 1), Some(5));
}

#[test]
fn test_full_rows_separated_by_partial_row() {
    let mut grid = Grid::new(5, 3);
    fill_row_except(&mut grid, 4, -1);
    fill_row_except(&mut grid, 3, 1);
    fill_row_except(&mut grid, 2, -1);

    assert_eq!(clear_completed_rows(&mut grid), 2);
    assert_eq!(grid.row(4), &[2, 0, 2]);
    assert_eq!(grid.occupied_count(), 2);
}

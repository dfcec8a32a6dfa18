//! Grid tests - storage, bounds and row collapse

use blockfall::core::Grid;
use blockfall::types::{BOARD_COLUMNS, BOARD_ROWS, EMPTY};

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new(BOARD_ROWS as usize, BOARD_COLUMNS as usize);
    assert_eq!(grid.rows(), 20);
    assert_eq!(grid.columns(), 10);

    for row in 0..20 {
        for col in 0..10 {
            assert_eq!(grid.get(row, col), Some(EMPTY), "cell ({}, {})", row, col);
        }
    }
    assert_eq!(grid.occupied_count(), 0);
}

#[test]
fn test_grid_get_out_of_bounds() {
    let grid = Grid::new(20, 10);

    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(0, -1), None);
    assert_eq!(grid.get(20, 0), None);
    assert_eq!(grid.get(0, 10), None);
    assert!(!grid.is_occupied(-1, -1));
}

#[test]
fn test_grid_set_and_get() {
    let mut grid = Grid::new(20, 10);

    assert!(grid.set(10, 5, 1));
    assert_eq!(grid.get(10, 5), Some(1));
    assert!(grid.is_occupied(10, 5));

    assert!(grid.set(10, 5, EMPTY));
    assert!(!grid.is_occupied(10, 5));

    assert!(!grid.set(20, 0, 3));
    assert_eq!(grid.occupied_count(), 0);
}

#[test]
fn test_grid_from_rows() {
    let grid = Grid::from_rows(&[vec![0, 1, 0], vec![2, 2, 2]]).unwrap();
    assert_eq!(grid.rows(), 2);
    assert_eq!(grid.columns(), 3);
    assert!(!grid.is_row_full(0));
    assert!(grid.is_row_full(1));
    assert_eq!(grid.row(0), &[0, 1, 0]);

    assert!(Grid::from_rows(&[vec![0, 1], vec![0]]).is_none());
}

#[test]
fn test_collapse_row_shifts_everything_above() {
    let mut grid = Grid::from_rows(&[
        vec![1, 0, 0],
        vec![0, 2, 0],
        vec![3, 3, 3],
        vec![0, 0, 4],
    ])
    .unwrap();

    grid.collapse_row(2);

    assert_eq!(
        grid.to_rows(),
        vec![vec![0, 0, 0], vec![1, 0, 0], vec![0, 2, 0], vec![0, 0, 4]]
    );
}

#[test]
fn test_zero_width_grid_has_no_full_rows() {
    let grid = Grid::new(4, 0);
    assert!(!grid.is_row_full(0));
}

//! Piece tests - spawn placement, movement and rotation against a grid

use blockfall::core::{collides, move_piece, rotate_piece, spawn, ActivePiece, Grid, SimpleRng, SHAPES};

const BAR: usize = 6;

#[test]
fn test_spawn_is_centred_at_top() {
    let mut rng = SimpleRng::new(99);
    for _ in 0..50 {
        let piece = spawn(10, &mut rng);
        assert_eq!(piece.row, 0);
        assert_eq!(piece.col, 5 - (piece.shape.width() / 2) as i32);
    }
}

#[test]
fn test_bar_at_right_edge_cannot_move_right() {
    let grid = Grid::new(20, 10);
    let piece = ActivePiece {
        shape: SHAPES[BAR],
        row: 0,
        col: 10 - 3,
    };

    assert!(collides(0, 8, &piece.shape, &grid));
    assert_eq!(move_piece(&piece, 1, 0, &grid), piece);
}

#[test]
fn test_move_left_until_wall() {
    let grid = Grid::new(20, 10);
    let mut piece = ActivePiece::new(SHAPES[3], 10);

    for _ in 0..20 {
        piece = move_piece(&piece, -1, 0, &grid);
    }
    assert_eq!(piece.col, 0);
}

#[test]
fn test_soft_drop_stops_on_stack() {
    let mut grid = Grid::new(20, 10);
    for col in 0..10 {
        grid.set(15, col, 2);
    }

    let mut piece = ActivePiece::new(SHAPES[3], 10);
    for _ in 0..30 {
        piece = move_piece(&piece, 0, 1, &grid);
    }
    // The 2-tall square rests on row 15.
    assert_eq!(piece.row, 13);
}

#[test]
fn test_rotate_bar_upright() {
    let grid = Grid::new(20, 10);
    let piece = ActivePiece {
        shape: SHAPES[BAR],
        row: 0,
        col: 3,
    };

    let turned = rotate_piece(&piece, &grid);
    assert_eq!(turned.shape.height(), 4);
    assert_eq!(turned.shape.width(), 1);
    assert_eq!((turned.row, turned.col), (0, 3));
}

#[test]
fn test_rotation_rejected_near_floor() {
    let grid = Grid::new(20, 10);
    let piece = ActivePiece {
        shape: SHAPES[BAR],
        row: 19,
        col: 3,
    };

    // Upright the bar would reach row 22.
    assert_eq!(rotate_piece(&piece, &grid), piece);
}

#[test]
fn test_four_rotations_restore_every_shape() {
    let grid = Grid::new(20, 10);
    for shape in SHAPES {
        let start = ActivePiece { shape, row: 5, col: 4 };
        let mut piece = start;
        for _ in 0..4 {
            piece = rotate_piece(&piece, &grid);
        }
        assert_eq!(piece, start);
    }
}

#[test]
fn test_o_rotation_is_identity() {
    let o = SHAPES[3];
    assert_eq!(o.rotated(), o);
}

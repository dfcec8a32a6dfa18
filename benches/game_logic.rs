use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::{
    clear_completed_rows, move_piece, rotate_piece, spawn, ActivePiece, GameSnapshot, GameState,
    Grid, SimpleRng, SHAPES,
};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if state.game_over() {
                state.restart();
            }
            black_box(state.tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut grid = Grid::new(20, 10);
            for row in 16..20 {
                for col in 0..10 {
                    grid.set(row, col, 7);
                }
            }
            black_box(clear_completed_rows(&mut grid));
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("spawn_piece", |b| {
        b.iter(|| black_box(spawn(black_box(10), &mut rng)))
    });
}

fn bench_move(c: &mut Criterion) {
    let grid = Grid::new(20, 10);
    let piece = ActivePiece::new(SHAPES[0], 10);

    c.bench_function("move_piece", |b| {
        b.iter(|| black_box(move_piece(black_box(&piece), 1, 0, &grid)))
    });
}

fn bench_rotate(c: &mut Criterion) {
    let grid = Grid::new(20, 10);
    let piece = ActivePiece::new(SHAPES[6], 10);

    c.bench_function("rotate_piece", |b| {
        b.iter(|| black_box(rotate_piece(black_box(&piece), &grid)))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = GameState::new(12345);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| state.snapshot_into(black_box(&mut snap)))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_spawn,
    bench_move,
    bench_rotate,
    bench_snapshot
);
criterion_main!(benches);

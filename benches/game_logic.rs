use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetris_core::core::{canonical_shape, Board, GameState};
use tetris_core::types::PieceKind;

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            state.tick(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            board.clear_full_rows();
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let shape = canonical_shape(PieceKind::T);

    c.bench_function("rotate_cw", |b| {
        b.iter(|| {
            black_box(&shape).rotated_cw();
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("snapshot", |b| {
        b.iter(|| {
            black_box(state.snapshot());
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_rotate,
    bench_snapshot
);
criterion_main!(benches);

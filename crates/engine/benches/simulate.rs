use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cascade_core::{Board, Rotation, ShapeKind};
use cascade_engine::{enumerate_drops, simulate_drop};

fn bench_enumerate_drops(c: &mut Criterion) {
    let board = Board::default();

    let shapes = [
        (ShapeKind::I, "I"),
        (ShapeKind::O, "O"),
        (ShapeKind::T, "T"),
        (ShapeKind::S, "S"),
        (ShapeKind::Z, "Z"),
        (ShapeKind::J, "J"),
        (ShapeKind::L, "L"),
    ];

    for (shape, name) in shapes {
        c.bench_function(&format!("enumerate_drops_{}", name), |b| {
            b.iter(|| enumerate_drops(black_box(&board), black_box(shape)))
        });
    }
}

fn bench_simulate_drop(c: &mut Criterion) {
    let mut board = Board::default();
    for x in 0..Board::WIDTH {
        for y in (20 - (x % 3))..Board::HEIGHT {
            board.set(x, y, Some(ShapeKind::L));
        }
    }

    c.bench_function("simulate_drop_t_north", |b| {
        b.iter(|| {
            simulate_drop(
                black_box(&board),
                black_box(ShapeKind::T),
                black_box(Rotation::North),
                black_box(4),
            )
        })
    });
}

criterion_group!(benches, bench_enumerate_drops, bench_simulate_drop);
criterion_main!(benches);

use criterion::{Criterion, criterion_group, criterion_main};
use minesweeper_core::*;
use std::hint::black_box;

const TIERS: [(&str, Coord2, CellCount); 3] = [
    ("beginner", (9, 9), 10),
    ("intermediate", (16, 16), 40),
    ("expert", (16, 30), 99),
];

fn bench_reset(c: &mut Criterion) {
    for (name, size, mines) in TIERS {
        let config = GameConfig::new(size, mines).unwrap();
        let mut generator = RandomMineGenerator::seeded(1337);
        let mut board = Board::new_with(config, &mut generator).unwrap();

        c.bench_function(&format!("reset/{name}"), |b| {
            b.iter(|| {
                board.reset_with(black_box(config), &mut generator).unwrap();
                black_box(board.mine_count())
            })
        });
    }
}

fn bench_flood_reveal(c: &mut Criterion) {
    let config = GameConfig::new((Coord::MAX, Coord::MAX), 0).unwrap();
    let empty = Board::new_with(config, &mut RandomMineGenerator::seeded(0)).unwrap();

    c.bench_function("reveal/flood_255x255", |b| {
        b.iter_batched(
            || empty.clone(),
            |mut board| black_box(board.reveal_tile((127, 127))),
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_reset, bench_flood_reveal);
criterion_main!(benches);

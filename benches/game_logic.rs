use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_snake::core::{classify, FruitPlacement, FruitSpawner, GameConfig, GameSnapshot, GameState};
use tui_snake::term::{FrameBuffer, GameView, Viewport};
use tui_snake::types::{Cell, Direction};

/// A long snake zig-zagging down the left half of the classic board.
fn long_snake() -> Vec<Cell> {
    let mut body = Vec::new();
    for row in 0..20i16 {
        let cols: Vec<i16> = if row % 2 == 0 {
            (0..20).rev().collect()
        } else {
            (0..20).collect()
        };
        body.extend(cols.into_iter().map(|c| Cell::new(row, c)));
    }
    body.reverse();
    body
}

fn bench_tick(c: &mut Criterion) {
    c.bench_function("game_tick_100ms", |b| {
        b.iter_batched(
            || {
                let mut state = GameState::new(12345);
                state.start();
                state
            },
            |mut state| {
                for _ in 0..20 {
                    black_box(state.tick(black_box(100)));
                }
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_classify_long_body(c: &mut Criterion) {
    let body = long_snake();
    let candidate = Cell::new(39, 39);
    c.bench_function("classify_400_cells", |b| {
        b.iter(|| classify(40, black_box(&body), Cell::new(0, 39), black_box(candidate)))
    });
}

fn bench_fruit_spawn(c: &mut Criterion) {
    let mut anywhere = FruitSpawner::new(7, FruitPlacement::Anywhere);
    c.bench_function("spawn_fruit_anywhere", |b| b.iter(|| anywhere.spawn(black_box(40))));

    let config = GameConfig::default().with_snake(long_snake(), Direction::Down);
    let state = GameState::with_config(config).unwrap();
    let mut avoid = FruitSpawner::new(7, FruitPlacement::AvoidSnake);
    c.bench_function("spawn_fruit_avoid_snake", |b| {
        b.iter(|| avoid.spawn_for(black_box(state.grid())))
    });
}

fn bench_snapshot_and_render(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let mut snap = GameSnapshot::default();
    c.bench_function("snapshot_into", |b| b.iter(|| state.snapshot_into(black_box(&mut snap))));

    let view = GameView::default();
    let vp = Viewport::new(120, 45);
    let mut fb = FrameBuffer::new(vp.width, vp.height);
    c.bench_function("render_into_120x45", |b| {
        b.iter(|| view.render_into(black_box(&snap), vp, &mut fb))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_classify_long_body,
    bench_fruit_spawn,
    bench_snapshot_and_render
);
criterion_main!(benches);

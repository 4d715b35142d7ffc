use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_snake::core::{FoodSpawner, GameConfig, GameSnapshot, GameState, Grid, SimpleRng, Snake};
use tui_snake::term::{FrameBuffer, GameView, Viewport};
use tui_snake::types::{Cell, Direction, GameAction};

fn bench_step(c: &mut Criterion) {
    let mut state = GameState::new(GameConfig::default().with_seed(12345)).unwrap();
    let turns = [
        Direction::North,
        Direction::West,
        Direction::South,
        Direction::East,
    ];
    let mut i = 0usize;

    c.bench_function("step", |b| {
        b.iter(|| {
            if state.is_ended() {
                state.restart().unwrap();
            }
            i = i.wrapping_add(1);
            if i % 4 == 0 {
                state.apply_action(GameAction::Turn(turns[(i / 4) % 4])).unwrap();
            }
            black_box(state.step());
        })
    });
}

fn bench_respawn_crowded(c: &mut Criterion) {
    // A 20x20 grid with all but the last row taken forces the fallback scan.
    let grid = Grid::new(20);
    let mut cells = Vec::new();
    for gz in (-9..10).rev() {
        if gz % 2 != 0 {
            cells.extend((-10..10).map(|gx| Cell::new(gx, gz)));
        } else {
            cells.extend((-10..10).rev().map(|gx| Cell::new(gx, gz)));
        }
    }
    let snake = Snake::from_cells(&cells).unwrap();
    let spawner = FoodSpawner::default();
    let mut rng = SimpleRng::new(7);

    c.bench_function("respawn_crowded", |b| {
        b.iter(|| black_box(spawner.respawn(&grid, &snake, &mut rng).unwrap()))
    });
}

fn bench_snapshot_and_render(c: &mut Criterion) {
    let state = GameState::new(GameConfig::default()).unwrap();
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            black_box(snap.fingerprint());
        })
    });

    c.bench_function("render_into_80x24", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_step,
    bench_respawn_crowded,
    bench_snapshot_and_render
);
criterion_main!(benches);

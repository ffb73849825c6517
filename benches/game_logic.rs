use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_eggs::assets;
use tui_eggs::core::{step, Cell, Egg, EggGrid, GameState, Screen};
use tui_eggs::types::{InputSample, EGG_GLYPHS, GRID_HEIGHT, GRID_WIDTH};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(&assets::builtin(), 12345).unwrap();

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if state.game_over() {
                state.restart();
            }
            state.tick(black_box(InputSample::default()));
        })
    });
}

fn bench_step_busy_grid(c: &mut Criterion) {
    // Every other cell above the bottom row holds an egg.
    let mut template = EggGrid::new();
    for y in 0..GRID_HEIGHT as i16 - 1 {
        for x in (0..GRID_WIDTH as i16).step_by(2) {
            template.set(x, y, Cell::Egg(Egg::new(EGG_GLYPHS)));
        }
    }

    c.bench_function("step_busy_grid", |b| {
        b.iter(|| {
            let mut grid = template.clone();
            black_box(step(&mut grid));
        })
    });
}

fn bench_compose(c: &mut Criterion) {
    let mut state = GameState::new(&assets::builtin(), 12345).unwrap();
    for _ in 0..200 {
        state.tick(InputSample::default());
    }
    let mut screen = Screen::new();

    c.bench_function("compose_frame", |b| {
        b.iter(|| {
            state.compose(black_box(&mut screen));
        })
    });
}

criterion_group!(benches, bench_tick, bench_step_busy_grid, bench_compose);
criterion_main!(benches);

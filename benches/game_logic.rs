use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use tui_arcade::core::{PongState, SnakeState};
use tui_arcade::term::{encode_diff_into, PongView, SnakeView, View, Viewport};

fn bench_pong_tick(c: &mut Criterion) {
    let mut state = PongState::new(120, 40);

    c.bench_function("pong_tick", |b| {
        b.iter(|| {
            state.tick();
            black_box(state.ball().pos);
        })
    });
}

fn bench_snake_tick(c: &mut Criterion) {
    // A fresh snake survives five ticks heading up; measure a burst of them.
    c.bench_function("snake_tick_x5", |b| {
        b.iter_batched(
            || SnakeState::new(12345),
            |mut state| {
                for _ in 0..5 {
                    state.tick();
                }
                state
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_render(c: &mut Criterion) {
    let viewport = Viewport::new(120, 40);
    let pong = PongState::new(120, 40);
    let snake = SnakeState::new(12345);
    let mut fb = PongView.render(&pong, viewport);

    c.bench_function("pong_render_into", |b| {
        b.iter(|| PongView.render_into(black_box(&pong), viewport, &mut fb))
    });
    c.bench_function("snake_render_into", |b| {
        b.iter(|| SnakeView.render_into(black_box(&snake), viewport, &mut fb))
    });
}

fn bench_diff(c: &mut Criterion) {
    let viewport = Viewport::new(120, 40);
    let mut state = PongState::new(120, 40);
    let prev = PongView.render(&state, viewport);
    state.tick();
    let next = PongView.render(&state, viewport);
    let mut out = Vec::with_capacity(64 * 1024);

    c.bench_function("encode_diff_one_tick", |b| {
        b.iter(|| {
            out.clear();
            encode_diff_into(&prev, &next, &mut out).unwrap();
            black_box(out.len());
        })
    });
}

criterion_group!(
    benches,
    bench_pong_tick,
    bench_snake_tick,
    bench_render,
    bench_diff
);
criterion_main!(benches);

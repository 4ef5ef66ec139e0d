use criterion::{black_box, criterion_group, criterion_main, Criterion};
use totals_core::clock::parse_clock;
use totals_core::game_state::GameState;
use totals_core::projection::{project_final_total, project_halftime_total};

fn crunch_time_state() -> GameState {
    GameState {
        score_a: 61,
        score_b: 58,
        time_left: 2.4,
        fouls_a: 8,
        fouls_b: 7,
        bonus_a: true,
        bonus_b: false,
        timeouts_a: 2,
        timeouts_b: 1,
        seed_a: 3,
        seed_b: 6,
        round: 4,
    }
}

fn bench_project_final_total(c: &mut Criterion) {
    let state = crunch_time_state();

    c.bench_function("project_final_total", |b| {
        b.iter(|| project_final_total(black_box(&state)))
    });
}

fn bench_project_halftime_total(c: &mut Criterion) {
    let state = crunch_time_state();

    c.bench_function("project_halftime_total", |b| {
        b.iter(|| project_halftime_total(black_box(&state)))
    });
}

fn bench_parse_clock(c: &mut Criterion) {
    c.bench_function("parse_clock", |b| b.iter(|| parse_clock(black_box("12:34"))));
}

criterion_group!(
    benches,
    bench_project_final_total,
    bench_project_halftime_total,
    bench_parse_clock
);
criterion_main!(benches);

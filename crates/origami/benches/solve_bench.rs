//! End-to-end solve benchmark over sampled convex targets.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use origami::geom::rand::{draw_target_radial, ReplayToken, TargetCfg};
use origami::prelude::*;

fn bench_solve(c: &mut Criterion) {
    let targets: Vec<Polygon> = (0..8)
        .map(|index| {
            draw_target_radial(TargetCfg::default(), ReplayToken { seed: 3, index })
                .expect("target")
        })
        .collect();

    c.bench_function("solve_sampled_octagons", |b| {
        b.iter(|| {
            for target in &targets {
                let state = solve(black_box(target), SolveCfg::default()).expect("solves");
                black_box(state.fragments.len());
            }
        })
    });

    let triangle = Polygon::new(vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(0.0, 1.0),
    ]);
    c.bench_function("solve_right_triangle", |b| {
        b.iter(|| solve(black_box(&triangle), SolveCfg::default()).expect("solves"))
    });
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);

//! Benchmarks for braid tracking and SVG rendering.

use braid_visualiser::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn benchmark_tracking(c: &mut Criterion) {
    let mut group = c.benchmark_group("braid_tracking");
    for &len in &[16usize, 256, 4096] {
        let mut rng = StdRng::seed_from_u64(len as u64);
        let word = random_word(12, len, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(len), &word, |b, word| {
            b.iter(|| Braid::new(black_box(12), black_box(word)));
        });
    }
    group.finish();
}

fn benchmark_rendering(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let word = random_word(8, 64, &mut rng);
    let braid = Braid::new(8, &word).unwrap();
    let config = DrawConfig::default();

    c.bench_function("braid_render_svg", |b| {
        b.iter(|| render_svg(black_box(&braid), black_box(&config)));
    });
}

criterion_group!(benches, benchmark_tracking, benchmark_rendering);
criterion_main!(benches);

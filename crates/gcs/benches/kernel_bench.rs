//! Criterion benchmarks for the point/vector kernel.
//! Inputs come from `gcs::sample` so runs are reproducible.
//! Results: by default under target/criterion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gcs::sample::{draw_cloud, draw_vector, Bounds, ReplayToken};
use gcs::{Point, Vector};

fn pairwise_distance_sum<const N: usize>(cloud: &[Point<N>]) -> f64 {
    let mut total = 0.0;
    for (i, p) in cloud.iter().enumerate() {
        for q in &cloud[i + 1..] {
            total += p.distance(q);
        }
    }
    total
}

fn bench_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance");
    let bounds = Bounds::default();
    for &count in &[16usize, 64, 256] {
        let cloud2 = draw_cloud::<2>(bounds, 41, count);
        let cloud3 = draw_cloud::<3>(bounds, 42, count);
        group.bench_with_input(BenchmarkId::new("pairwise_2d", count), &cloud2, |b, cloud| {
            b.iter(|| pairwise_distance_sum(black_box(cloud)))
        });
        group.bench_with_input(BenchmarkId::new("pairwise_3d", count), &cloud3, |b, cloud| {
            b.iter(|| pairwise_distance_sum(black_box(cloud)))
        });
    }
    group.finish();
}

fn bench_vector_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector3");
    let bounds = Bounds::default();
    let u: Vector<3> = draw_vector(bounds, ReplayToken::new(43, 0));
    let v: Vector<3> = draw_vector(bounds, ReplayToken::new(43, 1));
    group.bench_function("dot_product", |b| {
        b.iter(|| black_box(&u).dot_product(black_box(&v)))
    });
    group.bench_function("cross_product", |b| {
        b.iter(|| black_box(&u).cross_product(black_box(&v)))
    });
    group.bench_function("angle", |b| b.iter(|| black_box(&u).angle(black_box(&v))));
    group.finish();
}

criterion_group!(benches, bench_distance, bench_vector_ops);
criterion_main!(benches);

//! Criterion micro-benchmarks for distance and extent queries.

use criterion::{criterion_group, criterion_main, Criterion};
use reach_bench::delta_workload;
use reach_metric::RadiusMetric;
use std::hint::black_box;

/// Benchmark: radius() over 10K offsets for each metric family.
fn bench_radius_10k(c: &mut Criterion) {
    let deltas = delta_workload(10_000, 64);
    for metric in [RadiusMetric::Square, RadiusMetric::Diamond, RadiusMetric::Circle] {
        c.bench_function(&format!("radius_{metric}_10k"), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for &(dx, dy, dz) in &deltas {
                    acc += metric.radius(black_box(dx), black_box(dy), black_box(dz));
                }
                black_box(acc)
            });
        });
    }
}

/// Benchmark: radius_cells() on integer coordinates.
fn bench_radius_cells(c: &mut Criterion) {
    let deltas = delta_workload(10_000, 1000);
    let cells: Vec<[i32; 3]> = deltas
        .iter()
        .map(|&(x, y, z)| [x as i32, y as i32, z as i32])
        .collect();
    c.bench_function("radius_cells_sphere_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for pair in cells.windows(2) {
                if let Ok(d) = RadiusMetric::Sphere.radius_cells(&pair[0], &pair[1]) {
                    acc += d;
                }
            }
            black_box(acc)
        });
    });
}

/// Benchmark: extents() across all metrics.
fn bench_extents(c: &mut Criterion) {
    c.bench_function("extents_all_metrics", |b| {
        b.iter(|| {
            for metric in RadiusMetric::ALL {
                black_box(metric.extents(black_box(12.5)).ok());
            }
        });
    });
}

/// Benchmark: cells_within() for a spell-sized footprint.
fn bench_footprint(c: &mut Criterion) {
    c.bench_function("cells_within_circle_r16", |b| {
        b.iter(|| black_box(RadiusMetric::Circle.cells_within(black_box(16.0)).ok()));
    });
}

criterion_group!(
    benches,
    bench_radius_10k,
    bench_radius_cells,
    bench_extents,
    bench_footprint
);
criterion_main!(benches);

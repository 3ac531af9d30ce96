//! Criterion benchmarks for the monotone-chain hull.
//! Sizes: n in {100, 1k, 10k, 100k}; disk (small hulls) and circle (large hulls),
//! sequential vs two-thread chain construction.
//! Results live under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use compgeo::geom2::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
use compgeo::geom2::{area, convex_hull_with, HullCfg};

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for shape in [CloudShape::Disk, CloudShape::Circle] {
        for &n in &[100usize, 1_000, 10_000, 100_000] {
            let cfg = CloudCfg {
                shape,
                count: n,
                jitter: 0.01,
                ..CloudCfg::default()
            };
            let pts = draw_cloud(cfg, ReplayToken { seed: 42, index: n as u64 });
            let label = format!("{:?}/{}", shape, n);
            for (mode, hcfg) in [
                ("sequential", HullCfg::sequential()),
                ("parallel", HullCfg::parallel()),
            ] {
                group.bench_with_input(BenchmarkId::new(mode, &label), &pts, |b, pts| {
                    b.iter_batched(
                        || pts.clone(),
                        |pts| {
                            let hull = convex_hull_with(pts, &hcfg);
                            let _a = area(&hull);
                        },
                        BatchSize::LargeInput,
                    )
                });
            }
        }
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);

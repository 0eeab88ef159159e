//! Criterion micro-benchmarks for visibility calculation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use warpsight_bench::{open_field, pillar_hall, portal_hall, Profile};
use warpsight_fov::{FovConfig, ParentStrategy, Shadowcaster, View};

fn run(c: &mut Criterion, group: &str, profile: &Profile, config: FovConfig, radii: &[u32]) {
    let mut group = c.benchmark_group(group);
    for &radius in radii {
        let mut caster = Shadowcaster::new(config.clone()).unwrap();
        let mut view = View::new(radius).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, _| {
            b.iter(|| {
                let stats = caster.calculate(&profile.grid, &mut view, profile.observer);
                black_box(stats);
            });
        });
    }
    group.finish();
}

/// Benchmark: Open field, every cell revealed, no splits.
fn bench_open_field(c: &mut Criterion) {
    let profile = open_field(129).unwrap();
    run(c, "calculate_open_field", &profile, FovConfig::default(), &[8, 16, 32, 64]);
}

/// Benchmark: Pillar lattice, one row split per pillar.
fn bench_pillar_hall(c: &mut Criterion) {
    let profile = pillar_hall(129, 4).unwrap();
    run(c, "calculate_pillar_hall", &profile, FovConfig::default(), &[8, 16, 32]);
}

/// Benchmark: Portal hall at the default pass limit and a deeper one.
fn bench_portal_hall(c: &mut Criterion) {
    let profile = portal_hall(129, 800, 60, 42).unwrap();
    run(c, "calculate_portal_hall", &profile, FovConfig::default(), &[16, 32]);
    let deep = FovConfig::builder().max_pass(6).build().unwrap();
    run(c, "calculate_portal_hall_max_pass_6", &profile, deep, &[16, 32]);
}

/// Benchmark: Centre-aligned parent resolution on the pillar lattice.
fn bench_center_aligned(c: &mut Criterion) {
    let profile = pillar_hall(129, 4).unwrap();
    let config = FovConfig::builder()
        .parent_strategy(ParentStrategy::CenterAligned)
        .build()
        .unwrap();
    run(c, "calculate_center_aligned", &profile, config, &[8, 16, 32]);
}

criterion_group!(
    benches,
    bench_open_field,
    bench_pillar_hall,
    bench_portal_hall,
    bench_center_aligned
);
criterion_main!(benches);

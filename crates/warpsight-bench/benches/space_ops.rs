//! Criterion micro-benchmarks for world traversal.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use warpsight_bench::{open_field, portal_hall};
use warpsight_core::{neighbours, traverse, Direction, Location};
use warpsight_fov::View;

/// Benchmark: Call neighbours() on all 10K tiles of a 100x100 grid.
fn bench_neighbours_10k(c: &mut Criterion) {
    let profile = open_field(100).unwrap();
    let generation = profile.grid.instance_id().get();

    c.bench_function("neighbours_grid_10k", |b| {
        b.iter(|| {
            for i in 0..10_000u32 {
                let n = neighbours(&profile.grid, Location::new(i, generation), Direction::North);
                black_box(&n);
            }
        });
    });
}

/// Benchmark: Walk 1000 steps east through a portal-dense world,
/// accumulating rotation.
fn bench_portal_walk(c: &mut Criterion) {
    let profile = portal_hall(100, 0, 2000, 7).unwrap();

    c.bench_function("traverse_portal_walk_1000", |b| {
        b.iter(|| {
            let mut here = profile.observer;
            let mut rotation = Direction::North;
            for _ in 0..1000 {
                let (next, delta) = traverse(&profile.grid, here, Direction::East, rotation);
                if !next.is_valid() {
                    here = profile.observer;
                    rotation = Direction::North;
                    continue;
                }
                here = next;
                rotation = rotation.rotate(delta);
            }
            black_box(here);
        });
    });
}

/// Benchmark: Build the full local space for a radius-32 view.
fn bench_local_space(c: &mut Criterion) {
    let profile = portal_hall(129, 0, 60, 42).unwrap();
    let mut view = View::new(32).unwrap();

    c.bench_function("build_local_space_r32", |b| {
        b.iter(|| {
            view.reset_at(profile.observer);
            view.build_local_space(&profile.grid);
            black_box(view.location_local(32, 32));
        });
    });
}

criterion_group!(benches, bench_neighbours_10k, bench_portal_walk, bench_local_space);
criterion_main!(benches);

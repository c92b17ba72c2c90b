//! Catalog construction benchmarks for mission_core.
//!
//! Run with: `cargo bench -p mission_core`

// Benchmark binaries don't need docs on macro-generated functions
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mission_core::prelude::*;

/// Measures roster and catalog construction plus the display derivations.
pub fn catalog_benchmark(c: &mut Criterion) {
    c.bench_function("standard_roster", |b| {
        b.iter(|| black_box(EnemyCatalog::standard()))
    });

    let roster = EnemyCatalog::standard();
    c.bench_function("standard_catalog", |b| {
        b.iter(|| black_box(MissionCatalog::standard(black_box(&roster))))
    });

    let catalog = MissionCatalog::standard(&roster).expect("standard catalog builds");
    c.bench_function("display_all_spawns", |b| {
        b.iter(|| {
            for mission in &catalog {
                for spawn in mission.spawns() {
                    black_box(spawn.display_names());
                    black_box(spawn.display_bounty());
                    black_box(spawn.display_count());
                }
            }
        })
    });
}

criterion_group!(benches, catalog_benchmark);
criterion_main!(benches);

//! # LK-02 Land Partition Benchmarks
//!
//! - Dense snapshot: every cell of the 408×408 grid owned, collapses to 24-quads
//! - Sparse snapshot: random cells, almost everything leftover
//! - Blocky snapshot: random unaligned blocks, exercises every size

use std::time::Duration;

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use lk_02_land_partition::{
    partition_owned_ids, GridCodec, GridConfig, GridCoordinate, PartitionConfig,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use shared_types::LinearId;

/// Every id of the default grid.
pub fn dense_snapshot() -> Vec<LinearId> {
    (0..GridConfig::default().cell_count()).collect()
}

/// `count` random ids on the default grid (duplicates possible).
pub fn sparse_snapshot(count: usize, seed: u64) -> Vec<LinearId> {
    let cells = GridConfig::default().cell_count();
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(0..cells)).collect()
}

/// `blocks` random unaligned squares on the default grid.
pub fn blocky_snapshot(blocks: usize, seed: u64) -> Vec<LinearId> {
    let Ok(codec) = GridCodec::new(GridConfig::default()) else {
        return Vec::new();
    };
    let mut rng = StdRng::seed_from_u64(seed);
    let mut ids = Vec::new();
    for _ in 0..blocks {
        let side: i64 = rng.gen_range(2..40);
        let x = rng.gen_range(0..408 - side);
        let y = rng.gen_range(0..408 - side);
        for dy in 0..side {
            for dx in 0..side {
                if let Ok(id) = codec.to_linear_id(GridCoordinate::new(x + dx, y + dy)) {
                    ids.push(id);
                }
            }
        }
    }
    ids
}

pub fn partition_snapshots(c: &mut Criterion) {
    let mut group = c.benchmark_group("lk-02/partition");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(20);

    let grid = GridConfig::default();
    let sizes = PartitionConfig::default();

    let snapshots = [
        ("dense_408", dense_snapshot()),
        ("sparse_20000", sparse_snapshot(20_000, 5)),
        ("blocky_200", blocky_snapshot(200, 6)),
    ];

    for (name, ids) in &snapshots {
        group.throughput(Throughput::Elements(ids.len() as u64));
        group.bench_with_input(BenchmarkId::new("partition", name), ids, |b, ids| {
            b.iter(|| black_box(partition_owned_ids(ids, &grid, &sizes)))
        });
    }

    group.finish();
}

pub fn codec_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("lk-02/codec");
    let Ok(codec) = GridCodec::new(GridConfig {
        width: 408,
        offset: 204,
    }) else {
        return;
    };

    group.bench_function("round_trip", |b| {
        let mut id: LinearId = 0;
        b.iter(|| {
            id = (id + 7919) % codec.cell_count();
            let coord = codec.from_linear_id(id);
            black_box(coord.and_then(|c| codec.to_linear_id(c)))
        })
    });

    group.bench_function("serpentine_24", |b| {
        b.iter(|| black_box(codec.serpentine_path(GridCoordinate::new(-204, -204), 24)))
    });

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    partition_snapshots(c);
    codec_operations(c);
}

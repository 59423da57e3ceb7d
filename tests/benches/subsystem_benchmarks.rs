//! # Landkit Subsystem Benchmarks
//!
//! | Subsystem | Operation | Scale |
//! |-----------|-----------|-------|
//! | lk-01 Commitment Tree | build, prove, verify | up to 20,001 leaves |
//! | lk-01 Commitment Tree | proof book | 5,000 claims |
//! | lk-02 Land Partition | partition | dense 408×408 grid |
//! | lk-02 Land Partition | codec round trip, serpentine path | single ops |

use criterion::{criterion_group, criterion_main};
use lk_tests::benchmarks::{lk_01_commitment_tree, lk_02_land_partition};

criterion_group!(
    benches,
    lk_01_commitment_tree::register_benchmarks,
    lk_02_land_partition::register_benchmarks,
);

criterion_main!(benches);

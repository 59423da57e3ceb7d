//! # LK-01 Commitment Tree Benchmarks
//!
//! - Tree construction: O(n log n) hashes across levels
//! - Proof generation: O(log n) parent walk
//! - Proof verification: O(log n) fold
//!
//! Sizes go up to the tens of thousands of claims a land sale produces,
//! with odd counts to exercise padding.

use std::time::Duration;

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use lk_01_commitment_tree::{verify_proof, ClaimLeaf, CommitmentTree, ProofBook};
use rand::{rngs::StdRng, Rng, SeedableRng};
use shared_types::{encode_hash, LeafHash};

/// Deterministic random leaves.
pub fn generate_leaves(count: usize, seed: u64) -> Vec<LeafHash> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen::<[u8; 32]>()).collect()
}

pub fn tree_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("lk-01/tree_build");
    group.measurement_time(Duration::from_secs(10));

    for count in [1_000, 5_000, 20_000, 20_001] {
        let leaves = generate_leaves(count, count as u64);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("build", count), &leaves, |b, l| {
            b.iter(|| black_box(CommitmentTree::build(l.clone())))
        });
    }

    group.finish();
}

pub fn proof_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("lk-01/proof_gen");

    for count in [1_000, 20_000] {
        let leaves = generate_leaves(count, 1);
        let Ok(tree) = CommitmentTree::build(leaves.clone()) else {
            continue;
        };
        let mut rng = StdRng::seed_from_u64(2);

        group.bench_with_input(BenchmarkId::new("single", count), &tree, |b, t| {
            b.iter(|| {
                let leaf = &leaves[rng.gen_range(0..count)];
                black_box(t.get_proof(leaf))
            })
        });
    }

    let claims: Vec<ClaimLeaf> = generate_leaves(5_000, 3)
        .into_iter()
        .map(|leaf| ClaimLeaf {
            claim_id: encode_hash(&leaf),
            leaf,
        })
        .collect();

    group.throughput(Throughput::Elements(claims.len() as u64));
    group.bench_function("proof_book_5000", |b| {
        b.iter(|| black_box(ProofBook::from_claims(&claims)))
    });

    group.finish();
}

pub fn proof_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("lk-01/proof_verify");

    let leaves = generate_leaves(20_000, 4);
    let Ok(tree) = CommitmentTree::build(leaves.clone()) else {
        return;
    };
    let root = tree.root();
    let proofs: Vec<_> = leaves
        .iter()
        .take(256)
        .filter_map(|leaf| tree.get_proof(leaf).ok().map(|p| (*leaf, p)))
        .collect();

    group.bench_function("verify_20000", |b| {
        let mut i = 0;
        b.iter(|| {
            let (leaf, proof) = &proofs[i % proofs.len()];
            i += 1;
            black_box(verify_proof(leaf, proof, &root))
        })
    });

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    tree_construction(c);
    proof_generation(c);
    proof_verification(c);
}

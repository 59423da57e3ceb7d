//! # Integration Test Flows
//!
//! End-to-end paths the operator tooling runs, crossing crate boundaries and
//! the JSON artifacts in between.
//!
//! ## Flows Tested:
//!
//! 1. **Claims → ProofBook → JSON → reload → verify**: what a relayer receives
//! 2. **Snapshot → partition → QuadBatches → JSON → reload → ids**: what a migrator submits
//! 3. **TOML config → partitioner**: file-driven geometry

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::fs;

    use lk_01_commitment_tree::{
        adapters::keccak::keccak256, verify_proof, ClaimLeaf, CommitmentApi, CommitmentTree,
        ProofBook,
    };
    use lk_02_land_partition::{
        partition_owned_ids, GridCodec, GridConfig, GridCoordinate, LandConfig, OwnedSet,
        PartitionApi, PartitionConfig, QuadBatches, QuadPartitioner,
    };
    use shared_types::{encode_hash, LeafHash, LinearId};

    use crate::benchmarks::lk_01_commitment_tree::generate_leaves;
    use crate::benchmarks::lk_02_land_partition as snapshots;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Leaf for a `(address, land id)` sale entry, hashed the way a sale
    /// contract would: keccak over the packed fields.
    fn sale_leaf(address: &[u8; 20], land_id: u64) -> LeafHash {
        let mut packed = Vec::with_capacity(28);
        packed.extend_from_slice(address);
        packed.extend_from_slice(&land_id.to_be_bytes());
        keccak256(&packed)
    }

    fn sale_claims(n: u64) -> Vec<ClaimLeaf> {
        (0..n)
            .map(|i| {
                let mut address = [0u8; 20];
                address[12..].copy_from_slice(&i.to_be_bytes());
                ClaimLeaf {
                    claim_id: format!("land-{}", i),
                    leaf: sale_leaf(&address, i),
                }
            })
            .collect()
    }

    // =============================================================================
    // FLOW 1: CLAIMS → PROOF BOOK
    // =============================================================================

    #[test]
    fn test_proof_book_survives_json_round_trip() {
        let claims = sale_claims(1_001);
        let book = ProofBook::from_claims(&claims).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        fs::write(&path, book.to_json().unwrap()).unwrap();

        let reloaded = ProofBook::from_json(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(reloaded, book);
        assert!(reloaded.verify_all().is_empty());

        for claim in claims.iter().step_by(50) {
            let entry = reloaded.get(&claim.claim_id).unwrap();
            assert_eq!(entry.leaf, claim.leaf);
            assert!(verify_proof(&entry.leaf, &entry.proof, &reloaded.root));
        }
    }

    #[test]
    fn test_proof_book_root_matches_direct_build() {
        let claims = sale_claims(77);
        let book = ProofBook::from_claims(&claims).unwrap();
        let tree = CommitmentTree::build(claims.iter().map(|c| c.leaf).collect()).unwrap();

        assert_eq!(book.root, tree.root());
        let entry = book.get("land-10").unwrap();
        assert_eq!(entry.proof, CommitmentApi::get_proof(&tree, &entry.leaf).unwrap());
    }

    #[test]
    fn test_json_uses_prefixed_hex() {
        let book = ProofBook::from_claims(&sale_claims(3)).unwrap();
        let json = book.to_json().unwrap();
        assert!(json.contains(&encode_hash(&book.root)));
        assert!(encode_hash(&book.root).starts_with("0x"));
    }

    #[test]
    fn test_tree_shared_across_threads() {
        let leaves = generate_leaves(2_000, 9);
        let tree = std::sync::Arc::new(CommitmentTree::build(leaves.clone()).unwrap());

        let handles: Vec<_> = leaves
            .chunks(500)
            .map(|chunk| {
                let tree = tree.clone();
                let chunk = chunk.to_vec();
                std::thread::spawn(move || {
                    chunk
                        .iter()
                        .all(|leaf| tree.verify(leaf, &tree.get_proof(leaf).unwrap()))
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }

    // =============================================================================
    // FLOW 2: SNAPSHOT → QUAD BATCHES
    // =============================================================================

    #[test]
    fn test_batches_reconstruct_blocky_snapshot() {
        let ids = snapshots::blocky_snapshot(50, 77);
        let grid = GridConfig::default();
        let config = PartitionConfig::default();

        let partitioner = QuadPartitioner::new(grid, config.clone()).unwrap();
        let mut owned = OwnedSet::from_ids(ids.iter().copied());
        let outcome = PartitionApi::partition(&partitioner, &mut owned).unwrap();

        let json = QuadBatches::from_outcome(&outcome, &config)
            .unwrap()
            .to_json()
            .unwrap();
        let batches = QuadBatches::from_json(&json).unwrap();

        let rebuilt = batches.all_ids(partitioner.codec()).unwrap();
        let unique: HashSet<LinearId> = rebuilt.iter().copied().collect();
        assert_eq!(unique.len(), rebuilt.len(), "an id was emitted twice");
        assert_eq!(unique, ids.into_iter().collect::<HashSet<_>>());
        assert_eq!(batches.quad_count() + batches.leftover.len(), outcome.batch_count());
    }

    #[test]
    fn test_dense_grid_is_289_quads() {
        let ids = snapshots::dense_snapshot();
        let grid = GridConfig::default();
        let config = PartitionConfig::default();
        let outcome = partition_owned_ids(&ids, &grid, &config).unwrap();

        let batches = QuadBatches::from_outcome(&outcome, &config).unwrap();
        assert_eq!(batches.buckets[0].len(), 17 * 17);
        assert!(batches.buckets[1..].iter().all(|b| b.is_empty()));
        assert!(batches.leftover.is_empty());
    }

    // =============================================================================
    // FLOW 3: TOML CONFIG → PARTITIONER
    // =============================================================================

    #[test]
    fn test_config_file_drives_partition() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("land.toml");
        fs::write(
            &path,
            "[grid]\nwidth = 48\noffset = 24\n\n[partition]\nallowed_sizes = [12, 6, 3]\n",
        )
        .unwrap();

        let config = LandConfig::load(&path).unwrap();
        config.validate().unwrap();
        let partitioner = QuadPartitioner::new(config.grid, config.partition).unwrap();
        let codec: GridCodec = *partitioner.codec();

        let ids: Vec<LinearId> = (0..12)
            .flat_map(|dy| (0..12).map(move |dx| (dx, dy)))
            .map(|(dx, dy)| codec.to_linear_id(GridCoordinate::new(dx - 24, dy - 24)).unwrap())
            .collect();
        let outcome = partitioner
            .partition(&mut OwnedSet::from_ids(ids))
            .unwrap();
        assert_eq!(outcome.quads.len(), 1);
        assert_eq!(outcome.quads[0].size, 12);
        assert_eq!((outcome.quads[0].x, outcome.quads[0].y), (-24, -24));
    }
}

//! # Domain Entities
//!
//! The sorted-pair commitment tree and its proof fold.
//!
//! ## Construction Rules
//!
//! | Step | Rule |
//! |------|------|
//! | Pad | Odd leaf count: append a copy of the caller's *last* leaf |
//! | Sort | Leaves ascending as big-endian unsigned integers |
//! | Reduce | Pair `(i, i+1)`, parent = `H(a ++ b)`; unmatched trailing node → `H(a ++ a)` |
//! | Re-sort | Every new level is sorted again before pairing |
//!
//! The padding and self-pair rules keep roots compatible with commitments
//! already published on-chain and must not be changed.

use std::collections::HashMap;

use shared_types::{cmp_be, encode_hash, LeafHash};
use tracing::{debug, info};

use super::errors::CommitmentError;
use super::value_objects::{MerkleProof, NodeIndex, TreeNode};
use crate::adapters::Keccak256Provider;
use crate::ports::{CommitmentApi, HashProvider};

/// A commitment tree over a list of leaf hashes.
///
/// Nodes live in an arena: the sorted padded leaves occupy
/// `nodes[..leaf_count]`, parents are appended level by level and the root is
/// the last node pushed. Links are arena indices.
#[derive(Debug, Clone)]
pub struct CommitmentTree<H = Keccak256Provider> {
    nodes: Vec<TreeNode>,
    /// Leaves supplied by the caller, before padding.
    input_count: usize,
    /// Leaves after padding.
    leaf_count: usize,
    /// Number of reduction rounds.
    depth: usize,
    root: NodeIndex,
    /// First sorted position of each leaf hash.
    leaf_lookup: HashMap<LeafHash, NodeIndex>,
    hasher: H,
}

impl CommitmentTree<Keccak256Provider> {
    /// Build a tree with the verifier's Keccak-256 primitive.
    pub fn build(leaves: Vec<LeafHash>) -> Result<Self, CommitmentError> {
        Self::build_with(leaves, Keccak256Provider)
    }
}

impl<H: HashProvider> CommitmentTree<H> {
    /// Build a tree with an explicit hash primitive.
    ///
    /// ## Errors
    ///
    /// - `EmptyInput` if `leaves` is empty.
    pub fn build_with(mut leaves: Vec<LeafHash>, hasher: H) -> Result<Self, CommitmentError> {
        let input_count = leaves.len();
        let Some(&last) = leaves.last() else {
            return Err(CommitmentError::EmptyInput);
        };

        if input_count % 2 == 1 {
            debug!(
                "[lk-01] Padding {} leaves with duplicate of last leaf {}",
                input_count,
                encode_hash(&last)
            );
            leaves.push(last);
        }

        // Stable sort: duplicates keep their relative order.
        leaves.sort_by(cmp_be);
        let leaf_count = leaves.len();

        let mut nodes: Vec<TreeNode> = Vec::with_capacity(2 * leaf_count);
        nodes.extend(leaves.into_iter().map(TreeNode::leaf));

        let mut level: Vec<NodeIndex> = (0..leaf_count).map(NodeIndex).collect();
        let mut depth = 0;

        while level.len() > 1 {
            let mut next = Vec::with_capacity((level.len() + 1) / 2);

            for pair in level.chunks(2) {
                let left = pair[0];
                let right = pair.get(1).copied();
                let parent = NodeIndex(nodes.len());

                let left_hash = nodes[left.0].hash;
                let right_hash = right.map_or(left_hash, |r| nodes[r.0].hash);
                let hash = hasher.hash_pair(&left_hash, &right_hash);

                nodes[left.0].parent = Some(parent);
                if let Some(r) = right {
                    nodes[r.0].parent = Some(parent);
                }
                nodes.push(TreeNode {
                    hash,
                    left: Some(left),
                    right,
                    parent: None,
                });
                next.push(parent);
            }

            next.sort_by(|a, b| cmp_be(&nodes[a.0].hash, &nodes[b.0].hash));
            level = next;
            depth += 1;
        }

        let root = level.first().copied().ok_or_else(|| {
            CommitmentError::Consistency("reduction produced no root".to_string())
        })?;

        let mut leaf_lookup = HashMap::with_capacity(leaf_count);
        for (i, node) in nodes[..leaf_count].iter().enumerate() {
            leaf_lookup.entry(node.hash).or_insert(NodeIndex(i));
        }

        info!(
            "[lk-01] Built commitment tree: {} leaves ({} padded), depth {}, root {}",
            input_count,
            leaf_count,
            depth,
            encode_hash(&nodes[root.0].hash)
        );

        Ok(Self {
            nodes,
            input_count,
            leaf_count,
            depth,
            root,
            leaf_lookup,
            hasher,
        })
    }

    /// The root hash.
    pub fn root(&self) -> LeafHash {
        self.nodes[self.root.0].hash
    }

    /// Number of leaves supplied by the caller.
    pub fn input_count(&self) -> usize {
        self.input_count
    }

    /// Number of leaves after padding (always even).
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Number of levels above the leaves; equals every proof's length.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Sorted, padded leaves.
    pub fn leaves(&self) -> impl Iterator<Item = &LeafHash> + '_ {
        self.nodes[..self.leaf_count].iter().map(|n| &n.hash)
    }

    /// Whether `leaf` is one of the constructed leaves.
    pub fn contains(&self, leaf: &LeafHash) -> bool {
        self.leaf_lookup.contains_key(leaf)
    }

    /// Arena access for inspection.
    pub fn node(&self, index: NodeIndex) -> Option<&TreeNode> {
        self.nodes.get(index.0)
    }

    /// Index of the root node.
    pub fn root_index(&self) -> NodeIndex {
        self.root
    }

    /// Sibling path for `leaf`.
    ///
    /// Walks parent links to the root, taking the sibling's hash at each step,
    /// or the node's own hash when its parent was self-paired.
    pub fn get_proof(&self, leaf: &LeafHash) -> Result<MerkleProof, CommitmentError> {
        let mut current = self
            .leaf_lookup
            .get(leaf)
            .copied()
            .ok_or(CommitmentError::UnknownLeaf { leaf: *leaf })?;

        let mut siblings = Vec::with_capacity(self.depth);

        while let Some(parent) = self.nodes[current.0].parent {
            let node = &self.nodes[parent.0];
            let sibling = match (node.left, node.right) {
                (Some(l), Some(r)) if l == current => r,
                (Some(l), Some(_)) => l,
                _ => current,
            };
            siblings.push(self.nodes[sibling.0].hash);
            current = parent;
        }

        Ok(MerkleProof::new(siblings))
    }

    /// Check `proof` for `leaf` against this tree's root.
    pub fn verify(&self, leaf: &LeafHash, proof: &MerkleProof) -> bool {
        verify_proof_with(&self.hasher, leaf, proof, &self.root())
    }
}

impl<H: HashProvider> CommitmentApi for CommitmentTree<H> {
    fn root(&self) -> LeafHash {
        CommitmentTree::root(self)
    }

    fn get_proof(&self, leaf: &LeafHash) -> Result<MerkleProof, CommitmentError> {
        CommitmentTree::get_proof(self, leaf)
    }

    fn verify(&self, leaf: &LeafHash, proof: &MerkleProof) -> bool {
        CommitmentTree::verify(self, leaf, proof)
    }
}

/// Verify a proof with the Keccak-256 primitive.
pub fn verify_proof(leaf: &LeafHash, proof: &MerkleProof, root: &LeafHash) -> bool {
    verify_proof_with(&Keccak256Provider, leaf, proof, root)
}

/// Order-free proof fold: `acc = H(min(acc, s) ++ max(acc, s))` for each sibling.
pub fn verify_proof_with<H: HashProvider + ?Sized>(
    hasher: &H,
    leaf: &LeafHash,
    proof: &MerkleProof,
    root: &LeafHash,
) -> bool {
    let computed = proof.siblings.iter().fold(*leaf, |acc, sibling| {
        if cmp_be(&acc, sibling).is_le() {
            hasher.hash_pair(&acc, sibling)
        } else {
            hasher.hash_pair(sibling, &acc)
        }
    });
    computed == *root
}

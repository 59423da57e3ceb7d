//! # Value Objects
//!
//! Immutable value objects for the Commitment Tree subsystem.

use serde::{Deserialize, Serialize};
use shared_types::{hex_hash_vec, LeafHash};

/// Index of a node in the tree arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(pub usize);

/// A node of the commitment tree.
///
/// Leaves have no children. Every other node has a left child and, unless it
/// was self-paired, a right child. `parent` is `None` only for the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Hash stored at this node.
    pub hash: LeafHash,
    /// First child in pair order.
    pub left: Option<NodeIndex>,
    /// Second child; `None` for a self-paired parent or a leaf.
    pub right: Option<NodeIndex>,
    /// Back-link used when walking a proof path.
    pub parent: Option<NodeIndex>,
}

impl TreeNode {
    /// Create a parentless leaf.
    pub fn leaf(hash: LeafHash) -> Self {
        Self {
            hash,
            left: None,
            right: None,
            parent: None,
        }
    }

    /// Whether the node is a leaf.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none()
    }

    /// Whether the node's hash is `Hash(child ++ child)`.
    pub fn is_self_paired(&self) -> bool {
        self.left.is_some() && self.right.is_none()
    }
}

/// Sibling path from a leaf to the root.
///
/// Positions are not recorded: the verifier orders each pair itself, which is
/// sound because construction sorts every level before pairing. Serialized as
/// a plain array of `0x` hex strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MerkleProof {
    /// Sibling hashes, leaf level first.
    #[serde(with = "hex_hash_vec")]
    pub siblings: Vec<LeafHash>,
}

impl MerkleProof {
    /// Wrap a sibling path.
    pub fn new(siblings: Vec<LeafHash>) -> Self {
        Self { siblings }
    }

    /// Number of steps to the root.
    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    /// True only for proofs that carry no siblings.
    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }
}

//! # Inbound Ports (Driving Ports)
//!
//! Public API exposed by the Commitment Tree subsystem.

use crate::domain::{CommitmentError, MerkleProof};
use shared_types::LeafHash;

/// Read API over a built commitment.
///
/// Implementations are immutable after construction, so every method takes
/// `&self` and may be called from many threads at once.
pub trait CommitmentApi: Send + Sync {
    /// The published root.
    fn root(&self) -> LeafHash;

    /// Proof for a constructed leaf.
    ///
    /// ## Returns
    ///
    /// - `Ok(MerkleProof)`: siblings from the leaf up to the root
    /// - `Err(UnknownLeaf)`: the hash is not a (padded) leaf of this tree
    fn get_proof(&self, leaf: &LeafHash) -> Result<MerkleProof, CommitmentError>;

    /// Check a proof against this commitment's root.
    fn verify(&self, leaf: &LeafHash, proof: &MerkleProof) -> bool;
}

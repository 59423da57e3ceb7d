//! # Outbound Ports (Driven Ports)
//!
//! SPIs required by the Commitment Tree subsystem.

use shared_types::LeafHash;

/// The pair-hash primitive shared with the external verifier.
///
/// Implementations MUST be byte-identical to the verifier, otherwise roots and
/// proofs diverge silently.
pub trait HashProvider: Send + Sync {
    /// Hash the 64-byte concatenation `left ++ right`.
    fn hash_pair(&self, left: &LeafHash, right: &LeafHash) -> LeafHash;
}

impl<T: HashProvider + ?Sized> HashProvider for &T {
    fn hash_pair(&self, left: &LeafHash, right: &LeafHash) -> LeafHash {
        (**self).hash_pair(left, right)
    }
}

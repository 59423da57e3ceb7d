//! # Keccak-256 Hash Provider
//!
//! The verifier contract computes `keccak256(abi.encodePacked(a, b))` over two
//! `bytes32` words. This adapter reproduces it with the `sha3` crate's
//! original-padding Keccak (not FIPS SHA3-256).

use sha3::{Digest, Keccak256};
use shared_types::LeafHash;

use crate::ports::HashProvider;

/// Keccak-256 over arbitrary bytes.
pub fn keccak256(data: &[u8]) -> LeafHash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Default [`HashProvider`], matching the on-chain verifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keccak256Provider;

impl HashProvider for Keccak256Provider {
    fn hash_pair(&self, left: &LeafHash, right: &LeafHash) -> LeafHash {
        let mut hasher = Keccak256::new();
        hasher.update(left);
        hasher.update(right);
        hasher.finalize().into()
    }
}

//! # Core Domain Entities
//!
//! Value types passed between the commitment and partition subsystems.

use std::cmp::Ordering;

/// A 32-byte hash word.
///
/// Ordered as a big-endian unsigned integer. For fixed-size byte arrays this is
/// exactly the derived lexicographic order of `[u8; 32]`.
pub type Hash = [u8; 32];

/// A committed leaf: an opaque hash produced by the external leaf-hashing schema.
pub type LeafHash = Hash;

/// A single integer encoding a land grid coordinate.
pub type LinearId = u64;

/// The all-zero hash word.
pub const ZERO_HASH: Hash = [0u8; 32];

/// Compare two hashes as big-endian unsigned 256-bit integers.
#[inline]
pub fn cmp_be(a: &Hash, b: &Hash) -> Ordering {
    a.cmp(b)
}

/// Build a hash whose big-endian integer value is `value`.
///
/// Useful for fixtures such as the `0x01`, `0x02`, `0x03` leaves used in
/// documentation examples.
pub fn hash_from_u64(value: u64) -> Hash {
    let mut out = ZERO_HASH;
    out[24..].copy_from_slice(&value.to_be_bytes());
    out
}

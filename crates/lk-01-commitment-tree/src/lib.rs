//! # Commitment Tree Subsystem (lk-01)
//!
//! Publishes a large claim list as a single root and proves individual claims
//! later. Used for land sales, asset giveaways and multi-asset giveaways.
//!
//! ## Data Flow
//!
//! ```text
//! domain records ──(external leaf hashing)──→ [LeafHash]
//!                                                  │
//!                                                  ↓
//!                                          [CommitmentTree::build]
//!                                            │              │
//!                                            ↓              ↓
//!                                      root (published)   get_proof(leaf) → claimant
//! ```
//!
//! ## Compatibility Rules
//!
//! | Rule | Enforcement | Location |
//! |------|-------------|----------|
//! | Odd leaf count padded with a copy of the caller's last leaf | `build_with` | domain/entities.rs |
//! | Leaves and every parent level sorted big-endian before pairing | `build_with` | domain/entities.rs |
//! | Unmatched trailing node hashed with itself | `build_with` | domain/entities.rs |
//! | Proofs carry no positions; verifier sorts each pair | `verify_proof_with` | domain/entities.rs |
//! | Pair hash is Keccak-256 over 64 bytes | `Keccak256Provider` | adapters/keccak.rs |
//!
//! Two independent implementations given the same leaves and primitive must
//! produce byte-identical roots and proofs.
//!
//! ## Hexagonal Architecture
//!
//! - **Domain Layer** (`domain/`): arena tree, proof fold, errors
//! - **Ports Layer** (`ports/`): `CommitmentApi` inbound, `HashProvider` outbound
//! - **Adapters Layer** (`adapters/`): Keccak-256 provider, `ProofBook` artifact

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;

// Re-export main types for convenience
pub use domain::{
    verify_proof, verify_proof_with, CommitmentError, CommitmentTree, MerkleProof, NodeIndex,
    TreeNode,
};

pub use ports::{CommitmentApi, HashProvider};

pub use adapters::{ClaimLeaf, ClaimProof, Keccak256Provider, ProofBook};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

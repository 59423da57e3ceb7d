//! # Adapters Layer
//!
//! Secondary adapters for the Commitment Tree subsystem.

pub mod keccak;
pub mod proof_book;

pub use keccak::Keccak256Provider;
pub use proof_book::{ClaimLeaf, ClaimProof, ProofBook};

//! # Domain Layer
//!
//! Pure domain logic for the Commitment Tree subsystem.
//!
//! - `entities`: `CommitmentTree` (arena of `TreeNode`s) and proof verification
//! - `value_objects`: `NodeIndex`, `TreeNode`, `MerkleProof`
//! - `errors`: `CommitmentError`
//!
//! This module performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use value_objects::*;

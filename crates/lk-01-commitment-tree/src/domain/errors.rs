//! # Domain Errors
//!
//! Error types for the Commitment Tree subsystem.

use shared_types::{encode_hash, ErrorClass, LeafHash};
use thiserror::Error;

/// Errors raised while building trees, looking up proofs or handling artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitmentError {
    /// A tree needs at least one leaf.
    #[error("cannot build a commitment tree from an empty leaf set")]
    EmptyInput,

    /// The hash is not among the constructed (padded) leaves.
    #[error("unknown leaf: {}", encode_hash(.leaf))]
    UnknownLeaf {
        /// The requested leaf.
        leaf: LeafHash,
    },

    /// The same claim identity appears twice in a claim list.
    #[error("duplicate claim id: {claim_id}")]
    DuplicateClaim {
        /// Offending identity.
        claim_id: String,
    },

    /// Artifact (de)serialization failed, including malformed hex hashes.
    #[error("serialization error: {message}")]
    Serialization {
        /// Underlying serde message.
        message: String,
    },

    /// Internal invariant violation.
    #[error("consistency violation: {0}")]
    Consistency(String),
}

impl CommitmentError {
    /// Classification of this error.
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::EmptyInput
            | Self::UnknownLeaf { .. }
            | Self::DuplicateClaim { .. }
            | Self::Serialization { .. } => ErrorClass::Input,
            Self::Consistency(_) => ErrorClass::Consistency,
        }
    }
}

impl From<serde_json::Error> for CommitmentError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}

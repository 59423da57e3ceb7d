//! # Proof Book
//!
//! The persisted artifact handed to the claim relayer: the published root plus
//! one proof per claim, keyed by claim identity.
//!
//! ```text
//! claims (id, leaf) → CommitmentTree → ProofBook { root, claims: id → { leaf, proof } } → JSON
//! ```
//!
//! Leaf hashing of the domain record (sale entry, giveaway entry, ...) happens
//! before this point and is not this crate's concern.

use std::collections::{BTreeMap, HashSet};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use shared_types::{hex_hash, LeafHash};
use tracing::{info, warn};

use crate::domain::{verify_proof, CommitmentError, CommitmentTree, MerkleProof};

/// A claim identity and its pre-hashed leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimLeaf {
    /// Caller-defined identity (claimant address, sale id, ...).
    pub claim_id: String,
    /// Leaf hash under the verifier's schema.
    #[serde(with = "hex_hash")]
    pub leaf: LeafHash,
}

/// Proof entry for one claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimProof {
    /// The committed leaf.
    #[serde(with = "hex_hash")]
    pub leaf: LeafHash,
    /// Sibling path to the root.
    pub proof: MerkleProof,
}

/// Root and per-claim proofs for one claim list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofBook {
    /// Root to publish.
    #[serde(with = "hex_hash")]
    pub root: LeafHash,
    /// Claim id → proof.
    pub claims: BTreeMap<String, ClaimProof>,
}

impl ProofBook {
    /// Build the tree over `claims` (in the given order) and prove every claim.
    ///
    /// ## Errors
    ///
    /// - `EmptyInput` for an empty list.
    /// - `DuplicateClaim` if a claim id repeats.
    pub fn from_claims(claims: &[ClaimLeaf]) -> Result<Self, CommitmentError> {
        let mut seen = HashSet::with_capacity(claims.len());
        for claim in claims {
            if !seen.insert(claim.claim_id.as_str()) {
                return Err(CommitmentError::DuplicateClaim {
                    claim_id: claim.claim_id.clone(),
                });
            }
        }

        let tree = CommitmentTree::build(claims.iter().map(|c| c.leaf).collect())?;

        let entries: Vec<(String, ClaimProof)> = claims
            .par_iter()
            .map(|claim| -> Result<(String, ClaimProof), CommitmentError> {
                let proof = tree.get_proof(&claim.leaf)?;
                Ok((
                    claim.claim_id.clone(),
                    ClaimProof {
                        leaf: claim.leaf,
                        proof,
                    },
                ))
            })
            .collect::<Result<_, _>>()?;

        info!("[lk-01] Generated {} claim proofs", entries.len());

        Ok(Self {
            root: tree.root(),
            claims: entries.into_iter().collect(),
        })
    }

    /// Number of claims.
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    /// True when the book holds no claims.
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Proof entry for a claim id.
    pub fn get(&self, claim_id: &str) -> Option<&ClaimProof> {
        self.claims.get(claim_id)
    }

    /// Re-fold every entry against `root`; returns the ids that fail.
    pub fn verify_all(&self) -> Vec<String> {
        let failed: Vec<String> = self
            .claims
            .par_iter()
            .filter(|(_, entry)| !verify_proof(&entry.leaf, &entry.proof, &self.root))
            .map(|(id, _)| id.clone())
            .collect();

        if !failed.is_empty() {
            warn!("[lk-01] {} of {} proofs failed verification", failed.len(), self.len());
        }
        failed
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CommitmentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON.
    pub fn from_json(json: &str) -> Result<Self, CommitmentError> {
        Ok(serde_json::from_str(json)?)
    }
}

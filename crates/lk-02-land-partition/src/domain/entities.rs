//! # Domain Entities
//!
//! The owned-id set consumed by a partition run and the run's outcome.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};
use shared_types::LinearId;

use super::errors::PartitionError;
use super::value_objects::Quad;
use crate::algorithms::GridCodec;

/// Insertion-ordered set of owned linear ids.
///
/// Enumeration order is the order ids were first inserted; removed ids leave
/// a hole rather than shifting the rest. A partition run takes `&mut OwnedSet`,
/// so one set is never mutated by two runs at once.
#[derive(Debug, Clone, Default)]
pub struct OwnedSet {
    order: Vec<Option<LinearId>>,
    positions: HashMap<LinearId, usize>,
}

impl OwnedSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from ids in enumeration order; duplicates are ignored.
    pub fn from_ids<I: IntoIterator<Item = LinearId>>(ids: I) -> Self {
        let mut set = Self::new();
        for id in ids {
            set.insert(id);
        }
        set
    }

    /// Insert an id at the end of the enumeration order. Returns `false` if present.
    pub fn insert(&mut self, id: LinearId) -> bool {
        if self.positions.contains_key(&id) {
            return false;
        }
        self.positions.insert(id, self.order.len());
        self.order.push(Some(id));
        true
    }

    /// Remove an id. Returns `false` if absent.
    pub fn remove(&mut self, id: LinearId) -> bool {
        match self.positions.remove(&id) {
            Some(pos) => {
                self.order[pos] = None;
                true
            }
            None => false,
        }
    }

    /// Membership test.
    pub fn contains(&self, id: LinearId) -> bool {
        self.positions.contains_key(&id)
    }

    /// Number of ids present.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether no ids are present.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Present ids in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = LinearId> + '_ {
        self.order.iter().flatten().copied()
    }

    /// Present ids collected in enumeration order.
    pub fn to_vec(&self) -> Vec<LinearId> {
        self.iter().collect()
    }
}

impl FromIterator<LinearId> for OwnedSet {
    fn from_iter<I: IntoIterator<Item = LinearId>>(iter: I) -> Self {
        Self::from_ids(iter)
    }
}

impl Quad {
    /// Ids covered by this quad, in serpentine order.
    pub fn ids(&self, codec: &GridCodec) -> Result<Vec<LinearId>, PartitionError> {
        codec.serpentine_path(self.anchor(), self.size)
    }
}

/// Result of one partition run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionOutcome {
    /// Extracted quads, in extraction order.
    pub quads: Vec<Quad>,
    /// Ids not covered by any quad, in enumeration order.
    pub leftover: Vec<LinearId>,
}

impl PartitionOutcome {
    /// Number of quads per size.
    pub fn quad_count_by_size(&self) -> BTreeMap<u32, usize> {
        let mut counts = BTreeMap::new();
        for quad in &self.quads {
            *counts.entry(quad.size).or_insert(0) += 1;
        }
        counts
    }

    /// Number of batches (quads plus leftover singles) a migration would submit.
    pub fn batch_count(&self) -> usize {
        self.quads.len() + self.leftover.len()
    }

    /// Every id covered by a quad, quad by quad in serpentine order.
    pub fn covered_ids(&self, codec: &GridCodec) -> Result<Vec<LinearId>, PartitionError> {
        let mut ids = Vec::new();
        for quad in &self.quads {
            ids.extend(quad.ids(codec)?);
        }
        Ok(ids)
    }

    /// Check that quads and leftover are pairwise disjoint and together equal `original`.
    pub fn check_consistency(
        &self,
        original: &[LinearId],
        codec: &GridCodec,
    ) -> Result<(), PartitionError> {
        let expected: HashSet<LinearId> = original.iter().copied().collect();
        let mut seen: HashSet<LinearId> = HashSet::with_capacity(expected.len());

        for id in self.covered_ids(codec)?.into_iter().chain(self.leftover.iter().copied()) {
            if !seen.insert(id) {
                return Err(PartitionError::Consistency(format!(
                    "id {} appears in more than one batch",
                    id
                )));
            }
            if !expected.contains(&id) {
                return Err(PartitionError::Consistency(format!(
                    "id {} is not in the owned set",
                    id
                )));
            }
        }

        if seen.len() != expected.len() {
            return Err(PartitionError::Consistency(format!(
                "partition covers {} ids, owned set has {}",
                seen.len(),
                expected.len()
            )));
        }

        Ok(())
    }
}

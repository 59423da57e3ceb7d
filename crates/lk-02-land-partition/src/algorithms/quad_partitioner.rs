//! # Quad Partitioner
//!
//! Greedy extraction of fully owned, aligned squares from an owned-id set.
//!
//! # Algorithm
//!
//! For each id in enumeration order, skipping ids already consumed:
//! 1. For each allowed size, largest first, take the square aligned to that
//!    size which contains the id.
//! 2. If every cell of the square is still owned, record the quad, remove its
//!    cells and move on to the next id.
//! 3. If no size fits, the id stays behind as a leftover single. A configured
//!    size of 1 is never tried: it names the singles themselves.
//!
//! # Time Complexity: O(n · k · s²) membership checks for n ids, k sizes, largest size s

use shared_types::LinearId;
use tracing::{debug, info};

use crate::config::{GridConfig, PartitionConfig};
use crate::domain::{GridCoordinate, OwnedSet, PartitionError, PartitionOutcome, Quad};
use crate::ports::PartitionApi;

use super::grid_codec::GridCodec;

/// Validated partitioner over one grid and one size list.
#[derive(Clone, Debug)]
pub struct QuadPartitioner {
    codec: GridCodec,
    allowed_sizes: Vec<u32>,
}

impl QuadPartitioner {
    /// Create a partitioner.
    ///
    /// ## Errors
    ///
    /// - `Configuration` if the grid or the size list is invalid.
    pub fn new(grid: GridConfig, partition: PartitionConfig) -> Result<Self, PartitionError> {
        let codec = GridCodec::new(grid)?;
        if let Err(err) = partition.validate(&grid) {
            debug!("[lk-02] Rejected sizes {:?}: {}", partition.allowed_sizes, err);
            return Err(err.into());
        }
        Ok(Self {
            codec,
            allowed_sizes: partition.allowed_sizes,
        })
    }

    /// The codec used for anchors and paths.
    pub fn codec(&self) -> &GridCodec {
        &self.codec
    }

    /// Allowed sizes, largest first.
    pub fn allowed_sizes(&self) -> &[u32] {
        &self.allowed_sizes
    }

    /// Partition `owned` into quads and leftover singles.
    ///
    /// On success `owned` holds exactly the leftover ids. If any id lies
    /// outside the grid the call fails before `owned` is touched.
    pub fn partition(&self, owned: &mut OwnedSet) -> Result<PartitionOutcome, PartitionError> {
        let original = owned.to_vec();
        let coords = original
            .iter()
            .map(|&id| Ok((id, self.codec.from_linear_id(id)?)))
            .collect::<Result<Vec<(LinearId, GridCoordinate)>, PartitionError>>()?;

        let mut quads = Vec::new();
        for (id, coord) in coords {
            if !owned.contains(id) {
                continue;
            }
            if let Some(quad) = self.extract_largest(coord, owned)? {
                quads.push(quad);
            }
        }

        let outcome = PartitionOutcome {
            quads,
            leftover: owned.to_vec(),
        };
        outcome.check_consistency(&original, &self.codec)?;

        info!(
            "[lk-02] Partitioned {} ids: {} quads {:?}, {} leftover",
            original.len(),
            outcome.quads.len(),
            outcome.quad_count_by_size(),
            outcome.leftover.len()
        );
        Ok(outcome)
    }

    /// Try each size at `coord`, removing the first fully owned square.
    fn extract_largest(
        &self,
        coord: GridCoordinate,
        owned: &mut OwnedSet,
    ) -> Result<Option<Quad>, PartitionError> {
        for &size in self.allowed_sizes.iter().filter(|&&size| size > 1) {
            let anchor = self.codec.aligned_anchor(coord, size);
            let path = self.codec.serpentine_path(anchor, size)?;
            if path.iter().all(|&id| owned.contains(id)) {
                for id in path {
                    owned.remove(id);
                }
                return Ok(Some(Quad::new(size, anchor.x, anchor.y)));
            }
        }
        Ok(None)
    }
}

impl PartitionApi for QuadPartitioner {
    fn partition(&self, owned: &mut OwnedSet) -> Result<PartitionOutcome, PartitionError> {
        QuadPartitioner::partition(self, owned)
    }

    fn codec(&self) -> &GridCodec {
        &self.codec
    }
}

/// Partition a snapshot of owned ids without keeping a partitioner around.
///
/// Duplicate ids in `ids` are counted once.
pub fn partition_owned_ids(
    ids: &[LinearId],
    grid: &GridConfig,
    partition: &PartitionConfig,
) -> Result<PartitionOutcome, PartitionError> {
    let partitioner = QuadPartitioner::new(*grid, partition.clone())?;
    let mut owned = OwnedSet::from_ids(ids.iter().copied());
    partitioner.partition(&mut owned)
}

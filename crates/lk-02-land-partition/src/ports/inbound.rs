//! # Inbound Ports (Driving Ports)
//!
//! Public API exposed by the Land Partition subsystem.

use crate::algorithms::GridCodec;
use crate::domain::{OwnedSet, PartitionError, PartitionOutcome};

/// Partition API - inbound port.
///
/// A run mutates `owned`, so callers partitioning overlapping id sets must
/// serialize the calls themselves.
pub trait PartitionApi: Send + Sync {
    /// Extract quads from `owned`, leaving only the leftover ids in it.
    ///
    /// ## Returns
    ///
    /// - `Ok(PartitionOutcome)`: quads plus leftover, checked for completeness
    /// - `Err(IdOutOfBounds)`: an id lies outside the grid; `owned` is untouched
    fn partition(&self, owned: &mut OwnedSet) -> Result<PartitionOutcome, PartitionError>;

    /// The codec that produced the quads' anchors.
    fn codec(&self) -> &GridCodec;
}

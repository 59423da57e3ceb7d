//! # Quad Batch Export
//!
//! The persisted artifact handed to batch-submission tooling: one bucket per
//! configured quad size holding parallel `sizes`/`xs`/`ys` arrays, plus the
//! leftover singles. A configured size of 1 gets no bucket; its cells are the
//! leftover list.
//!
//! ```json
//! {
//!   "buckets": [
//!     { "size": 24, "sizes": [24], "xs": [0], "ys": [0] },
//!     { "size": 12, "sizes": [], "xs": [], "ys": [] }
//!   ],
//!   "leftover": [40900]
//! }
//! ```
//!
//! Chunking buckets into transactions is left to the submitter.

use serde::{Deserialize, Serialize};
use shared_types::LinearId;

use crate::algorithms::GridCodec;
use crate::config::PartitionConfig;
use crate::domain::{PartitionError, PartitionOutcome, Quad};

/// All quads of one size as parallel arrays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeBucket {
    /// Side length shared by every entry.
    pub size: u32,
    /// Per-entry size, repeated for the submitter's calldata layout.
    pub sizes: Vec<u32>,
    /// Anchor columns.
    pub xs: Vec<i64>,
    /// Anchor rows.
    pub ys: Vec<i64>,
}

impl SizeBucket {
    fn empty(size: u32) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    fn push(&mut self, quad: &Quad) {
        self.sizes.push(quad.size);
        self.xs.push(quad.x);
        self.ys.push(quad.y);
    }

    /// Number of quads.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// True when the bucket holds no quads.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Check that the arrays line up and agree with `size`.
    pub fn validate(&self) -> Result<(), PartitionError> {
        if self.xs.len() != self.sizes.len() || self.ys.len() != self.sizes.len() {
            return Err(PartitionError::MalformedBatch {
                size: self.size,
                reason: format!(
                    "array lengths differ: sizes {}, xs {}, ys {}",
                    self.sizes.len(),
                    self.xs.len(),
                    self.ys.len()
                ),
            });
        }
        if let Some(other) = self.sizes.iter().find(|&&s| s != self.size) {
            return Err(PartitionError::MalformedBatch {
                size: self.size,
                reason: format!("entry of size {} in bucket", other),
            });
        }
        Ok(())
    }

    /// Quads in this bucket, in stored order.
    pub fn quads(&self) -> impl Iterator<Item = Quad> + '_ {
        self.sizes
            .iter()
            .zip(&self.xs)
            .zip(&self.ys)
            .map(|((&size, &x), &y)| Quad::new(size, x, y))
    }
}

/// Partition output grouped for submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuadBatches {
    /// One bucket per configured quad size, largest first; empty buckets kept.
    pub buckets: Vec<SizeBucket>,
    /// Ids submitted one at a time.
    pub leftover: Vec<LinearId>,
}

impl QuadBatches {
    /// Group `outcome` by the quad sizes in `config`.
    ///
    /// ## Errors
    ///
    /// - `MalformedBatch` if a quad's size is not configured.
    pub fn from_outcome(
        outcome: &PartitionOutcome,
        config: &PartitionConfig,
    ) -> Result<Self, PartitionError> {
        let mut buckets: Vec<SizeBucket> = config.quad_sizes().map(SizeBucket::empty).collect();

        for quad in &outcome.quads {
            let bucket = buckets
                .iter_mut()
                .find(|b| b.size == quad.size)
                .ok_or_else(|| PartitionError::MalformedBatch {
                    size: quad.size,
                    reason: "size is not configured".to_string(),
                })?;
            bucket.push(quad);
        }

        Ok(Self {
            buckets,
            leftover: outcome.leftover.clone(),
        })
    }

    /// Validate every bucket.
    pub fn validate(&self) -> Result<(), PartitionError> {
        self.buckets.iter().try_for_each(SizeBucket::validate)
    }

    /// Every quad, bucket by bucket.
    pub fn quads(&self) -> Vec<Quad> {
        self.buckets.iter().flat_map(SizeBucket::quads).collect()
    }

    /// Total number of quads.
    pub fn quad_count(&self) -> usize {
        self.buckets.iter().map(SizeBucket::len).sum()
    }

    /// Every id the batches cover, quads first then leftover.
    pub fn all_ids(&self, codec: &GridCodec) -> Result<Vec<LinearId>, PartitionError> {
        let mut ids = Vec::new();
        for quad in self.quads() {
            ids.extend(quad.ids(codec)?);
        }
        ids.extend(self.leftover.iter().copied());
        Ok(ids)
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, PartitionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON and validate bucket shapes.
    pub fn from_json(json: &str) -> Result<Self, PartitionError> {
        let batches: Self = serde_json::from_str(json)?;
        batches.validate()?;
        Ok(batches)
    }
}

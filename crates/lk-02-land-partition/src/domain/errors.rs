//! # Domain Errors
//!
//! Error types for the Land Partition subsystem.

use shared_types::{ErrorClass, LinearId};
use thiserror::Error;

use super::value_objects::GridCoordinate;

/// Invalid grid or size-list configuration. Fatal at setup, never partial.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Grid has no cells.
    #[error("grid width must be positive")]
    ZeroWidth,

    /// Offset does not place the origin inside the grid.
    #[error("grid offset {offset} outside 0..={width}")]
    InvalidOffset {
        /// Grid width.
        width: u32,
        /// Rejected offset.
        offset: i64,
    },

    /// No quad sizes configured.
    #[error("allowed quad sizes must not be empty")]
    NoSizes,

    /// A quad size of zero.
    #[error("quad sizes must be positive")]
    ZeroSize,

    /// Sizes are not strictly descending.
    #[error("allowed quad sizes must be strictly descending: {previous} then {size}")]
    NotDescending {
        /// Preceding size.
        previous: u32,
        /// Offending size.
        size: u32,
    },

    /// A size does not divide its predecessor.
    #[error("quad size {size} does not divide {previous}")]
    NotDividing {
        /// Preceding size.
        previous: u32,
        /// Offending size.
        size: u32,
    },

    /// Aligned quads of the largest size would cross the grid edge.
    #[error("largest quad size {size} does not divide grid width {width}")]
    GridNotAligned {
        /// Largest configured size.
        size: u32,
        /// Grid width.
        width: u32,
    },
}

/// Errors raised by the grid codec, the partitioner and batch artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartitionError {
    /// Invalid configuration.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Coordinate outside the configured square.
    #[error("coordinate {coord} outside grid of width {width} (offset {offset})")]
    CoordinateOutOfBounds {
        /// Rejected coordinate.
        coord: GridCoordinate,
        /// Grid width.
        width: u32,
        /// Grid offset.
        offset: i64,
    },

    /// Linear id beyond the last cell.
    #[error("linear id {id} outside grid of {cells} cells")]
    IdOutOfBounds {
        /// Rejected id.
        id: LinearId,
        /// Number of cells in the grid.
        cells: u64,
    },

    /// A batch artifact's parallel arrays disagree.
    #[error("malformed batch bucket for size {size}: {reason}")]
    MalformedBatch {
        /// Bucket size.
        size: u32,
        /// What is wrong.
        reason: String,
    },

    /// Artifact (de)serialization failed.
    #[error("serialization error: {message}")]
    Serialization {
        /// Underlying serde message.
        message: String,
    },

    /// Partition output does not reconstruct its input.
    #[error("consistency violation: {0}")]
    Consistency(String),
}

impl PartitionError {
    /// Classification of this error.
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::Configuration(_) => ErrorClass::Configuration,
            Self::CoordinateOutOfBounds { .. }
            | Self::IdOutOfBounds { .. }
            | Self::MalformedBatch { .. }
            | Self::Serialization { .. } => ErrorClass::Input,
            Self::Consistency(_) => ErrorClass::Consistency,
        }
    }

    /// Whether this is an out-of-bounds coordinate or id.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(
            self,
            Self::CoordinateOutOfBounds { .. } | Self::IdOutOfBounds { .. }
        )
    }
}

impl From<serde_json::Error> for PartitionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}

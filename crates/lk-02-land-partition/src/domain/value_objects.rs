//! # Domain Value Objects
//!
//! Immutable value types for the Land Partition subsystem.

use serde::{Deserialize, Serialize};

/// A cell coordinate in caller space.
///
/// With a grid offset of `o`, valid coordinates run from `-o` to `width - o - 1`
/// on both axes.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoordinate {
    /// Column.
    pub x: i64,
    /// Row.
    pub y: i64,
}

impl GridCoordinate {
    /// Create a coordinate.
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A square batch of cells, anchored at its minimum corner.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Quad {
    /// Side length; one of the configured sizes.
    pub size: u32,
    /// Anchor column in caller space.
    pub x: i64,
    /// Anchor row in caller space.
    pub y: i64,
}

impl Quad {
    /// Create a quad.
    pub fn new(size: u32, x: i64, y: i64) -> Self {
        Self { size, x, y }
    }

    /// The anchor coordinate.
    pub fn anchor(&self) -> GridCoordinate {
        GridCoordinate::new(self.x, self.y)
    }

    /// Number of cells covered.
    pub fn cell_count(&self) -> u64 {
        u64::from(self.size) * u64::from(self.size)
    }
}

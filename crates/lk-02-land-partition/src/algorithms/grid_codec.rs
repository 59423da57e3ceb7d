//! # Grid Codec
//!
//! Bijection between caller coordinates and linear ids, and the serpentine
//! traversal used to lay out quad batches.
//!
//! `id = (x + offset) + (y + offset) * width`
//!
//! # Time Complexity: O(1) per id, O(size²) per path

use shared_types::LinearId;

use crate::config::GridConfig;
use crate::domain::{ConfigurationError, GridCoordinate, PartitionError};

/// Validated grid geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridCodec {
    config: GridConfig,
}

impl GridCodec {
    /// Create a codec, rejecting invalid geometry.
    pub fn new(config: GridConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The geometry this codec encodes.
    pub fn config(&self) -> GridConfig {
        self.config
    }

    /// Cells per side.
    pub fn width(&self) -> u32 {
        self.config.width
    }

    /// Coordinate shift.
    pub fn offset(&self) -> i64 {
        self.config.offset
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> u64 {
        self.config.cell_count()
    }

    /// Whether `coord` lies inside the grid.
    pub fn contains(&self, coord: GridCoordinate) -> bool {
        self.to_grid_space(coord).is_some()
    }

    /// Encode a coordinate.
    pub fn to_linear_id(&self, coord: GridCoordinate) -> Result<LinearId, PartitionError> {
        let (gx, gy) = self
            .to_grid_space(coord)
            .ok_or_else(|| self.coordinate_out_of_bounds(coord))?;
        Ok(gx + gy * u64::from(self.config.width))
    }

    /// Decode a linear id.
    pub fn from_linear_id(&self, id: LinearId) -> Result<GridCoordinate, PartitionError> {
        let cells = self.cell_count();
        if id >= cells {
            return Err(PartitionError::IdOutOfBounds { id, cells });
        }
        let width = u64::from(self.config.width);
        // Both quotients are below width, which fits in u32.
        let gx = (id % width) as i64;
        let gy = (id / width) as i64;
        Ok(GridCoordinate::new(
            gx - self.config.offset,
            gy - self.config.offset,
        ))
    }

    /// Ids of the `size`×`size` square at `anchor`, rows alternating direction.
    ///
    /// Row `r` runs left to right when `r` is even and right to left when odd.
    /// Fails if any covered cell is outside the grid.
    pub fn serpentine_path(
        &self,
        anchor: GridCoordinate,
        size: u32,
    ) -> Result<Vec<LinearId>, PartitionError> {
        let span = i64::from(size);
        let far = GridCoordinate::new(anchor.x + span - 1, anchor.y + span - 1);
        let start = self.to_linear_id(anchor)?;
        if size == 0 {
            return Ok(Vec::new());
        }
        self.to_linear_id(far)?;

        let width = u64::from(self.config.width);
        let side = u64::from(size);
        let mut path = Vec::with_capacity((side * side) as usize);
        for row in 0..side {
            let row_start = start + row * width;
            if row % 2 == 0 {
                path.extend((0..side).map(|col| row_start + col));
            } else {
                path.extend((0..side).rev().map(|col| row_start + col));
            }
        }
        Ok(path)
    }

    /// Anchor of the `size`-aligned square containing `coord`.
    ///
    /// Alignment is taken in grid space, so with a non-zero offset the
    /// returned caller coordinate need not be a multiple of `size`.
    pub fn aligned_anchor(&self, coord: GridCoordinate, size: u32) -> GridCoordinate {
        let span = i64::from(size.max(1));
        let offset = self.config.offset;
        let gx = (coord.x + offset).div_euclid(span) * span;
        let gy = (coord.y + offset).div_euclid(span) * span;
        GridCoordinate::new(gx - offset, gy - offset)
    }

    fn to_grid_space(&self, coord: GridCoordinate) -> Option<(u64, u64)> {
        let width = i64::from(self.config.width);
        let gx = coord.x.checked_add(self.config.offset)?;
        let gy = coord.y.checked_add(self.config.offset)?;
        if (0..width).contains(&gx) && (0..width).contains(&gy) {
            Some((gx as u64, gy as u64))
        } else {
            None
        }
    }

    fn coordinate_out_of_bounds(&self, coord: GridCoordinate) -> PartitionError {
        PartitionError::CoordinateOutOfBounds {
            coord,
            width: self.config.width,
            offset: self.config.offset,
        }
    }
}

/// Encode `coord` on a `width`-wide grid shifted by `offset`.
pub fn to_linear_id(
    coord: GridCoordinate,
    width: u32,
    offset: i64,
) -> Result<LinearId, PartitionError> {
    GridCodec::new(GridConfig { width, offset })?.to_linear_id(coord)
}

/// Decode `id` on a `width`-wide grid shifted by `offset`.
pub fn from_linear_id(
    id: LinearId,
    width: u32,
    offset: i64,
) -> Result<GridCoordinate, PartitionError> {
    GridCodec::new(GridConfig { width, offset })?.from_linear_id(id)
}

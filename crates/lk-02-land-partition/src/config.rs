//! # Land Partition Configuration
//!
//! Grid geometry, allowed quad sizes, and the TOML file that carries both.
//!
//! ```toml
//! [grid]
//! width = 408
//! offset = 0
//!
//! [partition]
//! allowed_sizes = [24, 12, 6, 3]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::ConfigurationError;

/// Default land grid width.
pub const DEFAULT_GRID_WIDTH: u32 = 408;

/// Default quad sizes, largest first.
pub const DEFAULT_ALLOWED_SIZES: [u32; 4] = [24, 12, 6, 3];

/// Square grid geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Cells per side.
    pub width: u32,
    /// Shift from caller coordinates to grid coordinates on both axes.
    pub offset: i64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            offset: 0,
        }
    }
}

impl GridConfig {
    /// Create a config for testing (small centred grid).
    pub fn for_testing() -> Self {
        Self {
            width: 48,
            offset: 24,
        }
    }

    /// Check `width > 0` and `0 <= offset <= width`.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.width == 0 {
            return Err(ConfigurationError::ZeroWidth);
        }
        if self.offset < 0 || self.offset > i64::from(self.width) {
            return Err(ConfigurationError::InvalidOffset {
                width: self.width,
                offset: self.offset,
            });
        }
        Ok(())
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.width)
    }
}

/// Allowed quad sizes for a partition run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionConfig {
    /// Side lengths, strictly descending, each dividing its predecessor.
    /// A trailing 1 is accepted and means "singles", which are reported as
    /// leftover rather than as quads.
    pub allowed_sizes: Vec<u32>,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            allowed_sizes: DEFAULT_ALLOWED_SIZES.to_vec(),
        }
    }
}

impl PartitionConfig {
    /// Create a config for testing (two sizes).
    pub fn for_testing() -> Self {
        Self {
            allowed_sizes: vec![6, 3],
        }
    }

    /// Check the size list against itself and against `grid`.
    pub fn validate(&self, grid: &GridConfig) -> Result<(), ConfigurationError> {
        let largest = *self
            .allowed_sizes
            .first()
            .ok_or(ConfigurationError::NoSizes)?;

        let mut previous: Option<u32> = None;
        for &size in &self.allowed_sizes {
            if size == 0 {
                return Err(ConfigurationError::ZeroSize);
            }
            if let Some(previous) = previous {
                if size >= previous {
                    return Err(ConfigurationError::NotDescending { previous, size });
                }
                if previous % size != 0 {
                    return Err(ConfigurationError::NotDividing { previous, size });
                }
            }
            previous = Some(size);
        }

        if grid.width % largest != 0 {
            return Err(ConfigurationError::GridNotAligned {
                size: largest,
                width: grid.width,
            });
        }
        Ok(())
    }

    /// Smallest configured size.
    pub fn smallest(&self) -> Option<u32> {
        self.allowed_sizes.last().copied()
    }

    /// Sizes that produce quads, largest first. Size 1 is never a quad.
    pub fn quad_sizes(&self) -> impl Iterator<Item = u32> + '_ {
        self.allowed_sizes.iter().copied().filter(|&size| size > 1)
    }
}

/// Errors that can occur during config loading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("failed to read {path}: {error}")]
    Io {
        /// Path of the file that failed to load.
        path: String,
        /// Error message from the I/O operation.
        error: String,
    },
    /// TOML parsing error.
    #[error("failed to parse config: {0}")]
    Parse(String),
}

/// Configuration file structure.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    grid: GridSection,
    #[serde(default)]
    partition: PartitionSection,
}

#[derive(Debug, Default, Deserialize)]
struct GridSection {
    width: Option<u32>,
    offset: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
struct PartitionSection {
    allowed_sizes: Option<Vec<u32>>,
}

/// Grid and partition settings loaded together.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandConfig {
    /// Grid geometry.
    pub grid: GridConfig,
    /// Allowed quad sizes.
    pub partition: PartitionConfig,
}

impl LandConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or parsed. Semantic checks are
    /// left to [`LandConfig::validate`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string. Missing keys take defaults.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        let defaults = Self::default();
        Ok(Self {
            grid: GridConfig {
                width: file.grid.width.unwrap_or(defaults.grid.width),
                offset: file.grid.offset.unwrap_or(defaults.grid.offset),
            },
            partition: PartitionConfig {
                allowed_sizes: file
                    .partition
                    .allowed_sizes
                    .unwrap_or(defaults.partition.allowed_sizes),
            },
        })
    }

    /// Validate grid then sizes.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.grid.validate()?;
        self.partition.validate(&self.grid)
    }
}

//! # Land Partition Subsystem (lk-02)
//!
//! Maps land cells to linear ids and groups an owner's cells into the fewest
//! greedy square batches for migration.
//!
//! **Subsystem ID:** 02
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Data Flow
//!
//! ```text
//! ownership snapshot ──→ [OwnedSet] ──→ [QuadPartitioner::partition] ──→ PartitionOutcome
//!                                              │                              │
//!                                         [GridCodec]                   [QuadBatches] → JSON
//! ```
//!
//! ## Guarantees
//!
//! | Property | Enforcement | Location |
//! |----------|-------------|----------|
//! | `id = (x+offset) + (y+offset)*width`, out-of-range rejected | `GridCodec` | algorithms/grid_codec.rs |
//! | Quad ids laid out row by row, alternating direction | `serpentine_path` | algorithms/grid_codec.rs |
//! | Sizes descending, dividing, fitting the grid | `PartitionConfig::validate` | config.rs |
//! | Quads disjoint, quads ∪ leftover = input | `check_consistency` | domain/entities.rs |
//! | Out-of-grid ids fail before any mutation | `QuadPartitioner::partition` | algorithms/quad_partitioner.rs |
//!
//! ## Module Structure
//!
//! ```text
//! lk-02-land-partition/
//! ├── domain/          # Coordinates, quads, owned set, outcome, errors
//! ├── algorithms/      # Grid codec, greedy partitioner
//! ├── ports/           # PartitionApi (inbound)
//! ├── adapters/        # QuadBatches export
//! └── config.rs        # GridConfig, PartitionConfig, LandConfig (TOML)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports
pub use adapters::{QuadBatches, SizeBucket};
pub use algorithms::{from_linear_id, partition_owned_ids, to_linear_id, GridCodec, QuadPartitioner};
pub use config::{
    ConfigError, GridConfig, LandConfig, PartitionConfig, DEFAULT_ALLOWED_SIZES,
    DEFAULT_GRID_WIDTH,
};
pub use domain::{
    ConfigurationError, GridCoordinate, OwnedSet, PartitionError, PartitionOutcome, Quad,
};
pub use ports::PartitionApi;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

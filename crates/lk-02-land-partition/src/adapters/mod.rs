//! # Adapters Layer
//!
//! Serialisable artifacts produced by the Land Partition subsystem.

pub mod batch_export;

pub use batch_export::{QuadBatches, SizeBucket};

//! # Algorithms Module
//!
//! Grid encoding and greedy quad extraction.

pub mod grid_codec;
pub mod quad_partitioner;

pub use grid_codec::{from_linear_id, to_linear_id, GridCodec};
pub use quad_partitioner::{partition_owned_ids, QuadPartitioner};

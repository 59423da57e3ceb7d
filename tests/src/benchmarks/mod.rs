//! # Landkit Benchmarks
//!
//! Performance benchmarks per subsystem, registered from
//! `benches/subsystem_benchmarks.rs`.

pub mod lk_01_commitment_tree;
pub mod lk_02_land_partition;

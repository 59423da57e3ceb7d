//! # Landkit Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Criterion groups per subsystem, plus snapshot fixtures
//! │   ├── lk_01_commitment_tree.rs
//! │   └── lk_02_land_partition.rs
//! │
//! └── integration/      # Cross-crate flows through the JSON artifacts
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p lk-tests
//!
//! # Benchmarks
//! cargo bench -p lk-tests
//! ```

pub mod benchmarks;
pub mod integration;

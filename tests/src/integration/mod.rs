//! # Integration Tests
//!
//! Cross-crate flows.

pub mod flows;

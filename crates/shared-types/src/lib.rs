//! # Shared Types Crate
//!
//! Primitives shared by the Landkit subsystems.
//!
//! ## Contents
//!
//! - **Entities**: `Hash`/`LeafHash` (32-byte big-endian words) and `LinearId`.
//! - **Encoding**: `0x`-prefixed hex helpers and serde adapters, the format
//!   used by every persisted artifact and by the external relayer.
//! - **Errors**: `ErrorClass`, the three-way taxonomy every subsystem error
//!   maps onto (configuration, input, consistency).

pub mod encoding;
pub mod entities;
pub mod errors;

pub use encoding::*;
pub use entities::*;
pub use errors::*;

//! # Ports Layer
//!
//! Hexagonal architecture ports (interfaces) for the Commitment Tree subsystem.
//!
//! - **Driving Ports (Inbound)**: `CommitmentApi`, consumed by the CLI and the proof book.
//! - **Driven Ports (Outbound)**: `HashProvider`, the verifier's pair-hash primitive.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;

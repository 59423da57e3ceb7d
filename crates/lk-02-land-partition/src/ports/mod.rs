//! # Ports Module
//!
//! Hexagonal architecture ports. Land Partition needs no outbound
//! dependencies, so only the driving side is defined.

pub mod inbound;

pub use inbound::*;

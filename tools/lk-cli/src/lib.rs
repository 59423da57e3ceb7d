//! lk: Landkit operator CLI
//!
//! Thin glue over the subsystem crates: reads inputs from disk, calls the
//! core operations, writes artifacts back.
//!
//! ```text
//! lk tree build --claims claims.json --out book.json
//! lk tree verify --book book.json
//! lk tree prove --book book.json --claim alice
//! lk grid encode --x 3 --y -7 --offset 204
//! lk grid decode --id 83436
//! lk partition --ids owned.json --sizes 24,12,6,3 --out batches.json
//! ```

pub mod cli;
pub mod commands;
pub mod logging;

pub use cli::{Cli, Command, GridArgs, GridCommand, PartitionArgs, TreeCommand};

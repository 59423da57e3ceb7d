//! lk: Landkit operator CLI
//!
//! Builds proof books for claim lists and quad batches for land migration.

use clap::Parser;

use lk_cli::{commands, logging, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let output = commands::run(&cli)?;
    println!("{}", output);
    Ok(())
}

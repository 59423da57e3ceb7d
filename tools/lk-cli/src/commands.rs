//! Command handlers. Each returns the text `main` prints to stdout.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use lk_01_commitment_tree::{ClaimLeaf, ProofBook};
use lk_02_land_partition::{partition_owned_ids, GridCodec, GridCoordinate, QuadBatches};
use serde::de::DeserializeOwned;
use shared_types::{encode_hash, LinearId};
use tracing::info;

use crate::cli::{Cli, Command, GridArgs, GridCommand, PartitionArgs, TreeCommand};

/// Dispatch a parsed command line.
pub fn run(cli: &Cli) -> anyhow::Result<String> {
    match &cli.command {
        Command::Tree(cmd) => run_tree(cmd),
        Command::Grid(cmd) => run_grid(cmd),
        Command::Partition(args) => run_partition(args),
    }
}

fn run_tree(cmd: &TreeCommand) -> anyhow::Result<String> {
    match cmd {
        TreeCommand::Build { claims, out } => {
            let claims: Vec<ClaimLeaf> = read_json(claims)?;
            let book = ProofBook::from_claims(&claims).context("building proof book")?;
            let json = book.to_json()?;

            match out {
                Some(path) => {
                    write_file(path, &json)?;
                    Ok(format!(
                        "root {} ({} claims) written to {}",
                        encode_hash(&book.root),
                        book.len(),
                        path.display()
                    ))
                }
                None => Ok(json),
            }
        }
        TreeCommand::Verify { book } => {
            let book = load_book(book)?;
            let failed = book.verify_all();
            if !failed.is_empty() {
                bail!(
                    "{} of {} proofs do not verify: {}",
                    failed.len(),
                    book.len(),
                    failed.join(", ")
                );
            }
            Ok(format!(
                "all {} proofs verify against root {}",
                book.len(),
                encode_hash(&book.root)
            ))
        }
        TreeCommand::Prove { book, claim } => {
            let book = load_book(book)?;
            let entry = book
                .get(claim)
                .with_context(|| format!("claim {} is not in the proof book", claim))?;
            Ok(serde_json::to_string_pretty(entry)?)
        }
    }
}

fn run_grid(cmd: &GridCommand) -> anyhow::Result<String> {
    match cmd {
        GridCommand::Encode { grid, x, y } => {
            let codec = codec_for(grid)?;
            let id = codec.to_linear_id(GridCoordinate::new(*x, *y))?;
            Ok(id.to_string())
        }
        GridCommand::Decode { grid, id } => {
            let codec = codec_for(grid)?;
            Ok(codec.from_linear_id(*id)?.to_string())
        }
    }
}

fn run_partition(args: &PartitionArgs) -> anyhow::Result<String> {
    let config = args.grid.resolve(args.sizes.as_deref())?;
    config.validate().context("invalid partition configuration")?;

    let ids: Vec<LinearId> = read_json(&args.ids)?;
    let outcome = partition_owned_ids(&ids, &config.grid, &config.partition)?;
    let batches = QuadBatches::from_outcome(&outcome, &config.partition)?;
    let json = batches.to_json()?;

    info!(
        "[lk] {} ids → {} quads + {} singles",
        ids.len(),
        batches.quad_count(),
        batches.leftover.len()
    );

    match &args.out {
        Some(path) => {
            write_file(path, &json)?;
            Ok(format!(
                "{} batches written to {}",
                outcome.batch_count(),
                path.display()
            ))
        }
        None => Ok(json),
    }
}

fn codec_for(grid: &GridArgs) -> anyhow::Result<GridCodec> {
    let config = grid.resolve(None)?;
    GridCodec::new(config.grid).context("invalid grid configuration")
}

fn load_book(path: &Path) -> anyhow::Result<ProofBook> {
    let json = read_file(path)?;
    ProofBook::from_json(&json).with_context(|| format!("parsing proof book {}", path.display()))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let json = read_file(path)?;
    serde_json::from_str(&json).with_context(|| format!("parsing {}", path.display()))
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn write_file(path: &Path, contents: &str) -> anyhow::Result<()> {
    fs::write(path, contents).with_context(|| format!("writing {}", path.display()))
}

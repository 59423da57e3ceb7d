//! Command-line surface.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use lk_02_land_partition::LandConfig;

/// lk: Landkit operator CLI
#[derive(Parser, Debug)]
#[command(name = "lk", version)]
#[command(about = "Proof books for claim lists and quad batches for land migration")]
pub struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level operations.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Commitment tree over pre-hashed claim leaves
    #[command(subcommand)]
    Tree(TreeCommand),

    /// Coordinate / linear id conversion
    #[command(subcommand)]
    Grid(GridCommand),

    /// Partition an ownership snapshot into quad batches
    Partition(PartitionArgs),
}

/// Commitment tree operations.
#[derive(Subcommand, Debug)]
pub enum TreeCommand {
    /// Build a proof book from a JSON array of `{claim_id, leaf}`
    Build {
        /// Claims file
        #[arg(long)]
        claims: PathBuf,
        /// Write the proof book here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Re-check every proof in a proof book against its root
    Verify {
        /// Proof book file
        #[arg(long)]
        book: PathBuf,
    },

    /// Print the proof entry for one claim
    Prove {
        /// Proof book file
        #[arg(long)]
        book: PathBuf,
        /// Claim id
        #[arg(long)]
        claim: String,
    },
}

/// Grid geometry flags, layered over an optional TOML file.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct GridArgs {
    /// TOML file with `[grid]` and `[partition]` sections
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Grid width (overrides the file)
    #[arg(long)]
    pub width: Option<u32>,

    /// Grid offset (overrides the file)
    #[arg(long, allow_hyphen_values = true)]
    pub offset: Option<i64>,
}

impl GridArgs {
    /// Load the file (or defaults) and apply flag overrides.
    pub fn resolve(&self, sizes: Option<&[u32]>) -> anyhow::Result<LandConfig> {
        let mut config = match &self.config {
            Some(path) => LandConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => LandConfig::default(),
        };

        if let Some(width) = self.width {
            config.grid.width = width;
        }
        if let Some(offset) = self.offset {
            config.grid.offset = offset;
        }
        if let Some(sizes) = sizes {
            config.partition.allowed_sizes = sizes.to_vec();
        }
        Ok(config)
    }
}

/// Grid operations.
#[derive(Subcommand, Debug)]
pub enum GridCommand {
    /// Coordinate to linear id
    Encode {
        #[command(flatten)]
        grid: GridArgs,
        /// Column
        #[arg(long, allow_hyphen_values = true)]
        x: i64,
        /// Row
        #[arg(long, allow_hyphen_values = true)]
        y: i64,
    },

    /// Linear id to coordinate
    Decode {
        #[command(flatten)]
        grid: GridArgs,
        /// Linear id
        #[arg(long)]
        id: u64,
    },
}

/// Partition flags.
#[derive(clap::Args, Debug)]
pub struct PartitionArgs {
    #[command(flatten)]
    pub grid: GridArgs,

    /// Allowed quad sizes, largest first (overrides the file)
    #[arg(long, value_delimiter = ',')]
    pub sizes: Option<Vec<u32>>,

    /// JSON array of owned linear ids, in enumeration order
    #[arg(long)]
    pub ids: PathBuf,

    /// Write the batches here instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tccp::primitives::BlockIndex;
use tccp_cli::commands::{challenge, commit, proof, verify};
use tccp_cli::input::{parse_hash, ParamArgs};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tccp")]
#[command(about = "Compute, inspect and verify per-block challenge proofs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the proof for a (previous hash, real root) pair and print the receipt as JSON
    Proof {
        /// Previous block hash (64 hex chars)
        #[arg(long)]
        prev: String,

        /// Real transaction Merkle root (64 hex chars)
        #[arg(long)]
        root: String,

        #[command(flatten)]
        params: ParamArgs,
    },
    /// List the virtual records behind a proof
    Challenge {
        #[arg(long)]
        prev: String,

        #[arg(long)]
        root: String,

        /// Show only the first N records
        #[arg(long)]
        limit: Option<usize>,

        /// Print rows as JSON instead of a table
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        params: ParamArgs,
    },
    /// Verify the commitment of a hex- or binary-encoded block
    Verify {
        #[arg(long)]
        block: PathBuf,

        /// Previous block hash. Omit for genesis.
        #[arg(long)]
        prev: Option<String>,

        /// Height of the previous block
        #[arg(long, default_value_t = 0)]
        height: u32,

        #[command(flatten)]
        params: ParamArgs,
    },
    /// Embed a commitment into a block template
    Commit {
        #[arg(long)]
        block: PathBuf,

        #[arg(long)]
        prev: String,

        /// Height of the previous block
        #[arg(long, default_value_t = 0)]
        height: u32,

        /// Where to write the committed block
        #[arg(long)]
        out: PathBuf,

        #[command(flatten)]
        params: ParamArgs,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "tccp=info,tccp_cli=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Proof { prev, root, params } => {
            proof::run(&parse_hash(&prev)?, &parse_hash(&root)?, &params.load()?)
        }
        Commands::Challenge { prev, root, limit, json, params } => challenge::run(
            &parse_hash(&prev)?,
            &parse_hash(&root)?,
            &params.load()?,
            limit,
            json,
        ),
        Commands::Verify { block, prev, height, params } => {
            let prev = prev
                .map(|p| parse_hash(&p).map(|hash| BlockIndex::new(hash, height)))
                .transpose()?;
            verify::run(&block, prev.as_ref(), &params.load()?)
        }
        Commands::Commit { block, prev, height, out, params } => {
            let prev = BlockIndex::new(parse_hash(&prev)?, height);
            commit::run(&block, &out, &prev, &params.load()?).map(|_| ())
        }
    }
}

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Loading parameters, hashes and blocks from the command line.

use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tccp::primitives::Block;
use tccp::{ConsensusParams, Hash256};

/// Where the consensus parameters come from.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ParamArgs {
    /// JSON file with consensus parameters. Defaults apply when omitted.
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Override the challenge byte budget.
    #[arg(long)]
    pub max_bytes: Option<usize>,
}

impl ParamArgs {
    pub fn load(&self) -> anyhow::Result<ConsensusParams> {
        let params = match &self.params {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("reading params file {}", path.display()))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("parsing params file {}", path.display()))?
            }
            None => ConsensusParams::default(),
        };

        Ok(match self.max_bytes {
            Some(max_bytes) => params.with_max_bytes(max_bytes),
            None => params,
        })
    }
}

pub fn parse_hash(s: &str) -> anyhow::Result<Hash256> {
    Hash256::from_hex(s).with_context(|| format!("invalid 32-byte hash '{s}'"))
}

/// On-disk form of a block file. Preserved when a block is rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockEncoding {
    Hex,
    Binary,
}

/// Reads a block stored either as raw bytes or as a hex string.
pub fn read_block(path: &Path) -> anyhow::Result<(Block, BlockEncoding)> {
    let raw = fs::read(path).with_context(|| format!("reading block file {}", path.display()))?;

    let text = std::str::from_utf8(&raw).ok().map(str::trim);
    let (bytes, encoding) = match text {
        Some(t) if !t.is_empty() && t.len() % 2 == 0 && t.bytes().all(|b| b.is_ascii_hexdigit()) => {
            (hex::decode(t)?, BlockEncoding::Hex)
        }
        _ => (raw, BlockEncoding::Binary),
    };

    let block = Block::from_bytes(&bytes)
        .with_context(|| format!("decoding block from {}", path.display()))?;
    Ok((block, encoding))
}

pub fn write_block(path: &Path, block: &Block, encoding: BlockEncoding) -> anyhow::Result<()> {
    let bytes = block.to_bytes();
    let result = match encoding {
        BlockEncoding::Hex => fs::write(path, hex::encode(bytes) + "\n"),
        BlockEncoding::Binary => fs::write(path, bytes),
    };
    result.with_context(|| format!("writing block file {}", path.display()))
}

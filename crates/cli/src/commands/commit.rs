// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::input::{read_block, write_block};
use std::path::Path;
use tccp::miner::commit_block;
use tccp::primitives::BlockIndex;
use tccp::{ConsensusParams, Hash256};

/// Embeds the commitment into the block at `block_path` and writes it to
/// `out_path` in the input's encoding.
pub fn run(
    block_path: &Path,
    out_path: &Path,
    prev: &BlockIndex,
    params: &ConsensusParams,
) -> anyhow::Result<Hash256> {
    let (mut block, encoding) = read_block(block_path)?;
    let proof = commit_block(&mut block, prev, params)?;
    write_block(out_path, &block, encoding)?;

    println!("\nCOMMITTED\n");
    println!("Block:  {}", block.hash());
    println!("Proof:  {proof}");
    println!("Output: {}\n", out_path.display());
    Ok(proof)
}

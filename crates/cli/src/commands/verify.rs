// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::input::read_block;
use std::path::Path;
use tccp::error::VerifyError;
use tccp::primitives::BlockIndex;
use tccp::{check_block, ConsensusParams};

/// Checks a block file. A rejected block is an error so the process exits non-zero.
///
/// `prev` of `None` treats the block as genesis.
pub fn run(block_path: &Path, prev: Option<&BlockIndex>, params: &ConsensusParams) -> anyhow::Result<()> {
    let (block, _) = read_block(block_path)?;

    match check_block(&block, prev, params) {
        Ok(()) => {
            println!("\nACCEPTED\n");
            println!("Block:  {}", block.hash());
            if prev.is_none() {
                println!("Note:   no previous block, proof check skipped");
            }
            println!();
            Ok(())
        }
        Err(e) => {
            println!("\nREJECTED\n");
            println!("Block:  {}", block.hash());
            println!("Stage:  {:?}", e.stage());
            println!("Reason: {e}");
            if let VerifyError::Mismatch { expected, found } = &e {
                println!("Expected Proof: {expected}");
                println!("Found Proof:    {found}");
            }
            println!();
            Err(e.into())
        }
    }
}

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Block verification against the proof rule.
//!
//! One synchronous pass per block:
//! ```text
//! Start -> CommitmentLocated -> RootReconstructed -> ProofRecomputed -> Accepted | Rejected
//! ```
//! Blocks without a previous block (genesis) are exempt.

use crate::commitment::find_commitment;
use crate::config::ConsensusParams;
use crate::error::{CommitmentError, VerifyError, VerifyStage};
use crate::hash::Hash256;
use crate::primitives::block::{block_merkle_root, Block, BlockIndex};
use crate::proof::compute_proof;

/// Merkle root of `block` with coinbase output `commitment_index` removed.
///
/// Only that one output is dropped; every other output and transaction is
/// hashed exactly as delivered.
pub fn reconstruct_real_root(block: &Block, commitment_index: usize) -> Result<Hash256, VerifyError> {
    let coinbase = block.coinbase().ok_or(VerifyError::MissingCoinbase)?;

    if commitment_index >= coinbase.outputs.len() {
        return Err(CommitmentError::NotFound.into());
    }

    let mut stripped = coinbase.clone();
    stripped.outputs.remove(commitment_index);

    let mut txs = block.txs.clone();
    txs[0] = stripped;
    Ok(block_merkle_root(&txs))
}

/// Checks the proof rule and reports why a block fails it.
pub fn check_block(
    block: &Block,
    prev: Option<&BlockIndex>,
    params: &ConsensusParams,
) -> Result<(), VerifyError> {
    let prev = match prev {
        Some(prev) => prev,
        None => return Ok(()),
    };

    let coinbase = block.coinbase().ok_or(VerifyError::MissingCoinbase)?;

    let (index, submitted) = find_commitment(&coinbase.outputs, &params.commitment_magic)?;
    tracing::trace!(stage = ?VerifyStage::CommitmentLocated, index, "verifier stage");

    let real_root = reconstruct_real_root(block, index)?;
    tracing::trace!(stage = ?VerifyStage::RootReconstructed, %real_root, "verifier stage");

    let expected = compute_proof(&prev.hash, &real_root, params);
    tracing::trace!(stage = ?VerifyStage::ProofRecomputed, %expected, "verifier stage");

    if submitted != expected {
        return Err(VerifyError::Mismatch { expected, found: submitted });
    }
    Ok(())
}

/// Boolean form of `check_block`: every rejection reason collapses to `false`.
pub fn verify_block(block: &Block, prev: Option<&BlockIndex>, params: &ConsensusParams) -> bool {
    match check_block(block, prev, params) {
        Ok(()) => {
            tracing::debug!(block = %block.hash(), "proof accepted");
            true
        }
        Err(e) if e.is_precondition() => {
            tracing::warn!(block = %block.hash(), error = %e, "block violates verifier precondition");
            false
        }
        Err(e) => {
            tracing::debug!(block = %block.hash(), stage = ?e.stage(), error = %e, "proof rejected");
            false
        }
    }
}

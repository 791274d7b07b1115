// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Embedding the commitment into a block template.
//!
//! This is the inverse of the verifier's root reconstruction: the real root is
//! taken over the template as-is, then exactly one commitment output is
//! appended to the coinbase.

use crate::commitment::{commitment_script, find_commitment};
use crate::config::{ConsensusParams, MAGIC_LEN};
use crate::error::{CommitmentError, MinerError};
use crate::hash::Hash256;
use crate::primitives::block::{Block, BlockIndex};
use crate::primitives::transaction::TxOut;
use crate::proof::compute_proof;

/// Zero-value output carrying `proof`.
pub fn commitment_output(magic: &[u8; MAGIC_LEN], proof: &Hash256) -> TxOut {
    TxOut::new(0, commitment_script(magic, proof))
}

/// Computes the proof for `block` built on `prev`, appends the commitment
/// output to its coinbase and refreshes the header Merkle root.
///
/// Returns the embedded proof. A coinbase that already carries a commitment is
/// refused, since a second one would make the block ambiguous.
pub fn commit_block(
    block: &mut Block,
    prev: &BlockIndex,
    params: &ConsensusParams,
) -> Result<Hash256, MinerError> {
    let coinbase = block.txs.first().ok_or(MinerError::MissingCoinbase)?;
    match find_commitment(&coinbase.outputs, &params.commitment_magic) {
        Err(CommitmentError::NotFound) => {}
        Ok((index, _)) => return Err(MinerError::AlreadyCommitted(index)),
        Err(CommitmentError::Ambiguous { first, .. }) => {
            return Err(MinerError::AlreadyCommitted(first))
        }
    }

    let real_root = block.merkle_root();
    let proof = compute_proof(&prev.hash, &real_root, params);

    block.txs[0]
        .outputs
        .push(commitment_output(&params.commitment_magic, &proof));
    block.header.prev_block = prev.hash;
    block.header.merkle_root = block.merkle_root();

    tracing::debug!(
        height = prev.height.saturating_add(1),
        %real_root,
        %proof,
        "embedded challenge commitment"
    );
    Ok(proof)
}

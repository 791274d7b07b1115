// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Coinbase commitment codec.
//!
//! Layout (38 bytes, bit-exact):
//! ```text
//! [0]      OP_RETURN (0x6a)
//! [1]      0x24, push of 36 bytes
//! [2..6]   magic tag
//! [6..38]  proof
//! ```

use crate::config::{COMMITMENT_PUSH_LEN, COMMITMENT_SCRIPT_LEN, MAGIC_LEN};
use crate::error::CommitmentError;
use crate::hash::Hash256;
use crate::primitives::script::{Script, OP_RETURN};
use crate::primitives::transaction::TxOut;

const PROOF_OFFSET: usize = 2 + MAGIC_LEN;

/// Builds the commitment script for `proof`.
pub fn commitment_script(magic: &[u8; MAGIC_LEN], proof: &Hash256) -> Script {
    let mut bytes = Vec::with_capacity(COMMITMENT_SCRIPT_LEN);
    bytes.push(OP_RETURN);
    bytes.push(COMMITMENT_PUSH_LEN);
    bytes.extend_from_slice(magic);
    bytes.extend_from_slice(proof.as_bytes());
    Script(bytes)
}

/// Returns the embedded proof if `script` has the exact commitment shape.
pub fn parse_commitment(script: &[u8], magic: &[u8; MAGIC_LEN]) -> Option<Hash256> {
    if script.len() != COMMITMENT_SCRIPT_LEN {
        return None;
    }
    if script[0] != OP_RETURN || script[1] != COMMITMENT_PUSH_LEN {
        return None;
    }
    if script[2..PROOF_OFFSET] != magic[..] {
        return None;
    }
    let mut proof = [0u8; 32];
    proof.copy_from_slice(&script[PROOF_OFFSET..]);
    Some(Hash256(proof))
}

/// Locates the single commitment output.
///
/// Zero matches is `NotFound`; a second match is `Ambiguous`, whatever the
/// proofs inside say.
pub fn find_commitment(
    outputs: &[TxOut],
    magic: &[u8; MAGIC_LEN],
) -> Result<(usize, Hash256), CommitmentError> {
    let mut found: Option<(usize, Hash256)> = None;

    for (i, output) in outputs.iter().enumerate() {
        if let Some(proof) = parse_commitment(output.script_pubkey.as_bytes(), magic) {
            if let Some((first, _)) = found {
                return Err(CommitmentError::Ambiguous { first, second: i });
            }
            found = Some((i, proof));
        }
    }

    found.ok_or(CommitmentError::NotFound)
}

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Binary Merkle root over ordered leaf hashes.
//!
//! Layout:
//! ```text
//! level 0: leaves in input order
//! level n+1: sha256d(left || right) for each pair,
//!            an odd trailing node is paired with itself
//! root: the single node left, or all-zero for no leaves
//! ```

use crate::hash::{sha256d_pair, Hash256};

/// Computes the Merkle root. Empty input yields `Hash256::ZERO`.
pub fn merkle_root(leaves: &[Hash256]) -> Hash256 {
    merkle_root_checked(leaves).0
}

/// Root plus whether any level hashed two identical siblings, i.e. whether a
/// leaf list with duplicated trailing entries collides with this one.
fn merkle_root_checked(leaves: &[Hash256]) -> (Hash256, bool) {
    if leaves.is_empty() {
        return (Hash256::ZERO, false);
    }

    let mut mutated = false;
    let mut level: Vec<Hash256> = leaves.to_vec();

    while level.len() > 1 {
        for pair in level.chunks_exact(2) {
            if pair[0] == pair[1] {
                mutated = true;
            }
        }
        if level.len() % 2 == 1 {
            let last = level[level.len() - 1];
            level.push(last);
        }
        level = level
            .chunks_exact(2)
            .map(|pair| sha256d_pair(&pair[0], &pair[1]))
            .collect();
    }

    (level[0], mutated)
}

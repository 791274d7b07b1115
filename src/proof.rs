// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Proof aggregation and the miner-facing proof computation.

use crate::challenge::{build_challenge, VirtualChallengeSet};
use crate::config::ConsensusParams;
use crate::hash::Hash256;
use crate::merkle::merkle_root;
use crate::seed::compute_seed;
use serde::{Deserialize, Serialize};

/// Merkle root over the set's txids in generation order; zero for an empty set.
pub fn aggregate(set: &VirtualChallengeSet) -> Hash256 {
    if set.is_empty() {
        return Hash256::ZERO;
    }
    merkle_root(&set.txids())
}

/// The proof a block built on `prev_hash` with real root `real_root` must carry.
pub fn compute_proof(prev_hash: &Hash256, real_root: &Hash256, params: &ConsensusParams) -> Hash256 {
    let seed = compute_seed(prev_hash, real_root);
    let set = build_challenge(&seed, params.challenge_max_bytes);
    aggregate(&set)
}

/// Every intermediate value of one proof computation.
///
/// Two implementations that disagree on `proof` can compare receipts:
/// a differing `transcript_hash` means the records themselves diverged,
/// an equal one points at the aggregation step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProofReceipt {
    pub prev_hash: Hash256,
    pub real_root: Hash256,
    pub seed: Hash256,
    pub max_bytes: usize,
    pub record_count: usize,
    pub challenge_bytes: usize,
    /// BLAKE3 over the serialized records, concatenated in order.
    pub transcript_hash: Hash256,
    pub proof: Hash256,
}

impl ProofReceipt {
    pub fn compute(prev_hash: &Hash256, real_root: &Hash256, params: &ConsensusParams) -> Self {
        let seed = compute_seed(prev_hash, real_root);
        let set = build_challenge(&seed, params.challenge_max_bytes);

        Self {
            prev_hash: *prev_hash,
            real_root: *real_root,
            seed,
            max_bytes: params.challenge_max_bytes,
            record_count: set.len(),
            challenge_bytes: set.total_bytes,
            transcript_hash: transcript_hash(&set),
            proof: aggregate(&set),
        }
    }
}

/// BLAKE3 of the challenge set's serialized records, in order.
pub fn transcript_hash(set: &VirtualChallengeSet) -> Hash256 {
    let mut hasher = blake3::Hasher::new();
    let mut buf = Vec::new();
    for record in &set.records {
        buf.clear();
        record.tx.encode_into(&mut buf);
        hasher.update(&buf);
    }
    Hash256(*hasher.finalize().as_bytes())
}

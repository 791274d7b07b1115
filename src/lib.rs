// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! tccp: a deterministic per-block challenge proof.
//!
//! Each block commits, inside its coinbase, to the Merkle root of a synthetic
//! transaction set generated from the previous block hash and the block's own
//! transaction root. Validators regenerate the set and compare.

pub mod config;
pub mod error;
pub mod hash;
pub mod merkle;
pub mod primitives;
pub mod seed;
pub mod stream;
pub mod challenge;
pub mod proof;
pub mod commitment;
pub mod verify;
pub mod miner;

pub use config::ConsensusParams;
pub use hash::Hash256;
pub use proof::{aggregate, compute_proof, ProofReceipt};
pub use verify::{check_block, verify_block};

#[cfg(test)]
pub mod tests;

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use crate::hash::Hash256;
use thiserror::Error;

/// Failures while decoding wire-format transactions and blocks.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Non-canonical CompactSize encoding")]
    NonCanonicalCompactSize,

    #[error("Length {len} exceeds maximum {max}")]
    OversizedLength { len: u64, max: u64 },

    #[error("{0} trailing bytes after object")]
    TrailingBytes(usize),
}

/// Outcome of scanning coinbase outputs for the commitment.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitmentError {
    #[error("No commitment output in coinbase")]
    NotFound,

    #[error("Multiple commitment outputs (at {first} and {second})")]
    Ambiguous { first: usize, second: usize },
}

/// Verifier progress, used to report where a block was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyStage {
    Start,
    CommitmentLocated,
    RootReconstructed,
    ProofRecomputed,
}

/// Why a block failed the proof rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    #[error("Block has no coinbase transaction")]
    MissingCoinbase,

    #[error(transparent)]
    Commitment(#[from] CommitmentError),

    #[error("Proof mismatch: expected {expected}, found {found}")]
    Mismatch { expected: Hash256, found: Hash256 },
}

impl VerifyError {
    /// The last stage the verifier completed before rejecting.
    pub fn stage(&self) -> VerifyStage {
        match self {
            VerifyError::MissingCoinbase | VerifyError::Commitment(_) => VerifyStage::Start,
            VerifyError::Mismatch { .. } => VerifyStage::ProofRecomputed,
        }
    }

    /// True when the block broke a caller precondition rather than the rule itself.
    pub fn is_precondition(&self) -> bool {
        matches!(self, VerifyError::MissingCoinbase)
    }
}

/// Failures while embedding a commitment into a block template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MinerError {
    #[error("Block has no coinbase transaction")]
    MissingCoinbase,

    #[error("Coinbase already carries a commitment at output {0}")]
    AlreadyCommitted(usize),
}

pub type Result<T> = std::result::Result<T, DecodeError>;

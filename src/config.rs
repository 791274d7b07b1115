// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Protocol constants and consensus parameters.

use serde::{Deserialize, Serialize};

/// Multiplier of the challenge stream recurrence.
pub const LCG_MULTIPLIER: u64 = 1_664_525;

/// Increment of the challenge stream recurrence.
pub const LCG_INCREMENT: u64 = 1_013_904_223;

/// Draws filling a virtual record's 32-byte prevout hash, four bytes each.
pub const PREVOUT_HASH_DRAWS: usize = 8;

/// Integers pushed into a virtual record's script sig, one draw each.
pub const SCRIPT_SIG_DRAWS: usize = 2;

/// Bytes of the OP_RETURN payload carried by every virtual record, one draw each.
pub const VIRTUAL_PAYLOAD_LEN: usize = 32;

/// Stream draws consumed by one virtual record (the extra one is the prevout index).
pub const DRAWS_PER_RECORD: usize = PREVOUT_HASH_DRAWS + 1 + SCRIPT_SIG_DRAWS + VIRTUAL_PAYLOAD_LEN;

/// Exact length of a commitment output script.
pub const COMMITMENT_SCRIPT_LEN: usize = 38;

/// Push length byte following OP_RETURN in a commitment script (magic + proof).
pub const COMMITMENT_PUSH_LEN: u8 = 0x24;

/// Length of the commitment magic tag.
pub const MAGIC_LEN: usize = 4;

/// Default commitment magic tag.
pub const DEFAULT_MAGIC: [u8; MAGIC_LEN] = *b"TCCP";

/// Default challenge byte budget.
pub const DEFAULT_CHALLENGE_MAX_BYTES: usize = 100_000;

/// Challenge byte budget used by `ConsensusParams::regtest`.
pub const REGTEST_CHALLENGE_MAX_BYTES: usize = 4_096;

/// Consensus parameters read by the proof rule.
///
/// Both fields must stay fixed for the lifetime of a chain; changing either is a hard fork.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsensusParams {
    /// Maximum accumulated serialized size of a virtual challenge set.
    pub challenge_max_bytes: usize,
    /// Tag identifying the commitment output inside the coinbase.
    #[serde(with = "magic_hex")]
    pub commitment_magic: [u8; MAGIC_LEN],
}

impl Default for ConsensusParams {
    fn default() -> Self {
        Self {
            challenge_max_bytes: DEFAULT_CHALLENGE_MAX_BYTES,
            commitment_magic: DEFAULT_MAGIC,
        }
    }
}

impl ConsensusParams {
    /// Small budget for local chains and tests.
    pub fn regtest() -> Self {
        Self {
            challenge_max_bytes: REGTEST_CHALLENGE_MAX_BYTES,
            ..Self::default()
        }
    }

    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.challenge_max_bytes = max_bytes;
        self
    }
}

mod magic_hex {
    use super::MAGIC_LEN;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(magic: &[u8; MAGIC_LEN], s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&hex::encode(magic))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[u8; MAGIC_LEN], D::Error> {
        let s = String::deserialize(d)?;
        let bytes = hex::decode(s.trim_start_matches("0x")).map_err(de::Error::custom)?;
        bytes.try_into().map_err(|b: Vec<u8>| {
            de::Error::custom(format!("magic must be {} bytes, got {}", MAGIC_LEN, b.len()))
        })
    }
}

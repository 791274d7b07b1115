// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Virtual challenge construction.
//!
//! Every virtual record is a one-in, one-out transaction whose fields come
//! from the deterministic stream in this fixed order (43 draws):
//!
//! ```text
//! draws  0..8   prevout hash, each draw written LE into 4 bytes
//! draw   8      prevout index = draw % 100
//! draws  9..11  script sig   = <push_int(d9)> <push_int(d10)>
//! draws 11..43  payload byte = draw & 0xff, output script OP_RETURN <payload>
//! ```
//!
//! version = 1, lock time = 0, sequence = 0xffffffff, output value = 0.

use crate::config::{PREVOUT_HASH_DRAWS, SCRIPT_SIG_DRAWS, VIRTUAL_PAYLOAD_LEN};
use crate::hash::Hash256;
use crate::primitives::script::Script;
use crate::primitives::transaction::{OutPoint, Transaction, TxIn, TxOut};
use crate::stream::DeterministicStream;

/// A synthetic transaction-shaped value. Only ever hashed, never relayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualRecord {
    pub tx: Transaction,
    pub size: usize,
}

impl VirtualRecord {
    /// Consumes exactly one record's worth of draws from `stream`.
    pub fn generate(stream: &mut DeterministicStream) -> Self {
        let mut prev_hash = [0u8; PREVOUT_HASH_DRAWS * 4];
        stream.fill_words(&mut prev_hash);
        let prevout = OutPoint { hash: Hash256(prev_hash), n: stream.draw() % 100 };

        let mut script_sig = Script::new();
        for _ in 0..SCRIPT_SIG_DRAWS {
            script_sig = script_sig.push_int(stream.draw() as i64);
        }

        let mut payload = [0u8; VIRTUAL_PAYLOAD_LEN];
        for byte in payload.iter_mut() {
            *byte = (stream.draw() & 0xff) as u8;
        }

        let tx = Transaction {
            version: 1,
            inputs: vec![TxIn::new(prevout, script_sig)],
            outputs: vec![TxOut::new(0, Script::op_return(&payload))],
            lock_time: 0,
        };
        let size = tx.total_size();
        Self { tx, size }
    }

    pub fn txid(&self) -> Hash256 {
        self.tx.txid()
    }
}

/// Unbounded sequence of virtual records for one seed.
#[derive(Debug, Clone)]
pub struct VirtualRecords {
    stream: DeterministicStream,
}

impl VirtualRecords {
    pub fn new(seed: &Hash256) -> Self {
        Self { stream: DeterministicStream::new(seed) }
    }
}

impl Iterator for VirtualRecords {
    type Item = VirtualRecord;

    fn next(&mut self) -> Option<VirtualRecord> {
        Some(VirtualRecord::generate(&mut self.stream))
    }
}

/// The ordered records generated for one seed under a byte budget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VirtualChallengeSet {
    pub records: Vec<VirtualRecord>,
    /// Accumulated serialized size of `records`. Never exceeds the budget.
    pub total_bytes: usize,
}

impl VirtualChallengeSet {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record txids in generation order.
    pub fn txids(&self) -> Vec<Hash256> {
        self.records.iter().map(VirtualRecord::txid).collect()
    }
}

/// Generates records until the next one would push the total past `max_bytes`.
/// That record is dropped whole and generation stops.
pub fn build_challenge(seed: &Hash256, max_bytes: usize) -> VirtualChallengeSet {
    let mut set = VirtualChallengeSet::default();

    for record in VirtualRecords::new(seed) {
        // total_bytes <= max_bytes holds here, so the subtraction cannot underflow.
        if record.size > max_bytes - set.total_bytes {
            break;
        }
        set.total_bytes += record.size;
        set.records.push(record);
    }

    tracing::trace!(
        records = set.records.len(),
        total_bytes = set.total_bytes,
        max_bytes,
        "built virtual challenge"
    );
    set
}

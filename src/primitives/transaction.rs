// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Transactions in legacy (non-witness) wire format.
//!
//! Format:
//! ```text
//! [i32 LE]  version
//! [cs]      input count
//!   [32]      prevout hash
//!   [u32 LE]  prevout index
//!   [cs+..]   script sig
//!   [u32 LE]  sequence
//! [cs]      output count
//!   [i64 LE]  value
//!   [cs+..]   script pubkey
//! [u32 LE]  lock time
//! ```

use crate::error::{DecodeError, Result};
use crate::hash::{sha256d, Hash256};
use crate::primitives::encode::{
    compact_size_len, read_hash, read_length, read_var_bytes, write_compact_size, write_var_bytes,
};
use crate::primitives::script::Script;
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Cursor, Read};

pub const SEQUENCE_FINAL: u32 = 0xffff_ffff;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct OutPoint {
    pub hash: Hash256,
    pub n: u32,
}

impl OutPoint {
    pub const SIZE: usize = 36;

    /// The null prevout a coinbase input spends.
    pub fn null() -> Self {
        OutPoint { hash: Hash256::ZERO, n: u32::MAX }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TxIn {
    pub prevout: OutPoint,
    pub script_sig: Script,
    pub sequence: u32,
}

impl TxIn {
    pub fn new(prevout: OutPoint, script_sig: Script) -> Self {
        Self { prevout, script_sig, sequence: SEQUENCE_FINAL }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TxOut {
    pub value: i64,
    pub script_pubkey: Script,
}

impl TxOut {
    pub fn new(value: i64, script_pubkey: Script) -> Self {
        Self { value, script_pubkey }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TxIn>,
    pub outputs: Vec<TxOut>,
    pub lock_time: u32,
}

impl Transaction {
    /// A coinbase spending the null prevout, with `tag` as its script sig.
    pub fn coinbase(tag: &[u8], outputs: Vec<TxOut>) -> Self {
        Self {
            version: 1,
            inputs: vec![TxIn::new(OutPoint::null(), Script::new().push_slice(tag))],
            outputs,
            lock_time: 0,
        }
    }

    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].prevout == OutPoint::null()
    }

    pub fn encode_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.version.to_le_bytes());

        write_compact_size(out, self.inputs.len() as u64);
        for input in &self.inputs {
            out.extend_from_slice(input.prevout.hash.as_bytes());
            out.extend_from_slice(&input.prevout.n.to_le_bytes());
            write_var_bytes(out, input.script_sig.as_bytes());
            out.extend_from_slice(&input.sequence.to_le_bytes());
        }

        write_compact_size(out, self.outputs.len() as u64);
        for output in &self.outputs {
            out.extend_from_slice(&output.value.to_le_bytes());
            write_var_bytes(out, output.script_pubkey.as_bytes());
        }

        out.extend_from_slice(&self.lock_time.to_le_bytes());
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.total_size());
        self.encode_into(&mut out);
        out
    }

    /// Serialized size in bytes, computed without encoding.
    pub fn total_size(&self) -> usize {
        let mut size = 4 + compact_size_len(self.inputs.len() as u64);
        for input in &self.inputs {
            let script_len = input.script_sig.len();
            size += OutPoint::SIZE + compact_size_len(script_len as u64) + script_len + 4;
        }
        size += compact_size_len(self.outputs.len() as u64);
        for output in &self.outputs {
            let script_len = output.script_pubkey.len();
            size += 8 + compact_size_len(script_len as u64) + script_len;
        }
        size + 4
    }

    /// Transaction identity: double SHA-256 of the serialization.
    pub fn txid(&self) -> Hash256 {
        sha256d(&self.to_bytes())
    }

    pub fn decode_from<R: Read>(r: &mut R) -> Result<Self> {
        let version = r.read_i32::<LittleEndian>()?;

        let input_count = read_length(r)?;
        let mut inputs = Vec::with_capacity(input_count.min(1024));
        for _ in 0..input_count {
            let hash = Hash256(read_hash(r)?);
            let n = r.read_u32::<LittleEndian>()?;
            let script_sig = Script(read_var_bytes(r)?);
            let sequence = r.read_u32::<LittleEndian>()?;
            inputs.push(TxIn { prevout: OutPoint { hash, n }, script_sig, sequence });
        }

        let output_count = read_length(r)?;
        let mut outputs = Vec::with_capacity(output_count.min(1024));
        for _ in 0..output_count {
            let value = r.read_i64::<LittleEndian>()?;
            let script_pubkey = Script(read_var_bytes(r)?);
            outputs.push(TxOut { value, script_pubkey });
        }

        let lock_time = r.read_u32::<LittleEndian>()?;

        Ok(Self { version, inputs, outputs, lock_time })
    }

    /// Decodes exactly one transaction; trailing bytes are an error.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::new(data);
        let tx = Self::decode_from(&mut cursor)?;
        let consumed = cursor.position() as usize;
        if consumed != data.len() {
            return Err(DecodeError::TrailingBytes(data.len() - consumed));
        }
        Ok(tx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transaction {
        Transaction {
            version: 2,
            inputs: vec![TxIn::new(
                OutPoint { hash: Hash256([0xab; 32]), n: 3 },
                Script::new().push_int(1000),
            )],
            outputs: vec![
                TxOut::new(5_000, Script::new().push_opcode(0x51)),
                TxOut::new(0, Script::op_return(b"hello")),
            ],
            lock_time: 17,
        }
    }

    #[test]
    fn test_size_matches_encoding() {
        let tx = sample();
        assert_eq!(tx.total_size(), tx.to_bytes().len());

        let cb = Transaction::coinbase(b"height", vec![]);
        assert_eq!(cb.total_size(), cb.to_bytes().len());
        assert!(cb.is_coinbase());
        assert!(!tx.is_coinbase());
    }

    #[test]
    fn test_decode_restores_transaction() {
        let tx = sample();
        let decoded = Transaction::from_bytes(&tx.to_bytes()).unwrap();
        assert_eq!(decoded, tx);
        assert_eq!(decoded.txid(), tx.txid());
    }

    #[test]
    fn test_decode_rejects_trailing_and_truncated() {
        let mut bytes = sample().to_bytes();
        bytes.push(0);
        assert!(matches!(Transaction::from_bytes(&bytes), Err(DecodeError::TrailingBytes(1))));

        let bytes = sample().to_bytes();
        assert!(matches!(
            Transaction::from_bytes(&bytes[..bytes.len() - 1]),
            Err(DecodeError::Io(_))
        ));
    }

    #[test]
    fn test_txid_changes_with_any_field() {
        let base = sample().txid();
        let mut tx = sample();
        tx.lock_time += 1;
        assert_ne!(tx.txid(), base);

        let mut tx = sample();
        tx.outputs[0].value += 1;
        assert_ne!(tx.txid(), base);
    }
}

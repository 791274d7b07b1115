// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Blocks, headers and the previous-block handle the verifier receives.

use crate::error::{DecodeError, Result};
use crate::hash::{sha256d, Hash256};
use crate::merkle::merkle_root;
use crate::primitives::encode::{read_hash, read_length, write_compact_size};
use crate::primitives::transaction::Transaction;
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Cursor, Read};

/// 80-byte block header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BlockHeader {
    pub version: i32,
    pub prev_block: Hash256,
    pub merkle_root: Hash256,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

impl BlockHeader {
    pub const SIZE: usize = 80;

    pub fn encode_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.version.to_le_bytes());
        out.extend_from_slice(self.prev_block.as_bytes());
        out.extend_from_slice(self.merkle_root.as_bytes());
        out.extend_from_slice(&self.time.to_le_bytes());
        out.extend_from_slice(&self.bits.to_le_bytes());
        out.extend_from_slice(&self.nonce.to_le_bytes());
    }

    pub fn decode_from<R: Read>(r: &mut R) -> Result<Self> {
        Ok(Self {
            version: r.read_i32::<LittleEndian>()?,
            prev_block: Hash256(read_hash(r)?),
            merkle_root: Hash256(read_hash(r)?),
            time: r.read_u32::<LittleEndian>()?,
            bits: r.read_u32::<LittleEndian>()?,
            nonce: r.read_u32::<LittleEndian>()?,
        })
    }

    pub fn hash(&self) -> Hash256 {
        let mut buf = Vec::with_capacity(Self::SIZE);
        self.encode_into(&mut buf);
        sha256d(&buf)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Block {
    pub header: BlockHeader,
    /// Transactions; index 0 is the coinbase.
    pub txs: Vec<Transaction>,
}

impl Block {
    pub fn coinbase(&self) -> Option<&Transaction> {
        self.txs.first()
    }

    pub fn hash(&self) -> Hash256 {
        self.header.hash()
    }

    /// Merkle root over the block's current transaction list.
    pub fn merkle_root(&self) -> Hash256 {
        block_merkle_root(&self.txs)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(BlockHeader::SIZE + 9);
        self.header.encode_into(&mut out);
        write_compact_size(&mut out, self.txs.len() as u64);
        for tx in &self.txs {
            tx.encode_into(&mut out);
        }
        out
    }

    /// Decodes exactly one block; trailing bytes are an error.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::new(data);
        let header = BlockHeader::decode_from(&mut cursor)?;
        let tx_count = read_length(&mut cursor)?;
        let mut txs = Vec::with_capacity(tx_count.min(4096));
        for _ in 0..tx_count {
            txs.push(Transaction::decode_from(&mut cursor)?);
        }

        let consumed = cursor.position() as usize;
        if consumed != data.len() {
            return Err(DecodeError::TrailingBytes(data.len() - consumed));
        }
        Ok(Self { header, txs })
    }
}

/// Merkle root over the txids of `txs`, in order.
pub fn block_merkle_root(txs: &[Transaction]) -> Hash256 {
    let leaves: Vec<Hash256> = txs.iter().map(Transaction::txid).collect();
    merkle_root(&leaves)
}

/// What the verifier needs to know about the block being built on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockIndex {
    pub hash: Hash256,
    pub height: u32,
}

impl BlockIndex {
    pub fn new(hash: Hash256, height: u32) -> Self {
        Self { hash, height }
    }

    /// Index entry for `block` sitting at `height`.
    pub fn for_block(block: &Block, height: u32) -> Self {
        Self { hash: block.hash(), height }
    }
}

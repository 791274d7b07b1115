// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Wire encoding helpers shared by transactions and blocks.

use crate::error::{DecodeError, Result};
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Read;

/// Upper bound for any length prefix read off the wire.
pub const MAX_SIZE: u64 = 0x0200_0000;

/// Number of bytes `write_compact_size` emits for `n`.
pub fn compact_size_len(n: u64) -> usize {
    match n {
        0..=0xfc => 1,
        0xfd..=0xffff => 3,
        0x1_0000..=0xffff_ffff => 5,
        _ => 9,
    }
}

pub fn write_compact_size(out: &mut Vec<u8>, n: u64) {
    match n {
        0..=0xfc => out.push(n as u8),
        0xfd..=0xffff => {
            out.push(0xfd);
            out.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            out.push(0xfe);
            out.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            out.push(0xff);
            out.extend_from_slice(&n.to_le_bytes());
        }
    }
}

/// Reads a CompactSize, rejecting encodings longer than necessary.
pub fn read_compact_size<R: Read>(r: &mut R) -> Result<u64> {
    let tag = r.read_u8()?;
    let n = match tag {
        0xfd => {
            let n = r.read_u16::<LittleEndian>()? as u64;
            if n < 0xfd {
                return Err(DecodeError::NonCanonicalCompactSize);
            }
            n
        }
        0xfe => {
            let n = r.read_u32::<LittleEndian>()? as u64;
            if n < 0x1_0000 {
                return Err(DecodeError::NonCanonicalCompactSize);
            }
            n
        }
        0xff => {
            let n = r.read_u64::<LittleEndian>()?;
            if n < 0x1_0000_0000 {
                return Err(DecodeError::NonCanonicalCompactSize);
            }
            n
        }
        small => small as u64,
    };
    Ok(n)
}

/// Reads a CompactSize used as a length or count, bounded by `MAX_SIZE`.
pub fn read_length<R: Read>(r: &mut R) -> Result<usize> {
    let len = read_compact_size(r)?;
    if len > MAX_SIZE {
        return Err(DecodeError::OversizedLength { len, max: MAX_SIZE });
    }
    Ok(len as usize)
}

pub fn write_var_bytes(out: &mut Vec<u8>, bytes: &[u8]) {
    write_compact_size(out, bytes.len() as u64);
    out.extend_from_slice(bytes);
}

pub fn read_var_bytes<R: Read>(r: &mut R) -> Result<Vec<u8>> {
    let len = read_length(r)?;
    let mut buf = vec![0u8; len];
    r.read_exact(&mut buf)?;
    Ok(buf)
}

pub fn read_hash<R: Read>(r: &mut R) -> Result<[u8; 32]> {
    let mut buf = [0u8; 32];
    r.read_exact(&mut buf)?;
    Ok(buf)
}

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Script bytes and the push builders the challenge and commitment need.

pub const OP_0: u8 = 0x00;
pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;
pub const OP_1NEGATE: u8 = 0x4f;
pub const OP_1: u8 = 0x51;
pub const OP_16: u8 = 0x60;
pub const OP_RETURN: u8 = 0x6a;

/// Raw script bytes. No parsing or execution happens here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Script(pub Vec<u8>);

impl Script {
    pub fn new() -> Self {
        Script(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn push_opcode(mut self, op: u8) -> Self {
        self.0.push(op);
        self
    }

    /// Pushes `data` with the smallest push opcode that fits its length.
    pub fn push_slice(mut self, data: &[u8]) -> Self {
        let len = data.len();
        if len < OP_PUSHDATA1 as usize {
            self.0.push(len as u8);
        } else if len <= 0xff {
            self.0.push(OP_PUSHDATA1);
            self.0.push(len as u8);
        } else if len <= 0xffff {
            self.0.push(OP_PUSHDATA2);
            self.0.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.0.push(OP_PUSHDATA4);
            self.0.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.0.extend_from_slice(data);
        self
    }

    /// Pushes an integer: small values become `OP_0`, `OP_1NEGATE` or
    /// `OP_1..OP_16`; everything else is pushed as minimal script-number bytes.
    pub fn push_int(self, n: i64) -> Self {
        match n {
            0 => self.push_opcode(OP_0),
            -1 => self.push_opcode(OP_1NEGATE),
            1..=16 => self.push_opcode(OP_1 + (n as u8) - 1),
            _ => {
                let bytes = script_num_bytes(n);
                self.push_slice(&bytes)
            }
        }
    }

    /// `OP_RETURN <data>`, the unspendable data-carrier form.
    pub fn op_return(data: &[u8]) -> Self {
        Script::new().push_opcode(OP_RETURN).push_slice(data)
    }
}

impl From<Vec<u8>> for Script {
    fn from(bytes: Vec<u8>) -> Self {
        Script(bytes)
    }
}

/// Minimal little-endian sign-magnitude encoding of a script number.
pub fn script_num_bytes(n: i64) -> Vec<u8> {
    if n == 0 {
        return Vec::new();
    }
    let negative = n < 0;
    let mut abs = n.unsigned_abs();
    let mut out = Vec::with_capacity(9);
    while abs > 0 {
        out.push((abs & 0xff) as u8);
        abs >>= 8;
    }
    // The top bit of the last byte is the sign; add a byte if the magnitude uses it.
    let last = out.len() - 1;
    if out[last] & 0x80 != 0 {
        out.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        out[last] |= 0x80;
    }
    out
}

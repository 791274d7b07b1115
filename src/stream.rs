// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Seeded deterministic stream feeding the challenge builder.
//!
//! Not a cryptographic generator. The only property that matters is that
//! every node draws the same values from the same seed.

use crate::config::{LCG_INCREMENT, LCG_MULTIPLIER};
use crate::hash::Hash256;
use byteorder::{ByteOrder, LittleEndian};

/// Linear congruential stream over a single `u64` of state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeterministicStream {
    state: u64,
}

impl DeterministicStream {
    /// State is the first 8 seed bytes read little-endian. The other 24 bytes are ignored.
    pub fn new(seed: &Hash256) -> Self {
        Self { state: LittleEndian::read_u64(&seed.0[..8]) }
    }

    pub fn state(&self) -> u64 {
        self.state
    }

    /// Advances `state = A * state + C (mod 2^64)` and returns the upper 32 bits.
    pub fn draw(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        (self.state >> 32) as u32
    }

    /// Fills `out` with consecutive draws, each written little-endian.
    pub fn fill_words(&mut self, out: &mut [u8]) {
        for chunk in out.chunks_exact_mut(4) {
            LittleEndian::write_u32(chunk, self.draw());
        }
    }
}

impl Iterator for DeterministicStream {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        Some(self.draw())
    }
}

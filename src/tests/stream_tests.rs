// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::config::{LCG_INCREMENT, LCG_MULTIPLIER};
use crate::hash::Hash256;
use crate::stream::DeterministicStream;

#[test]
fn test_zero_seed_sequence() {
    let mut stream = DeterministicStream::new(&Hash256::ZERO);
    // First step from state 0 is just the increment, whose upper half is 0.
    assert_eq!(stream.draw(), 0);
    assert_eq!(stream.state(), LCG_INCREMENT);
}

#[test]
fn test_seed_narrowing_is_little_endian() {
    let mut bytes = [0u8; 32];
    for (i, b) in bytes.iter_mut().enumerate() {
        *b = i as u8 + 1;
    }
    let stream = DeterministicStream::new(&Hash256(bytes));
    assert_eq!(stream.state(), 0x0807_0605_0403_0201);
}

#[test]
fn test_only_first_eight_seed_bytes_matter() {
    let mut a = [0u8; 32];
    let mut b = [0xffu8; 32];
    a[..8].copy_from_slice(&[9, 8, 7, 6, 5, 4, 3, 2]);
    b[..8].copy_from_slice(&[9, 8, 7, 6, 5, 4, 3, 2]);

    let draws_a: Vec<u32> = DeterministicStream::new(&Hash256(a)).take(16).collect();
    let draws_b: Vec<u32> = DeterministicStream::new(&Hash256(b)).take(16).collect();
    assert_eq!(draws_a, draws_b);
}

#[test]
fn test_recurrence_wraps() {
    let mut bytes = [0u8; 32];
    bytes[..8].copy_from_slice(&u64::MAX.to_le_bytes());
    let mut stream = DeterministicStream::new(&Hash256(bytes));

    let expected = u64::MAX.wrapping_mul(LCG_MULTIPLIER).wrapping_add(LCG_INCREMENT);
    assert_eq!(stream.draw(), (expected >> 32) as u32);
    assert_eq!(stream.state(), expected);
}

#[test]
fn test_fill_words_matches_draws() {
    let seed = Hash256([0x42; 32]);
    let mut words = [0u8; 12];
    DeterministicStream::new(&seed).fill_words(&mut words);

    let mut stream = DeterministicStream::new(&seed);
    for chunk in words.chunks_exact(4) {
        assert_eq!(u32::from_le_bytes(chunk.try_into().unwrap()), stream.draw());
    }
}

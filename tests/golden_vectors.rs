// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Cross-implementation vectors. Any change here is a consensus change.

use tccp::challenge::build_challenge;
use tccp::hash::sha256d;
use tccp::seed::compute_seed;
use tccp::stream::DeterministicStream;
use tccp::{aggregate, compute_proof, ConsensusParams, Hash256, ProofReceipt};

fn low_hash(last: u8) -> Hash256 {
    let mut bytes = [0u8; 32];
    bytes[31] = last;
    Hash256(bytes)
}

fn hex_hash(s: &str) -> Hash256 {
    Hash256::from_hex(s).unwrap()
}

#[test]
fn sha256d_of_empty_input() {
    assert_eq!(
        sha256d(b""),
        hex_hash("5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456")
    );
}

#[test]
fn seed_and_first_draws() {
    let seed = compute_seed(&low_hash(1), &low_hash(2));
    assert_eq!(
        seed,
        hex_hash("9b1eb2a9e9a81cbbad8edffa901e93fd94f4405e63b61647cf9d3e602b1fb7b0")
    );

    let draws: Vec<u32> = DeterministicStream::new(&seed).take(4).collect();
    assert_eq!(draws, vec![1788035039, 1372108391, 4026865651, 2391662712]);
}

#[test]
fn stream_reads_seed_little_endian() {
    let mut bytes = [0u8; 32];
    for (i, b) in bytes.iter_mut().enumerate() {
        *b = i as u8 + 1;
    }
    let stream = DeterministicStream::new(&Hash256(bytes));
    assert_eq!(stream.state(), 0x0807_0605_0403_0201);

    let draws: Vec<u32> = stream.take(2).collect();
    assert_eq!(draws, vec![3409883685, 3000760329]);

    let zero: Vec<u32> = DeterministicStream::new(&Hash256::ZERO).take(3).collect();
    assert_eq!(zero, vec![0, 392941, 1225552714]);
}

#[test]
fn first_records_are_105_bytes() {
    let seed = compute_seed(&low_hash(1), &low_hash(2));
    let set = build_challenge(&seed, 525);
    assert_eq!(set.len(), 5);
    assert!(set.records.iter().all(|r| r.size == 105));
}

#[test]
fn three_record_proof() {
    let params = ConsensusParams::default().with_max_bytes(315);
    let seed = compute_seed(&low_hash(1), &low_hash(2));
    let set = build_challenge(&seed, params.challenge_max_bytes);

    assert_eq!(
        set.txids(),
        vec![
            hex_hash("95c26dac77bb1b976ec2e4ccf2ca620d9c07bbe3b36f3c9d0f8a98aac56c95c4"),
            hex_hash("7e67ced6524b2a31144140be46ccf31b06c1428e4c9d0fa33054676f4494dcda"),
            hex_hash("f3482cfc4668b03fb4f1499dd231a7b685982709a8d7e19676b3a6cd63775fd0"),
        ]
    );
    let expected = hex_hash("98ae960d1c484b7a2d671b29c9b44c380912d9969b2d635aa5a127147645aa5a");
    assert_eq!(aggregate(&set), expected);
    assert_eq!(compute_proof(&low_hash(1), &low_hash(2), &params), expected);

    // One byte short drops the third record whole.
    let two = build_challenge(&seed, 314);
    assert_eq!(two.len(), 2);
    assert_eq!(
        aggregate(&two),
        hex_hash("fd0568c5c2ea93b6092f515f556f1f7292b283d36e83d3ebeb7be5220e6eda15")
    );
}

#[test]
fn regtest_budget_receipt() {
    let receipt = ProofReceipt::compute(&low_hash(1), &low_hash(2), &ConsensusParams::regtest());
    assert_eq!(receipt.max_bytes, 4_096);
    assert_eq!(receipt.record_count, 38);
    assert_eq!(receipt.challenge_bytes, 3_992);
    assert_eq!(
        receipt.proof,
        hex_hash("fbc8d92345da3025c83e926d4dd111904a493a5e2b41a31ae2f7238093d4c759")
    );
}

#[test]
fn default_budget_receipt() {
    let receipt = ProofReceipt::compute(&low_hash(1), &low_hash(2), &ConsensusParams::default());
    assert_eq!(receipt.max_bytes, 100_000);
    assert_eq!(receipt.record_count, 952);
    assert_eq!(receipt.challenge_bytes, 99_965);
    assert_eq!(
        receipt.proof,
        hex_hash("d392ece4e38c677c1d4b79a5191b7ef52a414406026543f417165455b85a7f7d")
    );
}

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::challenge::{build_challenge, VirtualRecord, VirtualRecords};
use crate::config::DRAWS_PER_RECORD;
use crate::hash::Hash256;
use crate::primitives::script::OP_RETURN;
use crate::proof::aggregate;
use crate::seed::compute_seed;
use crate::stream::DeterministicStream;
use crate::tests::fixtures::low_hash;

fn golden_seed() -> Hash256 {
    compute_seed(&low_hash(1), &low_hash(2))
}

#[test]
fn test_record_consumes_fixed_draw_count() {
    let seed = golden_seed();
    let mut by_record = DeterministicStream::new(&seed);
    VirtualRecord::generate(&mut by_record);

    let mut by_draw = DeterministicStream::new(&seed);
    for _ in 0..DRAWS_PER_RECORD {
        by_draw.draw();
    }
    assert_eq!(by_record, by_draw);
}

#[test]
fn test_next_record_starts_after_fixed_draw_count() {
    assert_eq!(DRAWS_PER_RECORD, 43);

    let seed = golden_seed();
    let mut stream = DeterministicStream::new(&seed);
    for _ in 0..DRAWS_PER_RECORD {
        stream.draw();
    }
    let second = VirtualRecord::generate(&mut stream);
    assert_eq!(VirtualRecords::new(&seed).nth(1), Some(second));
}

#[test]
fn test_first_golden_record_bytes() {
    let record = VirtualRecords::new(&golden_seed()).next().unwrap();
    assert_eq!(
        hex::encode(record.tx.to_bytes()),
        "0100000001df3f936a67b6c851f31705f078e08d8ef3ff66b07be1f9fdc383947a5e621644\
         0d0000000b05a02b9ec50004b29f1651ffffffff010000000000000000226a20b927a95a\
         f1d1d2f9b757a3a1f543c586a27a1ffbbf8f753068d942983542aaf100000000"
    );
    assert_eq!(record.size, 105);
}

#[test]
fn test_record_shape() {
    for record in VirtualRecords::new(&Hash256([7; 32])).take(25) {
        let tx = &record.tx;
        assert_eq!(tx.version, 1);
        assert_eq!(tx.lock_time, 0);
        assert_eq!(tx.inputs.len(), 1);
        assert!(tx.inputs[0].prevout.n < 100);
        assert_eq!(tx.inputs[0].sequence, u32::MAX);
        assert_eq!(tx.outputs.len(), 1);
        assert_eq!(tx.outputs[0].value, 0);

        let spk = tx.outputs[0].script_pubkey.as_bytes();
        assert_eq!(spk.len(), 34);
        assert_eq!(&spk[..2], &[OP_RETURN, 32]);

        assert_eq!(record.size, tx.to_bytes().len());
    }
}

#[test]
fn test_budget_is_never_exceeded() {
    let seed = golden_seed();
    for max_bytes in [0usize, 1, 104, 105, 209, 210, 211, 1_000, 4_096] {
        let set = build_challenge(&seed, max_bytes);
        let sum: usize = set.records.iter().map(|r| r.size).sum();
        assert_eq!(sum, set.total_bytes);
        assert!(set.total_bytes <= max_bytes, "budget {max_bytes} exceeded");

        // The next record would not have fit.
        let next = VirtualRecords::new(&seed).nth(set.len()).unwrap();
        assert!(set.total_bytes + next.size > max_bytes);
    }
}

#[test]
fn test_budget_below_first_record_is_empty() {
    let seed = golden_seed();
    let set = build_challenge(&seed, 104);
    assert!(set.is_empty());
    assert_eq!(set.total_bytes, 0);
    assert_eq!(aggregate(&set), Hash256::ZERO);

    // Exactly the first record's size admits it.
    assert_eq!(build_challenge(&seed, 105).len(), 1);
}

#[test]
fn test_larger_budget_extends_prefix() {
    let seed = Hash256([0x3c; 32]);
    let small = build_challenge(&seed, 2_000);
    let large = build_challenge(&seed, 3_000);

    assert!(large.len() >= small.len());
    assert!(large.total_bytes >= small.total_bytes);
    assert_eq!(&large.records[..small.len()], &small.records[..]);
}

#[test]
fn test_different_seeds_differ() {
    let a = build_challenge(&Hash256([1; 32]), 1_000);
    let b = build_challenge(&Hash256([2; 32]), 1_000);
    assert_ne!(aggregate(&a), aggregate(&b));
}

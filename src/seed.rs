// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Challenge seed derivation.

use crate::hash::{sha256d_pair, Hash256};

/// Seed for the block's challenge: `sha256d(prev_hash || real_root)`.
pub fn compute_seed(prev_hash: &Hash256, real_root: &Hash256) -> Hash256 {
    sha256d_pair(prev_hash, real_root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_ordered() {
        let a = Hash256([1; 32]);
        let b = Hash256([2; 32]);
        assert_eq!(compute_seed(&a, &b), compute_seed(&a, &b));
        assert_ne!(compute_seed(&a, &b), compute_seed(&b, &a));
    }
}

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Chain value types consumed by the proof rule.

pub mod block;
pub mod encode;
pub mod script;
pub mod transaction;

pub use block::{block_merkle_root, Block, BlockHeader, BlockIndex};
pub use script::Script;
pub use transaction::{OutPoint, Transaction, TxIn, TxOut};

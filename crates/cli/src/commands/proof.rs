// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use tccp::{ConsensusParams, Hash256, ProofReceipt};

pub fn receipt(prev: &Hash256, root: &Hash256, params: &ConsensusParams) -> ProofReceipt {
    ProofReceipt::compute(prev, root, params)
}

/// Prints the full receipt as JSON.
pub fn run(prev: &Hash256, root: &Hash256, params: &ConsensusParams) -> anyhow::Result<()> {
    let receipt = receipt(prev, root, params);
    tracing::info!(proof = %receipt.proof, records = receipt.record_count, "computed proof");
    println!("{}", serde_json::to_string_pretty(&receipt)?);
    Ok(())
}

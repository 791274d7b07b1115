// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;
use tccp::challenge::{build_challenge, VirtualChallengeSet};
use tccp::seed::compute_seed;
use tccp::{aggregate, ConsensusParams, Hash256};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChallengeRow {
    pub index: usize,
    pub txid: Hash256,
    pub size: usize,
    pub running_total: usize,
}

/// The challenge set behind the proof for `(prev, root)`.
pub fn build(prev: &Hash256, root: &Hash256, params: &ConsensusParams) -> VirtualChallengeSet {
    build_challenge(&compute_seed(prev, root), params.challenge_max_bytes)
}

pub fn rows(set: &VirtualChallengeSet) -> Vec<ChallengeRow> {
    let mut total = 0;
    set.records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            total += record.size;
            ChallengeRow { index, txid: record.txid(), size: record.size, running_total: total }
        })
        .collect()
}

pub fn run(
    prev: &Hash256,
    root: &Hash256,
    params: &ConsensusParams,
    limit: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    let set = build(prev, root, params);
    let all = rows(&set);
    let shown = &all[..limit.map_or(all.len(), |n| n.min(all.len()))];

    if json {
        println!("{}", serde_json::to_string_pretty(shown)?);
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "TxID", "Size", "Total"]);

    for row in shown {
        table.add_row(vec![
            row.index.to_string(),
            row.txid.to_hex(),
            row.size.to_string(),
            row.running_total.to_string(),
        ]);
    }

    println!("\nVirtual Challenge\n");
    println!("{table}\n");
    println!("Records: {} (showing {})", set.len(), shown.len());
    println!("Bytes:   {} / {}", set.total_bytes, params.challenge_max_bytes);
    println!("Proof:   {}\n", aggregate(&set));
    Ok(())
}

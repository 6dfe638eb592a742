//! CIDR summarization.
//!
//! Collapses a set of addresses and ranges into the fewest CIDR blocks that
//! cover exactly the same addresses, per address family.

use crate::models::{CidrBlock, CidrSummary, EgressEntry};
use colored::Colorize;
use itertools::{Either, Itertools};

/// Summarize the ready entries of a filtered set.
///
/// Entries whose `ip_address` is neither an address nor a CIDR are skipped
/// with a warning.
pub fn summarize_entries(entries: &[EgressEntry]) -> CidrSummary {
    let blocks = entries
        .iter()
        .filter(|e| e.ready)
        .filter_map(|e| match CidrBlock::new(&e.ip_address) {
            Ok(block) => Some(block),
            Err(err) => {
                log::warn!(
                    "Skipping invalid IP '{}': {err}",
                    e.ip_address.as_str().yellow()
                );
                None
            }
        });
    summarize(blocks)
}

/// Split blocks by address family and collapse each family independently.
pub fn summarize(blocks: impl IntoIterator<Item = CidrBlock>) -> CidrSummary {
    let (ipv4, ipv6): (Vec<CidrBlock>, Vec<CidrBlock>) =
        blocks.into_iter().partition_map(|b| {
            if b.is_ipv4() {
                Either::Left(b)
            } else {
                Either::Right(b)
            }
        });

    let (v4_in, v6_in) = (ipv4.len(), ipv6.len());
    let summary = CidrSummary {
        ipv4: collapse(ipv4),
        ipv6: collapse(ipv6),
    };
    log::info!(
        "Summarized IPv4 {v4_in} -> {} blocks, IPv6 {v6_in} -> {} blocks",
        summary.ipv4.len(),
        summary.ipv6.len()
    );
    summary
}

/// Collapse blocks of a single address family into minimal CIDR form.
///
/// Input order does not matter and duplicates are allowed. The result is
/// sorted ascending and no two neighbours can be merged further.
pub fn collapse(mut blocks: Vec<CidrBlock>) -> Vec<CidrBlock> {
    blocks.sort();
    blocks.dedup();

    let mut merged: Vec<CidrBlock> = Vec::with_capacity(blocks.len());
    for block in blocks {
        // Sorted by address then prefix, so a covering block is always the last one kept.
        if merged.last().is_some_and(|last| last.contains(&block)) {
            continue;
        }
        merged.push(block);

        // A merge can make the new parent mergeable with its left neighbour.
        while merged.len() >= 2 {
            let upper = merged[merged.len() - 1];
            let lower = merged[merged.len() - 2];
            match lower.merge(&upper) {
                Some(parent) => {
                    merged.truncate(merged.len() - 2);
                    merged.push(parent);
                }
                None => break,
            }
        }
    }
    merged
}

/// True if `blocks` is strictly ascending, non-overlapping, and no adjacent
/// pair can be merged.
pub fn is_fixed_point(blocks: &[CidrBlock]) -> bool {
    blocks.iter().tuple_windows().all(|(a, b)| {
        a.is_ipv4() == b.is_ipv4() && a.hi_bits() < b.lo_bits() && a.merge(b).is_none()
    })
}

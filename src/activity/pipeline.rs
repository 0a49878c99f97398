// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Merge, deduplicate, rank and paginate activity records
//!
//! The pipeline is pure: it turns the raw logs of both streams into one
//! ordered page without touching the chain. Timestamp enrichment happens
//! afterwards, on the truncated page only.
//!
//! ```text
//! dispense logs ─┐
//!                ├─ normalize ─ dedup mints ─ stable sort (block desc) ─ truncate
//! mint logs ─────┘
//! ```

use std::collections::HashSet;

use alloy_primitives::{Address, TxHash};
use tracing::{debug, warn};

use super::fetcher::StreamLogs;
use super::record::{normalize_dispense, normalize_mint, ActivityRecord};
use crate::chain::ActivityStream;
use crate::errors::ActivityError;
use crate::types::tokens::TokenMetadata;

/// Normalize both streams and drop mints already covered by a dispense
///
/// Dispense records come first, in stream order, followed by the surviving
/// mints. Entries that fail normalization are skipped with a warning.
pub fn merge_streams(logs: &StreamLogs, metadata: &TokenMetadata) -> Vec<ActivityRecord> {
    let dispenses: Vec<ActivityRecord> = logs
        .dispense
        .iter()
        .filter_map(|log| {
            keep_or_warn(ActivityStream::Dispense, normalize_dispense(log, metadata))
        })
        .collect();

    let mints: Vec<ActivityRecord> = logs
        .mint
        .iter()
        .filter_map(|log| keep_or_warn(ActivityStream::Mint, normalize_mint(log, metadata)))
        .flatten()
        .collect();

    let merged = dedup_mints(dispenses, mints);
    debug!(
        dispense_logs = logs.dispense.len(),
        mint_logs = logs.mint.len(),
        records = merged.len(),
        "Merged activity streams"
    );
    merged
}

fn keep_or_warn<T>(stream: ActivityStream, result: Result<T, ActivityError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(stream = %stream, error = %e, "Skipping log entry");
            None
        }
    }
}

/// Append mints that no dispense record already accounts for
///
/// A mint is suppressed when a dispense shares its transaction hash and
/// recipient. Dispense records are never suppressed.
pub fn dedup_mints(
    mut dispenses: Vec<ActivityRecord>,
    mints: Vec<ActivityRecord>,
) -> Vec<ActivityRecord> {
    let covered: HashSet<(TxHash, Address)> =
        dispenses.iter().map(ActivityRecord::dedup_key).collect();

    let offered = mints.len();
    let kept_from = dispenses.len();
    dispenses.extend(
        mints
            .into_iter()
            .filter(|mint| !covered.contains(&mint.dedup_key())),
    );

    let suppressed = offered - (dispenses.len() - kept_from);
    if suppressed > 0 {
        debug!(suppressed, "Suppressed mints matching a dispense");
    }
    dispenses
}

/// Order records newest first
///
/// The sort is stable: records in the same block keep their merged order,
/// so dispenses precede mints at equal heights.
pub fn rank(records: &mut [ActivityRecord]) {
    records.sort_by(|a, b| b.block_number.cmp(&a.block_number));
}

/// Truncate to `limit`, returning the pre-truncation count
pub fn paginate(records: &mut Vec<ActivityRecord>, limit: usize) -> usize {
    let total = records.len();
    records.truncate(limit);
    total
}

//! Best-effort block timestamp enrichment

use std::collections::{BTreeSet, HashMap};

use alloy_primitives::BlockNumber;
use futures::future::join_all;
use tracing::{debug, Instrument};

use super::record::ActivityRecord;
use crate::chain::ChainClient;
use crate::tracing::spans;

/// Attach block timestamps to a page of records
///
/// Each distinct block is looked up once, all lookups concurrently. A failed
/// or empty lookup leaves `timestamp` unset on the affected records only.
pub async fn attach_timestamps<C: ChainClient + ?Sized>(
    client: &C,
    records: &mut [ActivityRecord],
) {
    let blocks: BTreeSet<BlockNumber> = records.iter().map(|r| r.block_number).collect();
    if blocks.is_empty() {
        return;
    }

    let span = spans::enrich_timestamps(records.len(), blocks.len());

    let timestamps: HashMap<BlockNumber, u64> = async {
        let lookups = blocks.iter().map(|&block_number| async move {
            match client.block_timestamp(block_number).await {
                Ok(Some(timestamp)) => Some((block_number, timestamp)),
                Ok(None) => {
                    debug!(block_number, "Block not found, leaving timestamp empty");
                    None
                }
                Err(e) => {
                    debug!(
                        block_number,
                        error = %e,
                        "Block lookup failed, leaving timestamp empty"
                    );
                    None
                }
            }
        });
        join_all(lookups)
            .await
            .into_iter()
            .flatten()
            .collect::<HashMap<_, _>>()
    }
    .instrument(span)
    .await;

    for record in records.iter_mut() {
        record.timestamp = timestamps.get(&record.block_number).copied();
    }
}

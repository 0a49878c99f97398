// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Chunked log fetching utility
//!
//! Splits a block range into [`MaxBlockRange`] sized chunks and fetches them
//! sequentially, concatenating results. RPC providers commonly reject
//! `eth_getLogs` calls spanning too many blocks.

use std::future::Future;
use std::time::Duration;

use alloy_primitives::BlockNumber;
use alloy_provider::Provider;
use alloy_rpc_types::{Filter, Log};
use tokio::time::timeout;
use tracing::debug;

use crate::errors::RpcError;
use crate::types::config::MaxBlockRange;

/// Chunking limits for one log fetch
#[derive(Debug, Clone, Copy)]
pub struct ChunkPlan {
    pub max_block_range: MaxBlockRange,
    /// Most chunks the fetch may issue
    pub max_chunks: usize,
    /// Bound on each chunk's `eth_getLogs` call
    pub rpc_timeout: Duration,
}

impl ChunkPlan {
    /// Chunks needed for the inclusive range, or `RangeTooLarge` past the cap
    pub fn check(
        &self,
        start_block: BlockNumber,
        end_block: BlockNumber,
    ) -> Result<usize, RpcError> {
        let chunks = self.max_block_range.chunks_needed(start_block, end_block);
        if chunks > self.max_chunks {
            return Err(RpcError::range_too_large(
                start_block,
                end_block,
                chunks,
                self.max_chunks,
            ));
        }
        Ok(chunks)
    }
}

/// Fetch logs matching `filter` over the inclusive range `[start_block, end_block]`
///
/// Each chunk is bounded by `plan.rpc_timeout`. The first failing chunk fails
/// the whole fetch (no partial results), so a stream is either complete or
/// reported as unavailable. An inverted range yields no logs and issues no
/// calls; so does a range needing more than `plan.max_chunks` chunks, which
/// fails with [`RpcError::RangeTooLarge`].
pub async fn fetch_logs_chunked<P: Provider>(
    provider: &P,
    filter: &Filter,
    start_block: BlockNumber,
    end_block: BlockNumber,
    plan: ChunkPlan,
) -> Result<Vec<Log>, RpcError> {
    fetch_chunks(start_block, end_block, plan, |chunk_start, chunk_end| {
        let chunk_filter = filter.clone().from_block(chunk_start).to_block(chunk_end);
        async move { provider.get_logs(&chunk_filter).await }
    })
    .await
}

async fn fetch_chunks<F, Fut, E>(
    start_block: BlockNumber,
    end_block: BlockNumber,
    plan: ChunkPlan,
    mut fetch: F,
) -> Result<Vec<Log>, RpcError>
where
    F: FnMut(BlockNumber, BlockNumber) -> Fut,
    Fut: Future<Output = Result<Vec<Log>, E>>,
    E: std::error::Error + Send + Sync + 'static,
{
    let num_chunks = plan.check(start_block, end_block)?;

    debug!(
        start_block,
        end_block,
        chunk_size = plan.max_block_range.as_u64(),
        num_chunks,
        "Starting chunked log fetch"
    );

    let mut all_logs = Vec::new();

    for (chunk_start, chunk_end) in plan.max_block_range.chunk_range(start_block, end_block) {
        let operation = format!("logs {chunk_start}-{chunk_end}");

        let logs = timeout(plan.rpc_timeout, fetch(chunk_start, chunk_end))
            .await
            .map_err(|_| RpcError::timeout(operation.clone(), plan.rpc_timeout))?
            .map_err(|e| RpcError::get_logs_failed(operation, e))?;

        debug!(chunk_start, chunk_end, logs_count = logs.len(), "Fetched logs for chunk");
        all_logs.extend(logs);
    }

    debug!(total_logs = all_logs.len(), "Finished chunked log fetch");

    Ok(all_logs)
}

// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Faucet activity feed
//!
//! Builds one page of recent faucet activity from two on-chain log streams:
//! explicit `FaucetUsed` dispense events and zero-origin `Transfer` mints.
//!
//! Each call runs the same stateless flow:
//!
//! 1. [`BlockRange::resolve`] turns optional bounds into a concrete window
//! 2. [`fetch_streams`] queries both streams concurrently, isolating failures
//! 3. [`pipeline`] normalizes, deduplicates, ranks and truncates the records
//! 4. [`attach_timestamps`] adds block timestamps to the surviving page
//!
//! Only a missing chain head (needed to resolve an open-ended window) fails
//! the request. Every other failure degrades the page instead.
//!
//! # Example
//!
//! ```rust,ignore
//! use faucetscan::{ActivityFeed, ActivityQuery, FaucetscanConfig};
//!
//! let feed = ActivityFeed::new(token, FaucetscanConfig::default());
//! let page = feed.recent_activity(ActivityQuery::new().limit(5)).await?;
//!
//! for event in &page.events {
//!     println!("{} {} {} @{}", event.recipient, event.amount, event.symbol, event.block_number);
//! }
//! ```

mod enrich;
mod fetcher;
pub mod pipeline;
mod range;
mod record;

#[cfg(test)]
mod fixtures;

pub use enrich::attach_timestamps;
pub use fetcher::{fetch_streams, StreamLogs};
pub use range::BlockRange;
pub use record::{normalize_dispense, normalize_mint, ActivityKind, ActivityRecord};

use alloy_primitives::BlockNumber;
use serde::Serialize;
use tracing::{error, info, Instrument};

use crate::chain::ChainClient;
use crate::config::FaucetscanConfig;
use crate::errors::ActivityError;
use crate::tracing::spans;

/// Caller-supplied parameters for one page of activity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivityQuery {
    /// Page size; `None` or zero means the configured default
    pub limit: Option<usize>,
    /// First block to scan; defaults to `head - lookback`
    pub from_block: Option<BlockNumber>,
    /// Last block to scan; defaults to the chain head
    pub to_block: Option<BlockNumber>,
}

impl ActivityQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn from_block(mut self, block: BlockNumber) -> Self {
        self.from_block = Some(block);
        self
    }

    pub fn to_block(mut self, block: BlockNumber) -> Self {
        self.to_block = Some(block);
        self
    }
}

/// One page of the activity feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPage {
    /// At most `limit` records, newest first
    pub events: Vec<ActivityRecord>,
    /// Number of records in the window before truncation
    pub total: usize,
    pub from_block: BlockNumber,
    pub to_block: BlockNumber,
    /// Effective page size
    pub limit: usize,
}

impl ActivityPage {
    fn empty(range: BlockRange, limit: usize) -> Self {
        Self {
            events: Vec::new(),
            total: 0,
            from_block: range.from,
            to_block: range.to,
            limit,
        }
    }
}

/// Stateless activity feed over a [`ChainClient`]
///
/// Holds no per-request state, so a single feed can serve concurrent
/// requests from behind an `Arc`.
pub struct ActivityFeed<C> {
    client: C,
    config: FaucetscanConfig,
}

impl<C: ChainClient> ActivityFeed<C> {
    pub fn new(client: C, config: FaucetscanConfig) -> Self {
        Self { client, config }
    }

    /// The chain client the feed reads from
    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn config(&self) -> &FaucetscanConfig {
        &self.config
    }

    /// Build one page of recent faucet activity
    ///
    /// # Errors
    ///
    /// Returns [`ActivityError::HeadUnavailable`] if a bound is missing and
    /// the chain head cannot be read. Stream, decoding, metadata and
    /// timestamp failures only shrink or thin out the page.
    pub async fn recent_activity(
        &self,
        query: ActivityQuery,
    ) -> Result<ActivityPage, ActivityError> {
        let limit = self.config.page_limit(query.limit);
        let span = spans::recent_activity(query.from_block, query.to_block, limit);

        async move {
            let range = BlockRange::resolve(
                &self.client,
                query.from_block,
                query.to_block,
                self.config.lookback,
            )
            .await?;

            if range.is_inverted() {
                info!(
                    from_block = range.from,
                    to_block = range.to,
                    "Inverted block range, nothing to scan"
                );
                return Ok(ActivityPage::empty(range, limit));
            }

            let (logs, metadata) = tokio::join!(
                fetch_streams(&self.client, range),
                self.client.token_metadata(),
            );

            let metadata = match metadata {
                Ok(metadata) => metadata,
                Err(e) => {
                    error!(
                        error = ?e,
                        dropped_logs = logs.dispense.len() + logs.mint.len(),
                        "Token metadata unavailable, no entries can be normalized"
                    );
                    return Ok(ActivityPage::empty(range, limit));
                }
            };

            let mut events = pipeline::merge_streams(&logs, &metadata);
            pipeline::rank(&mut events);
            let total = pipeline::paginate(&mut events, limit);

            attach_timestamps(&self.client, &mut events).await;

            info!(
                from_block = range.from,
                to_block = range.to,
                total,
                returned = events.len(),
                "Built activity page"
            );

            Ok(ActivityPage {
                events,
                total,
                from_block: range.from,
                to_block: range.to,
                limit,
            })
        }
        .instrument(span)
        .await
    }
}

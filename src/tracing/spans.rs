//! Span creation helpers for faucetscan operations.
//!
//! Telemetry is kept out of business logic: each instrumented operation has a
//! span helper here, and the operation attaches it with
//! [`Instrument`](tracing::Instrument) so the span follows the future across
//! await points.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub async fn my_operation(&self, param: Type) -> Result<T> {
//!     let span = spans::my_operation(param_value);
//!     async move {
//!         // Business logic here
//!     }
//!     .instrument(span)
//!     .await
//! }
//! ```

use alloy_primitives::{Address, BlockNumber};
use tracing::{Level, Span};

use crate::chain::ActivityStream;

/// Create span for building one page of the activity feed.
///
/// This is the main public API entry point for the feed.
///
/// Parent: None (root span for this operation)
/// Children: fetch_stream spans, enrich_timestamps span
#[inline]
pub(crate) fn recent_activity(
    from_block: Option<BlockNumber>,
    to_block: Option<BlockNumber>,
    limit: usize,
) -> Span {
    tracing::span!(
        Level::INFO,
        "faucetscan.recent_activity",
        from_block = ?from_block,
        to_block = ?to_block,
        limit = limit,
    )
}

/// Create span for fetching the raw logs of one stream.
///
/// Parent: recent_activity span
/// Children: RPC calls for log retrieval
#[inline]
pub(crate) fn fetch_stream(
    stream: ActivityStream,
    from_block: BlockNumber,
    to_block: BlockNumber,
) -> Span {
    tracing::debug_span!(
        "faucetscan.fetch_stream",
        stream = %stream,
        from_block = from_block,
        to_block = to_block,
        block_count = to_block.saturating_sub(from_block).saturating_add(1),
    )
}

/// Create span for attaching block timestamps to a page of records.
///
/// Parent: recent_activity span
/// Children: RPC calls to get blocks
#[inline]
pub(crate) fn enrich_timestamps(records: usize, unique_blocks: usize) -> Span {
    tracing::debug_span!(
        "faucetscan.enrich_timestamps",
        records = records,
        unique_blocks = unique_blocks,
    )
}

/// Create span for reading a holder's balance.
#[inline]
pub(crate) fn balance(token: Address, owner: Address) -> Span {
    tracing::info_span!("faucetscan.balance", token = %token, owner = %owner)
}

/// Create span for sending a faucet transaction.
///
/// Parent: None (root span for this operation)
/// Children: RPC calls for decimals, send and receipt
#[inline]
pub(crate) fn request_faucet(token: Address, recipient: Address, amount: &str) -> Span {
    tracing::info_span!(
        "faucetscan.request_faucet",
        token = %token,
        recipient = %recipient,
        amount = amount,
    )
}

// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Chain access capability consumed by the activity feed
//!
//! The feed never talks to a provider directly. It goes through
//! [`ChainClient`], which [`FaucetToken`](crate::FaucetToken) implements over
//! any alloy provider and which tests implement with scripted responses.

use alloy_primitives::BlockNumber;
use alloy_rpc_types::Log;
use async_trait::async_trait;

use crate::errors::RpcError;
use crate::types::tokens::TokenMetadata;

/// The two log streams merged into the activity feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityStream {
    /// `FaucetUsed` events emitted by the faucet function
    Dispense,
    /// `Transfer` events whose `from` is the zero address
    Mint,
}

impl ActivityStream {
    pub const fn name(&self) -> &'static str {
        match self {
            ActivityStream::Dispense => "dispense",
            ActivityStream::Mint => "mint",
        }
    }
}

impl std::fmt::Display for ActivityStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Read access to the token contract's chain state
///
/// Each call is atomic from the feed's point of view: it either returns a
/// value or an [`RpcError`] within its own lifetime. Implementations enforce
/// their own timeouts; the feed never retries.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Current chain head height
    async fn current_height(&self) -> Result<BlockNumber, RpcError>;

    /// Raw logs of one stream over the inclusive range `[from_block, to_block]`
    async fn query_logs(
        &self,
        stream: ActivityStream,
        from_block: BlockNumber,
        to_block: BlockNumber,
    ) -> Result<Vec<Log>, RpcError>;

    /// Timestamp (seconds since epoch) of a block, `None` if the block is unknown
    async fn block_timestamp(&self, block_number: BlockNumber) -> Result<Option<u64>, RpcError>;

    /// Token decimals and symbol
    async fn token_metadata(&self) -> Result<TokenMetadata, RpcError>;
}

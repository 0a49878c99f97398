//! Configuration for faucetscan operations
//!
//! [`FaucetscanConfig`] controls how the activity feed and token façade talk
//! to the chain: lookback window, page size, log chunking and RPC timeouts.
//! [`ServiceConfig`] holds what the HTTP binary reads from the environment.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use faucetscan::FaucetscanConfig;
//!
//! // 1000-block lookback, 10 events per page, 2000-block log chunks, 30s timeout
//! let config = FaucetscanConfig::default();
//! assert_eq!(config.default_limit, 10);
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use faucetscan::FaucetscanConfigBuilder;
//! use std::time::Duration;
//!
//! let config = FaucetscanConfigBuilder::new()
//!     .lookback(5_000)
//!     .max_block_range(500)
//!     .rpc_timeout(Duration::from_secs(10))
//!     .build();
//! assert_eq!(config.lookback.as_u64(), 5_000);
//! ```

use std::time::Duration;

use crate::types::config::{BlockCount, MaxBlockRange};

pub mod constants;
mod service;

pub use service::ServiceConfig;

use constants::{
    DEFAULT_FAUCET_AMOUNT, DEFAULT_MAX_LOG_CHUNKS, DEFAULT_PAGE_LIMIT,
    DEFAULT_RECEIPT_POLL_INTERVAL, DEFAULT_RPC_TIMEOUT,
};

/// Configuration for faucetscan operations
///
/// Use [`FaucetscanConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone)]
pub struct FaucetscanConfig {
    /// Blocks scanned back from the head when no `fromBlock` is given
    /// Default: 1000
    pub lookback: BlockCount,

    /// Events per page when no usable `limit` is given
    /// Default: 10
    pub default_limit: usize,

    /// Maximum number of blocks to query in a single `eth_getLogs` call
    /// Default: 2000
    pub max_block_range: MaxBlockRange,

    /// Cap on `eth_getLogs` chunks per stream and request
    ///
    /// A range needing more chunks is first clamped to the chain head; if it
    /// still exceeds the cap the stream fails without issuing any log query.
    /// Default: 500
    pub max_log_chunks: usize,

    /// Timeout for each RPC request
    /// Default: 30 seconds (prevents hanging on unresponsive providers)
    pub rpc_timeout: Duration,

    /// Whole tokens minted by one faucet request
    /// Default: "100"
    pub faucet_amount: String,

    /// Delay between receipt polls while a faucet transaction is pending
    /// Default: 500ms
    pub receipt_poll_interval: Duration,
}

impl Default for FaucetscanConfig {
    fn default() -> Self {
        Self {
            lookback: BlockCount::DEFAULT_LOOKBACK,
            default_limit: DEFAULT_PAGE_LIMIT,
            max_block_range: MaxBlockRange::DEFAULT,
            max_log_chunks: DEFAULT_MAX_LOG_CHUNKS,
            rpc_timeout: DEFAULT_RPC_TIMEOUT,
            faucet_amount: DEFAULT_FAUCET_AMOUNT.to_string(),
            receipt_poll_interval: DEFAULT_RECEIPT_POLL_INTERVAL,
        }
    }
}

impl FaucetscanConfig {
    /// Config for local development chains
    ///
    /// Ganache and Anvil accept arbitrarily wide log queries, so ranges are
    /// fetched in a single call.
    pub fn local() -> Self {
        Self {
            max_block_range: MaxBlockRange::UNBOUNDED_LOCAL,
            ..Self::default()
        }
    }

    /// Effective page size for a caller-supplied limit
    ///
    /// A missing or zero limit falls back to `default_limit`.
    ///
    /// ```rust
    /// use faucetscan::FaucetscanConfig;
    ///
    /// let config = FaucetscanConfig::default();
    /// assert_eq!(config.page_limit(None), 10);
    /// assert_eq!(config.page_limit(Some(0)), 10);
    /// assert_eq!(config.page_limit(Some(3)), 3);
    /// ```
    pub fn page_limit(&self, requested: Option<usize>) -> usize {
        requested
            .filter(|limit| *limit > 0)
            .unwrap_or(self.default_limit)
    }
}

/// Builder for [`FaucetscanConfig`]
pub struct FaucetscanConfigBuilder {
    config: FaucetscanConfig,
}

impl Default for FaucetscanConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FaucetscanConfigBuilder {
    /// Create a new builder starting from [`FaucetscanConfig::default`]
    pub fn new() -> Self {
        Self {
            config: FaucetscanConfig::default(),
        }
    }

    /// Set the default lookback window in blocks
    pub fn lookback(mut self, blocks: u64) -> Self {
        self.config.lookback = BlockCount::new(blocks);
        self
    }

    /// Set the default page size
    ///
    /// Zero is ignored so that a page always has room for at least one event.
    pub fn default_limit(mut self, limit: usize) -> Self {
        if limit > 0 {
            self.config.default_limit = limit;
        }
        self
    }

    /// Set max blocks per `eth_getLogs` call
    pub fn max_block_range(mut self, max: u64) -> Self {
        self.config.max_block_range = MaxBlockRange::new(max);
        self
    }

    /// Set the chunk cap per log stream
    ///
    /// Zero is bumped to one so a single-chunk range can always be fetched.
    pub fn max_log_chunks(mut self, chunks: usize) -> Self {
        self.config.max_log_chunks = chunks.max(1);
        self
    }

    /// Set the per-call RPC timeout
    pub fn rpc_timeout(mut self, timeout: Duration) -> Self {
        self.config.rpc_timeout = timeout;
        self
    }

    /// Set the whole-token amount dispensed per faucet request
    pub fn faucet_amount(mut self, amount: impl Into<String>) -> Self {
        self.config.faucet_amount = amount.into();
        self
    }

    pub fn receipt_poll_interval(mut self, interval: Duration) -> Self {
        self.config.receipt_poll_interval = interval;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> FaucetscanConfig {
        self.config
    }
}

//! RPC failure reporting shared by every chain read.
//!
//! Each variant names the call that failed (and the block span or contract
//! function involved) so a single log line is enough to locate the problem.

use std::time::Duration;

/// A failed call against the node.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use faucetscan::RpcError;
///
/// let error = RpcError::timeout("decimals", Duration::from_secs(2));
/// assert_eq!(error.to_string(), "decimals timed out after 2000ms");
/// ```
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// `eth_getLogs` failed for one chunk of a stream.
    #[error("Failed to fetch logs for {operation}")]
    GetLogsFailed {
        /// Stream and span that failed, e.g. "mint logs 100-200"
        operation: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// `eth_blockNumber` failed.
    #[error("Failed to get current block number")]
    GetBlockNumberFailed {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// `eth_getBlockByNumber` failed. A block that simply does not exist is
    /// not an error; callers see `None` instead.
    #[error("Failed to fetch block {block_number} details")]
    GetBlockFailed {
        block_number: u64,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A view call or transaction against the token contract failed.
    #[error("Contract call failed during {operation}")]
    ContractCallFailed {
        operation: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A log query would need more chunks than `max_log_chunks` allows.
    #[error(
        "Log range {from_block}-{to_block} needs {chunks} chunks, more than the {max_chunks} allowed"
    )]
    RangeTooLarge {
        from_block: u64,
        to_block: u64,
        chunks: usize,
        max_chunks: usize,
    },

    /// No answer within the configured `rpc_timeout`.
    #[error("{operation} timed out after {}ms", timeout.as_millis())]
    Timeout {
        operation: String,
        timeout: Duration,
    },
}

impl RpcError {
    pub fn get_logs_failed(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::GetLogsFailed {
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    pub fn get_block_number_failed(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        RpcError::GetBlockNumberFailed {
            source: Box::new(source),
        }
    }

    pub fn get_block_failed(
        block_number: u64,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::GetBlockFailed {
            block_number,
            source: Box::new(source),
        }
    }

    /// Wrap any provider or contract error, boxing it as the source.
    pub fn contract_call_failed(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::ContractCallFailed {
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    pub fn range_too_large(
        from_block: u64,
        to_block: u64,
        chunks: usize,
        max_chunks: usize,
    ) -> Self {
        RpcError::RangeTooLarge {
            from_block,
            to_block,
            chunks,
            max_chunks,
        }
    }

    pub fn timeout(operation: impl Into<String>, timeout: Duration) -> Self {
        RpcError::Timeout {
            operation: operation.into(),
            timeout,
        }
    }
}

// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for faucetscan integration tests
//!
//! Provides mock implementations of [`ChainClient`] and [`FaucetBackend`] so
//! the activity feed and HTTP routes can be tested without a blockchain.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use alloy_primitives::{Address, BlockNumber, LogData, TxHash, B256, U256};
use alloy_rpc_types::Log;
use alloy_sol_types::SolEvent;
use async_trait::async_trait;
use faucetscan::{
    ActivityError, ActivityPage, ActivityQuery, ActivityStream, ChainClient, FaucetBackend,
    FaucetReceipt, FaucetUsed, RpcError, TokenBalance, TokenError, TokenMetadata, Transfer,
};

pub const TOKEN: Address = Address::new([0xfa; 20]);

/// Deterministic transaction hash for test logs
pub fn tx(n: u64) -> TxHash {
    B256::from(U256::from(n))
}

/// `whole * 10^decimals`
pub fn units(whole: u64, decimals: u8) -> U256 {
    U256::from(whole) * U256::from(10u64).pow(U256::from(decimals))
}

fn rpc_log(block_number: BlockNumber, tx_hash: TxHash, data: LogData) -> Log {
    Log {
        inner: alloy_primitives::Log {
            address: TOKEN,
            data,
        },
        block_hash: Some(B256::ZERO),
        block_number: Some(block_number),
        block_timestamp: None,
        transaction_hash: Some(tx_hash),
        transaction_index: Some(0),
        log_index: Some(0),
        removed: false,
    }
}

/// A `FaucetUsed` log with real ABI encoding
pub fn dispense_log(
    block_number: BlockNumber,
    tx_hash: TxHash,
    to: Address,
    amount: U256,
    caller: Address,
) -> Log {
    rpc_log(
        block_number,
        tx_hash,
        FaucetUsed { to, amount, caller }.encode_log_data(),
    )
}

/// A `Transfer` log out of the zero address
pub fn mint_log(block_number: BlockNumber, tx_hash: TxHash, to: Address, value: U256) -> Log {
    rpc_log(
        block_number,
        tx_hash,
        Transfer {
            from: Address::ZERO,
            to,
            value,
        }
        .encode_log_data(),
    )
}

/// A dispense log whose data section (the amount) is missing
pub fn truncated_dispense_log(
    block_number: BlockNumber,
    tx_hash: TxHash,
    to: Address,
    caller: Address,
) -> Log {
    let full = FaucetUsed {
        to,
        amount: U256::ZERO,
        caller,
    }
    .encode_log_data();
    rpc_log(
        block_number,
        tx_hash,
        LogData::new_unchecked(full.topics().to_vec(), Default::default()),
    )
}

fn connection_refused() -> std::io::Error {
    std::io::Error::other("connection refused")
}

/// Scripted [`ChainClient`]
///
/// Everything succeeds by default with empty results; individual calls can be
/// scripted to fail.
///
/// # Example
///
/// ```rust,ignore
/// let chain = MockChain::new()
///     .with_head(5000)
///     .with_dispense_logs(vec![dispense_log(100, tx(1), r1, amount, c1)])
///     .failing_stream(ActivityStream::Mint);
/// ```
pub struct MockChain {
    head: Option<BlockNumber>,
    dispense: Vec<Log>,
    mint: Vec<Log>,
    failing_streams: Vec<ActivityStream>,
    timestamps: HashMap<BlockNumber, u64>,
    failing_blocks: Vec<BlockNumber>,
    metadata: Option<TokenMetadata>,
    log_queries: Mutex<Vec<(ActivityStream, BlockNumber, BlockNumber)>>,
    head_queries: Mutex<usize>,
    block_queries: Mutex<Vec<BlockNumber>>,
}

impl MockChain {
    pub fn new() -> Self {
        Self {
            head: Some(0),
            dispense: Vec::new(),
            mint: Vec::new(),
            failing_streams: Vec::new(),
            timestamps: HashMap::new(),
            failing_blocks: Vec::new(),
            metadata: Some(TokenMetadata::new(18, "FCT")),
            log_queries: Mutex::new(Vec::new()),
            head_queries: Mutex::new(0),
            block_queries: Mutex::new(Vec::new()),
        }
    }

    pub fn with_head(mut self, head: BlockNumber) -> Self {
        self.head = Some(head);
        self
    }

    /// Make `current_height` fail
    pub fn without_head(mut self) -> Self {
        self.head = None;
        self
    }

    pub fn with_dispense_logs(mut self, logs: Vec<Log>) -> Self {
        self.dispense = logs;
        self
    }

    pub fn with_mint_logs(mut self, logs: Vec<Log>) -> Self {
        self.mint = logs;
        self
    }

    pub fn failing_stream(mut self, stream: ActivityStream) -> Self {
        self.failing_streams.push(stream);
        self
    }

    pub fn with_timestamp(mut self, block_number: BlockNumber, timestamp: u64) -> Self {
        self.timestamps.insert(block_number, timestamp);
        self
    }

    pub fn failing_block(mut self, block_number: BlockNumber) -> Self {
        self.failing_blocks.push(block_number);
        self
    }

    pub fn with_metadata(mut self, metadata: TokenMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn without_metadata(mut self) -> Self {
        self.metadata = None;
        self
    }

    /// Log queries issued so far, in order
    pub fn log_queries(&self) -> Vec<(ActivityStream, BlockNumber, BlockNumber)> {
        self.log_queries.lock().unwrap().clone()
    }

    pub fn head_queries(&self) -> usize {
        *self.head_queries.lock().unwrap()
    }

    pub fn block_queries(&self) -> Vec<BlockNumber> {
        self.block_queries.lock().unwrap().clone()
    }
}

impl Default for MockChain {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChainClient for MockChain {
    async fn current_height(&self) -> Result<BlockNumber, RpcError> {
        *self.head_queries.lock().unwrap() += 1;
        self.head
            .ok_or_else(|| RpcError::get_block_number_failed(connection_refused()))
    }

    async fn query_logs(
        &self,
        stream: ActivityStream,
        from_block: BlockNumber,
        to_block: BlockNumber,
    ) -> Result<Vec<Log>, RpcError> {
        self.log_queries
            .lock()
            .unwrap()
            .push((stream, from_block, to_block));

        if self.failing_streams.contains(&stream) {
            return Err(RpcError::get_logs_failed(
                format!("{stream} logs {from_block}-{to_block}"),
                connection_refused(),
            ));
        }

        let logs = match stream {
            ActivityStream::Dispense => &self.dispense,
            ActivityStream::Mint => &self.mint,
        };
        Ok(logs
            .iter()
            .filter(|log| {
                log.block_number
                    .is_none_or(|block| (from_block..=to_block).contains(&block))
            })
            .cloned()
            .collect())
    }

    async fn block_timestamp(&self, block_number: BlockNumber) -> Result<Option<u64>, RpcError> {
        self.block_queries.lock().unwrap().push(block_number);
        if self.failing_blocks.contains(&block_number) {
            return Err(RpcError::get_block_failed(block_number, connection_refused()));
        }
        Ok(self.timestamps.get(&block_number).copied())
    }

    async fn token_metadata(&self) -> Result<TokenMetadata, RpcError> {
        self.metadata
            .clone()
            .ok_or_else(|| RpcError::contract_call_failed("decimals", connection_refused()))
    }
}

/// Canned responses for each [`FaucetBackend`] operation
pub struct MockBackend {
    pub balance: Mutex<Option<Result<TokenBalance, TokenError>>>,
    pub receipt: Mutex<Option<Result<FaucetReceipt, TokenError>>>,
    pub page: Mutex<Option<Result<ActivityPage, ActivityError>>>,
    pub queries: Mutex<Vec<ActivityQuery>>,
    pub recipients: Mutex<Vec<Address>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            balance: Mutex::new(None),
            receipt: Mutex::new(None),
            page: Mutex::new(None),
            queries: Mutex::new(Vec::new()),
            recipients: Mutex::new(Vec::new()),
        }
    }

    pub fn with_balance(self, balance: Result<TokenBalance, TokenError>) -> Self {
        *self.balance.lock().unwrap() = Some(balance);
        self
    }

    pub fn with_receipt(self, receipt: Result<FaucetReceipt, TokenError>) -> Self {
        *self.receipt.lock().unwrap() = Some(receipt);
        self
    }

    pub fn with_page(self, page: Result<ActivityPage, ActivityError>) -> Self {
        *self.page.lock().unwrap() = Some(page);
        self
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn unscripted() -> RpcError {
    RpcError::contract_call_failed("unscripted call", connection_refused())
}

#[async_trait]
impl FaucetBackend for MockBackend {
    async fn balance(&self, _owner: Address) -> Result<TokenBalance, TokenError> {
        self.balance
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(unscripted().into()))
    }

    async fn request_faucet(&self, recipient: Address) -> Result<FaucetReceipt, TokenError> {
        self.recipients.lock().unwrap().push(recipient);
        self.receipt
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(unscripted().into()))
    }

    async fn recent_activity(&self, query: ActivityQuery) -> Result<ActivityPage, ActivityError> {
        self.queries.lock().unwrap().push(query);
        self.page
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(ActivityError::head_unavailable(unscripted())))
    }
}

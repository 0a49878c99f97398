//! Log builders and a scripted chain for unit tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use alloy_primitives::{address, Address, BlockNumber, TxHash, B256, U256};
use alloy_rpc_types::Log;
use alloy_sol_types::SolEvent;
use async_trait::async_trait;

use crate::chain::{ActivityStream, ChainClient};
use crate::errors::RpcError;
use crate::events::{FaucetUsed, Transfer};
use crate::types::tokens::TokenMetadata;

pub(crate) const TOKEN: Address = address!("fafafafafafafafafafafafafafafafafafafafa");

pub(crate) fn tx(n: u64) -> TxHash {
    B256::from(U256::from(n))
}

fn rpc_log(block_number: BlockNumber, tx_hash: TxHash, data: alloy_primitives::LogData) -> Log {
    Log {
        inner: alloy_primitives::Log {
            address: TOKEN,
            data,
        },
        block_number: Some(block_number),
        transaction_hash: Some(tx_hash),
        ..Default::default()
    }
}

pub(crate) fn dispense_log(
    block_number: BlockNumber,
    tx_hash: TxHash,
    to: Address,
    amount: U256,
    caller: Address,
) -> Log {
    let event = FaucetUsed { to, amount, caller };
    rpc_log(block_number, tx_hash, event.encode_log_data())
}

pub(crate) fn transfer_log(
    block_number: BlockNumber,
    tx_hash: TxHash,
    from: Address,
    to: Address,
    value: U256,
) -> Log {
    let event = Transfer { from, to, value };
    rpc_log(block_number, tx_hash, event.encode_log_data())
}

pub(crate) fn mint_log(
    block_number: BlockNumber,
    tx_hash: TxHash,
    to: Address,
    value: U256,
) -> Log {
    transfer_log(block_number, tx_hash, Address::ZERO, to, value)
}

fn unavailable(operation: &str) -> RpcError {
    RpcError::get_logs_failed(operation, std::io::Error::other("connection refused"))
}

/// In-memory [`ChainClient`] with per-call failure switches
#[derive(Default)]
pub(crate) struct ScriptedChain {
    pub head: Option<BlockNumber>,
    pub dispense: Option<Vec<Log>>,
    pub mint: Option<Vec<Log>>,
    pub timestamps: HashMap<BlockNumber, u64>,
    pub failing_blocks: Vec<BlockNumber>,
    pub metadata: Option<TokenMetadata>,
    pub head_calls: AtomicUsize,
    pub log_calls: AtomicUsize,
    pub block_calls: AtomicUsize,
}

#[async_trait]
impl ChainClient for ScriptedChain {
    async fn current_height(&self) -> Result<BlockNumber, RpcError> {
        self.head_calls.fetch_add(1, Ordering::SeqCst);
        self.head.ok_or_else(|| {
            RpcError::get_block_number_failed(std::io::Error::other("connection refused"))
        })
    }

    async fn query_logs(
        &self,
        stream: ActivityStream,
        _from_block: BlockNumber,
        _to_block: BlockNumber,
    ) -> Result<Vec<Log>, RpcError> {
        self.log_calls.fetch_add(1, Ordering::SeqCst);
        let logs = match stream {
            ActivityStream::Dispense => &self.dispense,
            ActivityStream::Mint => &self.mint,
        };
        logs.clone().ok_or_else(|| unavailable(stream.name()))
    }

    async fn block_timestamp(&self, block_number: BlockNumber) -> Result<Option<u64>, RpcError> {
        self.block_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_blocks.contains(&block_number) {
            return Err(RpcError::get_block_failed(
                block_number,
                std::io::Error::other("timeout"),
            ));
        }
        Ok(self.timestamps.get(&block_number).copied())
    }

    async fn token_metadata(&self) -> Result<TokenMetadata, RpcError> {
        self.metadata.clone().ok_or_else(|| {
            RpcError::contract_call_failed("decimals", std::io::Error::other("reverted"))
        })
    }
}

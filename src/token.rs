// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Faucet token façade over an alloy provider
//!
//! [`FaucetToken`] wraps the deployed contract and offers the three things
//! the service needs from it: balance lookups, faucet requests and (through
//! its [`ChainClient`] implementation) the reads behind the activity feed.
//!
//! Every RPC call is bounded by the configured timeout. Log queries are split
//! into [`MaxBlockRange`](crate::MaxBlockRange) sized chunks, at most
//! `max_log_chunks` of them per stream.
//!
//! # Example
//!
//! ```rust,ignore
//! use alloy_provider::ProviderBuilder;
//! use faucetscan::{FaucetToken, FaucetscanConfig};
//!
//! let provider = ProviderBuilder::new().connect_http("http://127.0.0.1:7545".parse()?);
//! let token = FaucetToken::new(contract_address, provider, &FaucetscanConfig::local());
//!
//! let balance = token.balance(holder).await?;
//! println!("{} {}", balance.balance, balance.symbol);
//! ```

use std::future::IntoFuture;
use std::time::Duration;

use alloy_network::ReceiptResponse;
use alloy_primitives::{Address, BlockNumber, TxHash, U256};
use alloy_provider::Provider;
use alloy_rpc_types::{Log, TransactionReceipt};
use async_trait::async_trait;
use serde::{Serialize, Serializer};
use tokio::time::{sleep, timeout};
use tracing::{debug, info, Instrument};

use crate::chain::{ActivityStream, ChainClient};
use crate::config::FaucetscanConfig;
use crate::errors::{RpcError, TokenError};
use crate::events::{fetch_logs_chunked, stream_filter, ChunkPlan, IFaucetToken};
use crate::tracing::spans;
use crate::types::tokens::{TokenDecimals, TokenMetadata};

/// Balance of one holder, as returned by `GET /balance/{address}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalance {
    #[serde(serialize_with = "serialize_display")]
    pub address: Address,
    /// Balance scaled by the token's decimals
    pub balance: String,
    #[serde(serialize_with = "serialize_display")]
    pub raw_balance: U256,
    pub symbol: String,
    pub name: String,
    #[serde(serialize_with = "serialize_decimals")]
    pub decimals: TokenDecimals,
    #[serde(serialize_with = "serialize_display")]
    pub contract_address: Address,
}

/// Outcome of a mined faucet transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaucetReceipt {
    pub success: bool,
    pub transaction_hash: TxHash,
    pub block_number: Option<BlockNumber>,
    #[serde(serialize_with = "serialize_display")]
    pub address: Address,
    /// Whole-token amount that was requested
    pub amount: String,
}

fn serialize_display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: std::fmt::Display,
    S: Serializer,
{
    serializer.collect_str(value)
}

fn serialize_decimals<S: Serializer>(
    decimals: &TokenDecimals,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&decimals.as_u8())
}

/// Handle on the deployed faucet token contract
#[derive(Debug, Clone)]
pub struct FaucetToken<P> {
    address: Address,
    provider: P,
    log_chunks: ChunkPlan,
    rpc_timeout: Duration,
    receipt_poll_interval: Duration,
}

impl<P: Provider> FaucetToken<P> {
    pub fn new(address: Address, provider: P, config: &FaucetscanConfig) -> Self {
        Self {
            address,
            provider,
            log_chunks: ChunkPlan {
                max_block_range: config.max_block_range,
                max_chunks: config.max_log_chunks,
                rpc_timeout: config.rpc_timeout,
            },
            rpc_timeout: config.rpc_timeout,
            receipt_poll_interval: config.receipt_poll_interval,
        }
    }

    /// Contract address
    pub fn address(&self) -> Address {
        self.address
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Await an RPC call, failing with [`RpcError::Timeout`] past `rpc_timeout`
    async fn bounded<F, T, E>(
        &self,
        operation: &str,
        call: F,
        map_err: impl FnOnce(E) -> RpcError,
    ) -> Result<T, RpcError>
    where
        F: IntoFuture<Output = Result<T, E>>,
    {
        timeout(self.rpc_timeout, call)
            .await
            .map_err(|_| RpcError::timeout(operation, self.rpc_timeout))?
            .map_err(map_err)
    }

    async fn decimals(&self) -> Result<TokenDecimals, RpcError> {
        let contract = IFaucetToken::new(self.address, &self.provider);
        let decimals = self
            .bounded("decimals", contract.decimals().call(), |e| {
                RpcError::contract_call_failed("decimals", e)
            })
            .await?;
        Ok(TokenDecimals::new(decimals))
    }

    async fn symbol(&self) -> Result<String, RpcError> {
        let contract = IFaucetToken::new(self.address, &self.provider);
        self.bounded("symbol", contract.symbol().call(), |e| {
            RpcError::contract_call_failed("symbol", e)
        })
        .await
    }

    /// Poll `eth_getTransactionReceipt` until the node reports the receipt
    async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<TransactionReceipt, RpcError> {
        loop {
            let receipt = self
                .provider
                .get_transaction_receipt(tx_hash)
                .await
                .map_err(|e| RpcError::contract_call_failed("faucet receipt", e))?;

            if let Some(receipt) = receipt {
                return Ok(receipt);
            }

            debug!(tx_hash = %tx_hash, "Faucet transaction not mined yet");
            sleep(self.receipt_poll_interval).await;
        }
    }

    /// Read `owner`'s balance together with the token's display metadata
    pub async fn balance(&self, owner: Address) -> Result<TokenBalance, TokenError> {
        let span = spans::balance(self.address, owner);

        async move {
            let contract = IFaucetToken::new(self.address, &self.provider);
            let balance_of = contract.balanceOf(owner);
            let name = contract.name();

            let (raw_balance, decimals, symbol, name) = tokio::try_join!(
                self.bounded("balanceOf", balance_of.call(), |e| {
                    RpcError::contract_call_failed("balanceOf", e)
                }),
                self.decimals(),
                self.symbol(),
                self.bounded("name", name.call(), |e| {
                    RpcError::contract_call_failed("name", e)
                }),
            )?;

            let balance = decimals
                .format_amount(raw_balance)
                .map_err(|e| TokenError::invalid_amount(raw_balance.to_string(), e.to_string()))?;

            Ok(TokenBalance {
                address: owner,
                balance,
                raw_balance,
                symbol,
                name,
                decimals,
                contract_address: self.address,
            })
        }
        .instrument(span)
        .await
    }

    /// Mint `amount` whole tokens to `recipient` through the contract's faucet
    ///
    /// Requires a provider with a wallet. Polls for the receipt every
    /// `receipt_poll_interval` for up to `rpc_timeout` and fails with
    /// [`TokenError::Reverted`] if the transaction reverted.
    pub async fn request_faucet(
        &self,
        recipient: Address,
        amount: &str,
    ) -> Result<FaucetReceipt, TokenError> {
        let span = spans::request_faucet(self.address, recipient, amount);

        async move {
            let decimals = self.decimals().await?;
            let raw_amount = decimals
                .parse_amount(amount)
                .map_err(|e| TokenError::invalid_amount(amount, e.to_string()))?;

            let contract = IFaucetToken::new(self.address, &self.provider);
            let pending = self
                .bounded("faucet", contract.faucet(recipient, raw_amount).send(), |e| {
                    RpcError::contract_call_failed("faucet", e)
                })
                .await?;

            let tx_hash = *pending.tx_hash();
            info!(tx_hash = %tx_hash, "Faucet transaction sent");

            let receipt = self
                .bounded("faucet receipt", self.wait_for_receipt(tx_hash), |e| e)
                .await?;

            if !receipt.status() {
                return Err(TokenError::Reverted {
                    tx_hash: tx_hash.to_string(),
                });
            }

            info!(
                tx_hash = %tx_hash,
                block_number = ?receipt.block_number(),
                "Faucet transaction mined"
            );

            Ok(FaucetReceipt {
                success: true,
                transaction_hash: receipt.transaction_hash(),
                block_number: receipt.block_number(),
                address: recipient,
                amount: amount.to_string(),
            })
        }
        .instrument(span)
        .await
    }
}

#[async_trait]
impl<P: Provider> ChainClient for FaucetToken<P> {
    async fn current_height(&self) -> Result<BlockNumber, RpcError> {
        self.bounded(
            "get_block_number",
            self.provider.get_block_number(),
            RpcError::get_block_number_failed,
        )
        .await
    }

    async fn query_logs(
        &self,
        stream: ActivityStream,
        from_block: BlockNumber,
        to_block: BlockNumber,
    ) -> Result<Vec<Log>, RpcError> {
        let mut end_block = to_block;

        // Blocks past the head hold no logs; only ask for the head when the
        // requested span would otherwise exceed the chunk cap.
        if self.log_chunks.check(from_block, end_block).is_err() {
            let head = self.current_height().await?;
            if head < end_block {
                debug!(%stream, to_block, head, "Clamping log range to the chain head");
                end_block = head;
            }
            if from_block > end_block {
                return Ok(Vec::new());
            }
        }

        let filter = stream_filter(stream, self.address);
        fetch_logs_chunked(&self.provider, &filter, from_block, end_block, self.log_chunks).await
    }

    async fn block_timestamp(&self, block_number: BlockNumber) -> Result<Option<u64>, RpcError> {
        let block = self
            .bounded(
                "get_block_by_number",
                self.provider.get_block_by_number(block_number.into()),
                |e| RpcError::get_block_failed(block_number, e),
            )
            .await?;
        Ok(block.map(|block| block.header.timestamp))
    }

    async fn token_metadata(&self) -> Result<TokenMetadata, RpcError> {
        let (decimals, symbol) = tokio::try_join!(self.decimals(), self.symbol())?;
        Ok(TokenMetadata { decimals, symbol })
    }
}

// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! The unified activity record and per-log normalization
//!
//! Both streams are decoded into [`ActivityRecord`]. A log that cannot be
//! decoded, or that lacks the block metadata every record carries, is
//! reported as an [`ActivityError`] so the pipeline can drop just that entry.

use alloy_primitives::{Address, BlockNumber, TxHash, U256};
use alloy_rpc_types::Log;
use alloy_sol_types::SolEvent;
use serde::{Serialize, Serializer};

use crate::chain::ActivityStream;
use crate::errors::ActivityError;
use crate::events::{FaucetUsed, Transfer};
use crate::types::tokens::TokenMetadata;

/// What produced an activity record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ActivityKind {
    /// An explicit `FaucetUsed` event
    #[serde(rename = "faucet")]
    Dispense,
    /// A `Transfer` out of the zero address
    #[serde(rename = "mint")]
    Mint,
}

/// One entry of the activity feed
///
/// Serializes with the field names web clients already consume (`type`,
/// `to`, `transactionHash`, ...). Addresses render in EIP-55 checksum case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    #[serde(rename = "to", serialize_with = "serialize_display")]
    pub recipient: Address,
    /// Raw amount scaled by the token's decimals
    pub amount: String,
    #[serde(serialize_with = "serialize_display")]
    pub raw_amount: U256,
    /// Faucet caller; only dispense records have one
    #[serde(serialize_with = "serialize_optional_display")]
    pub caller: Option<Address>,
    #[serde(rename = "transactionHash")]
    pub tx_hash: TxHash,
    pub block_number: BlockNumber,
    /// Block timestamp in seconds, attached after pagination
    pub timestamp: Option<u64>,
    pub symbol: String,
}

impl ActivityRecord {
    /// Key used to match a mint against the dispense that caused it
    pub fn dedup_key(&self) -> (TxHash, Address) {
        (self.tx_hash, self.recipient)
    }
}

/// Addresses render checksummed and raw amounts in base 10
fn serialize_display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: std::fmt::Display,
    S: Serializer,
{
    serializer.collect_str(value)
}

fn serialize_optional_display<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: std::fmt::Display,
    S: Serializer,
{
    match value {
        Some(value) => serializer.collect_str(value),
        None => serializer.serialize_none(),
    }
}

/// Block number and transaction hash shared by both streams
fn log_position(
    log: &Log,
    stream: ActivityStream,
) -> Result<(BlockNumber, TxHash), ActivityError> {
    let block_number = log
        .block_number
        .ok_or_else(|| ActivityError::missing_field(stream, "block number"))?;
    let tx_hash = log
        .transaction_hash
        .ok_or_else(|| ActivityError::missing_field(stream, "transaction hash"))?;
    Ok((block_number, tx_hash))
}

fn scaled_amount(
    raw: U256,
    metadata: &TokenMetadata,
    stream: ActivityStream,
) -> Result<String, ActivityError> {
    metadata
        .decimals
        .format_amount(raw)
        .map_err(|e| ActivityError::invalid_amount(stream, e.to_string()))
}

/// Normalize a `FaucetUsed` log into a dispense record
pub fn normalize_dispense(
    log: &Log,
    metadata: &TokenMetadata,
) -> Result<ActivityRecord, ActivityError> {
    let stream = ActivityStream::Dispense;
    let event = FaucetUsed::decode_log(&log.inner)
        .map_err(|e| ActivityError::decode_failed(stream, e.to_string()))?
        .data;
    let (block_number, tx_hash) = log_position(log, stream)?;

    Ok(ActivityRecord {
        kind: ActivityKind::Dispense,
        recipient: event.to,
        amount: scaled_amount(event.amount, metadata, stream)?,
        raw_amount: event.amount,
        caller: Some(event.caller),
        tx_hash,
        block_number,
        timestamp: None,
        symbol: metadata.symbol.clone(),
    })
}

/// Normalize a `Transfer` log into a mint record
///
/// Returns `Ok(None)` for transfers that do not originate from the zero
/// address; those are not mints and are discarded silently.
pub fn normalize_mint(
    log: &Log,
    metadata: &TokenMetadata,
) -> Result<Option<ActivityRecord>, ActivityError> {
    let stream = ActivityStream::Mint;
    let event = Transfer::decode_log(&log.inner)
        .map_err(|e| ActivityError::decode_failed(stream, e.to_string()))?
        .data;

    if event.from != Address::ZERO {
        return Ok(None);
    }

    let (block_number, tx_hash) = log_position(log, stream)?;

    Ok(Some(ActivityRecord {
        kind: ActivityKind::Mint,
        recipient: event.to,
        amount: scaled_amount(event.value, metadata, stream)?,
        raw_amount: event.value,
        caller: None,
        tx_hash,
        block_number,
        timestamp: None,
        symbol: metadata.symbol.clone(),
    }))
}

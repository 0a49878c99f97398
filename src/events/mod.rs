// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Faucet token event handling.
//!
//! This module handles:
//! - `FaucetUsed` and `Transfer` event definitions (plus the contract's call bindings)
//! - Log filters for the dispense and mint streams
//! - Chunked log fetching over a block range

pub mod chunked;
pub mod definitions;
pub mod filter;

pub use chunked::{fetch_logs_chunked, ChunkPlan};
pub use definitions::{FaucetUsed, IFaucetToken, Transfer};
pub use filter::{dispense_filter, mint_filter, stream_filter};

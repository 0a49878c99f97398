// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! # faucetscan
//!
//! Live activity feed and HTTP façade for an ERC-20 faucet token.
//!
//! The core is [`ActivityFeed`]: it merges the token's `FaucetUsed` dispense
//! events with zero-origin `Transfer` mints, suppresses mints a dispense
//! already accounts for, ranks the result newest first, paginates it and
//! enriches the page with block timestamps. Every request re-reads the chain;
//! nothing is cached or persisted.
//!
//! The feed reads the chain through the [`ChainClient`] trait.
//! [`FaucetToken`] implements it over any alloy provider and additionally
//! serves balance lookups and faucet requests.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use alloy_provider::ProviderBuilder;
//! use faucetscan::{ActivityFeed, ActivityQuery, FaucetToken, FaucetscanConfig};
//!
//! let provider = ProviderBuilder::new().connect_http("http://127.0.0.1:7545".parse()?);
//! let config = FaucetscanConfig::default();
//! let feed = ActivityFeed::new(FaucetToken::new(contract, provider, &config), config);
//!
//! let page = feed.recent_activity(ActivityQuery::new().limit(5)).await?;
//! println!("showing {} of {} events", page.events.len(), page.total);
//! ```
//!
//! ## Failure model
//!
//! A failing log stream, an undecodable log or a failed block lookup only
//! removes data from the page. The request itself fails only when the chain
//! head is needed to resolve the block window and cannot be read.

pub mod activity;
pub mod api;
pub mod bootstrap;
pub mod chain;
pub mod config;
pub mod errors;
pub mod events;
pub mod token;
mod tracing;
pub mod types;

pub use activity::{
    ActivityFeed, ActivityKind, ActivityPage, ActivityQuery, ActivityRecord, BlockRange,
};
pub use api::{router, FaucetBackend};
pub use chain::{ActivityStream, ChainClient};
pub use config::{FaucetscanConfig, FaucetscanConfigBuilder, ServiceConfig};
pub use errors::{ActivityError, ConfigError, FaucetscanError, RpcError, TokenError};
pub use events::{FaucetUsed, IFaucetToken, Transfer};
pub use token::{FaucetReceipt, FaucetToken, TokenBalance};
pub use types::config::{BlockCount, MaxBlockRange};
pub use types::tokens::{TokenDecimals, TokenMetadata};

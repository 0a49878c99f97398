//! Error types for the faucetscan library.
//!
//! This module follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained handling ([`ActivityError`],
//!   [`TokenError`], [`ConfigError`])
//! - **Unified error type** ([`FaucetscanError`]) for callers that don't need
//!   to distinguish between error sources
//!
//! [`RpcError`] provides shared variants for blockchain RPC operations and is
//! wrapped by the module-specific errors.
//!
//! # Examples
//!
//! ```rust,ignore
//! use faucetscan::{ActivityError, ActivityQuery};
//!
//! match feed.recent_activity(ActivityQuery::default()).await {
//!     Ok(page) => println!("{} of {} events", page.events.len(), page.total),
//!     Err(ActivityError::HeadUnavailable(e)) => eprintln!("chain unreachable: {e}"),
//!     Err(e) => eprintln!("Other error: {e}"),
//! }
//! ```

mod activity;
mod config;
mod rpc;
mod token;

pub use activity::ActivityError;
pub use config::ConfigError;
pub use rpc::RpcError;
pub use token::TokenError;

/// Unified error type for all faucetscan operations.
///
/// All module-specific error types convert to `FaucetscanError` via `From`,
/// so `?` propagates them naturally.
#[derive(Debug, thiserror::Error)]
pub enum FaucetscanError {
    /// Error from the activity feed.
    #[error("Activity feed error: {0}")]
    Activity(#[from] ActivityError),

    /// Error from balance lookups or faucet requests.
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    /// Error loading configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from a raw RPC operation.
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),
}

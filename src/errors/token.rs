//! Error types for the token façade (balance lookups and faucet requests).

use super::RpcError;

/// Errors that can occur while reading balances or dispensing tokens.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// RPC error when communicating with the token contract.
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    /// The configured faucet amount cannot be expressed in the token's units.
    #[error("Invalid token amount {amount:?}: {details}")]
    InvalidAmount { amount: String, details: String },

    /// The faucet transaction was mined but reverted.
    #[error("Faucet transaction {tx_hash} reverted")]
    Reverted { tx_hash: String },
}

impl TokenError {
    pub fn invalid_amount(amount: impl Into<String>, details: impl Into<String>) -> Self {
        TokenError::InvalidAmount {
            amount: amount.into(),
            details: details.into(),
        }
    }
}

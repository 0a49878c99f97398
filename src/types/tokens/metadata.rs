//! Token metadata read once per request

use serde::{Deserialize, Serialize};

use super::TokenDecimals;

/// Contract-level constants attached to every activity record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub decimals: TokenDecimals,
    pub symbol: String,
}

impl TokenMetadata {
    pub fn new(decimals: impl Into<TokenDecimals>, symbol: impl Into<String>) -> Self {
        Self {
            decimals: decimals.into(),
            symbol: symbol.into(),
        }
    }
}

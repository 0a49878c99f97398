//! Strong types for token-related values
//!
//! Raw on-chain amounts stay `U256`; [`TokenDecimals`] converts them to and
//! from the decimal strings exposed over the API.

mod decimals;
mod metadata;

pub use decimals::TokenDecimals;
pub use metadata::TokenMetadata;

//! Faucet token contract bindings
//!
//! The token is a plain ERC-20 extended with a public `faucet` function that
//! mints to a recipient and emits `FaucetUsed` alongside the standard
//! zero-origin `Transfer`.
//!
//! # Example: Decoding a dispense log
//!
//! ```rust,ignore
//! use faucetscan::FaucetUsed;
//! use alloy_sol_types::SolEvent;
//!
//! let event = FaucetUsed::decode_log(&log.inner)?.data;
//! println!("{} received {} (requested by {})", event.to, event.amount, event.caller);
//! ```

use std::fmt::Debug;

use alloy_sol_types::sol;

sol! {
    /// ERC-20 token with a faucet entry point
    #[sol(rpc)]
    interface IFaucetToken {
        /// Emitted by `faucet` for every grant
        ///
        /// - `to`: recipient of the minted tokens (indexed)
        /// - `amount`: raw amount minted, not adjusted for decimals
        /// - `caller`: account that invoked the faucet (indexed)
        event FaucetUsed(address indexed to, uint256 amount, address indexed caller);

        /// Standard ERC-20 transfer; `from == 0x0` marks a mint
        event Transfer(address indexed from, address indexed to, uint256 value);

        function balanceOf(address owner) external view returns (uint256);
        function faucet(address to, uint256 amount) external;
        function decimals() external view returns (uint8);
        function symbol() external view returns (string memory);
        function name() external view returns (string memory);
    }
}

pub use IFaucetToken::{FaucetUsed, Transfer};

impl Debug for FaucetUsed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FaucetUsed(to: {}, amount: {}, caller: {})",
            self.to, self.amount, self.caller
        )
    }
}

impl Debug for Transfer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Transfer(from: {}, to: {}, value: {})",
            self.from, self.to, self.value
        )
    }
}

//! Log filters for the two activity streams
//!
//! Filters are built without block ranges; the chunked fetcher adds the range
//! for each RPC call.
//!
//! ```text
//! FaucetUsed(address indexed to, uint256 amount, address indexed caller)
//!   topic0 = signature hash, topic1 = to, topic2 = caller
//!
//! Transfer(address indexed from, address indexed to, uint256 value)
//!   topic0 = signature hash, topic1 = from, topic2 = to
//! ```

use alloy_primitives::Address;
use alloy_rpc_types::Filter;
use alloy_sol_types::SolEvent;

use crate::chain::ActivityStream;
use crate::events::definitions::{FaucetUsed, Transfer};

/// All `FaucetUsed` events emitted by `token`
pub fn dispense_filter(token: Address) -> Filter {
    Filter::new()
        .address(token)
        .event_signature(FaucetUsed::SIGNATURE_HASH)
}

/// All `Transfer` events of `token` whose sender is the zero address
pub fn mint_filter(token: Address) -> Filter {
    Filter::new()
        .address(token)
        .event_signature(Transfer::SIGNATURE_HASH)
        .topic1(Address::ZERO.into_word())
}

/// Filter for one activity stream
pub fn stream_filter(stream: ActivityStream, token: Address) -> Filter {
    match stream {
        ActivityStream::Dispense => dispense_filter(token),
        ActivityStream::Mint => mint_filter(token),
    }
}

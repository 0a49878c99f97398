//! Default values shared by the library and the service binary

use std::time::Duration;

/// Local Ganache endpoint used when `RPC_URL` is not set
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:7545";

/// HTTP port used when `PORT` is not set
pub const DEFAULT_PORT: u16 = 3001;

/// Whole tokens dispensed per faucet request
pub const DEFAULT_FAUCET_AMOUNT: &str = "100";

/// Page size when the caller gives no usable `limit`
pub const DEFAULT_PAGE_LIMIT: usize = 10;

/// Upper bound for every individual RPC call
pub const DEFAULT_RPC_TIMEOUT: Duration = Duration::from_secs(30);

/// Most `eth_getLogs` chunks one stream may issue for a single request
pub const DEFAULT_MAX_LOG_CHUNKS: usize = 500;

/// Delay between `eth_getTransactionReceipt` polls after a faucet send
pub const DEFAULT_RECEIPT_POLL_INTERVAL: Duration = Duration::from_millis(500);

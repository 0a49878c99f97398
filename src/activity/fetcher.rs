//! Dual-stream log fetching with per-stream failure isolation

use alloy_rpc_types::Log;
use tracing::{debug, error, Instrument};

use super::range::BlockRange;
use crate::chain::{ActivityStream, ChainClient};
use crate::tracing::spans;

/// Raw logs of both streams over one block window
#[derive(Debug, Default, Clone)]
pub struct StreamLogs {
    pub dispense: Vec<Log>,
    pub mint: Vec<Log>,
}

/// Query both streams concurrently
///
/// A failing stream is logged and contributes no logs; it never fails the
/// other stream or the request.
pub async fn fetch_streams<C: ChainClient + ?Sized>(client: &C, range: BlockRange) -> StreamLogs {
    let (dispense, mint) = tokio::join!(
        fetch_stream(client, ActivityStream::Dispense, range),
        fetch_stream(client, ActivityStream::Mint, range),
    );
    StreamLogs { dispense, mint }
}

async fn fetch_stream<C: ChainClient + ?Sized>(
    client: &C,
    stream: ActivityStream,
    range: BlockRange,
) -> Vec<Log> {
    let span = spans::fetch_stream(stream, range.from, range.to);

    async move {
        match client.query_logs(stream, range.from, range.to).await {
            Ok(logs) => {
                debug!(logs_count = logs.len(), "Fetched stream logs");
                logs
            }
            Err(e) => {
                error!(
                    stream = %stream,
                    from_block = range.from,
                    to_block = range.to,
                    error = ?e,
                    "Stream query failed, continuing without it"
                );
                Vec::new()
            }
        }
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::fixtures::{dispense_log, mint_log, tx, ScriptedChain};
    use alloy_primitives::{Address, U256};

    #[tokio::test]
    async fn test_both_streams_returned() {
        let chain = ScriptedChain {
            dispense: Some(vec![dispense_log(
                10,
                tx(1),
                Address::repeat_byte(1),
                U256::from(1),
                Address::repeat_byte(2),
            )]),
            mint: Some(vec![
                mint_log(10, tx(1), Address::repeat_byte(1), U256::from(1)),
                mint_log(11, tx(2), Address::repeat_byte(3), U256::from(1)),
            ]),
            ..Default::default()
        };

        let logs = fetch_streams(&chain, BlockRange::new(0, 20)).await;
        assert_eq!(logs.dispense.len(), 1);
        assert_eq!(logs.mint.len(), 2);
    }

    #[tokio::test]
    async fn test_failed_stream_degrades_to_empty() {
        let chain = ScriptedChain {
            dispense: None,
            mint: Some(vec![mint_log(
                10,
                tx(1),
                Address::repeat_byte(1),
                U256::from(1),
            )]),
            ..Default::default()
        };

        let logs = fetch_streams(&chain, BlockRange::new(0, 20)).await;
        assert!(logs.dispense.is_empty());
        assert_eq!(logs.mint.len(), 1);
    }

    #[tokio::test]
    async fn test_both_streams_failing_is_not_an_error() {
        let chain = ScriptedChain::default();
        let logs = fetch_streams(&chain, BlockRange::new(0, 20)).await;
        assert!(logs.dispense.is_empty());
        assert!(logs.mint.is_empty());
    }
}

// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end tests for the activity feed over a scripted chain

mod helpers;

use alloy_primitives::{address, Address, U256};
use faucetscan::{
    ActivityError, ActivityFeed, ActivityKind, ActivityQuery, ActivityStream,
    FaucetscanConfig, FaucetscanConfigBuilder, TokenMetadata,
};
use helpers::{dispense_log, mint_log, truncated_dispense_log, tx, units, MockChain};

const R1: Address = address!("00000000000000000000000000000000000000a1");
const R2: Address = address!("00000000000000000000000000000000000000a2");
const R3: Address = address!("00000000000000000000000000000000000000a3");
const C1: Address = address!("00000000000000000000000000000000000000c1");

fn feed(chain: MockChain) -> ActivityFeed<MockChain> {
    ActivityFeed::new(chain, FaucetscanConfig::default())
}

/// One dispense with its mint twin, plus an unrelated mint
fn faucet_chain() -> MockChain {
    MockChain::new()
        .with_head(100)
        .with_dispense_logs(vec![dispense_log(100, tx(1), R1, units(100, 18), C1)])
        .with_mint_logs(vec![
            mint_log(100, tx(1), R1, units(100, 18)),
            mint_log(95, tx(2), R2, units(50, 18)),
        ])
        .with_timestamp(100, 1_700_000_100)
        .with_timestamp(95, 1_700_000_095)
}

#[tokio::test]
async fn dispense_suppresses_its_mint_and_keeps_unrelated_mint() {
    let page = feed(faucet_chain())
        .recent_activity(ActivityQuery::new().limit(2))
        .await
        .unwrap();

    assert_eq!(page.total, 2);
    assert_eq!(page.events.len(), 2);

    let first = &page.events[0];
    assert_eq!(first.kind, ActivityKind::Dispense);
    assert_eq!(first.recipient, R1);
    assert_eq!(first.amount, "100");
    assert_eq!(first.caller, Some(C1));
    assert_eq!(first.block_number, 100);
    assert_eq!(first.timestamp, Some(1_700_000_100));

    let second = &page.events[1];
    assert_eq!(second.kind, ActivityKind::Mint);
    assert_eq!(second.recipient, R2);
    assert_eq!(second.amount, "50");
    assert_eq!(second.caller, None);
    assert_eq!(second.block_number, 95);
    assert_eq!(second.symbol, "FCT");
}

#[tokio::test]
async fn open_range_uses_default_lookback_from_head() {
    let chain = MockChain::new().with_head(5000);
    let feed = feed(chain);

    let page = feed.recent_activity(ActivityQuery::new()).await.unwrap();

    assert_eq!((page.from_block, page.to_block), (4000, 5000));
    let queries = feed.client().log_queries();
    assert_eq!(queries.len(), 2);
    assert!(queries.iter().all(|&(_, from, to)| (from, to) == (4000, 5000)));
}

#[tokio::test]
async fn custom_lookback_is_respected() {
    let config = FaucetscanConfigBuilder::new().lookback(50).build();
    let feed = ActivityFeed::new(MockChain::new().with_head(5000), config);

    let page = feed.recent_activity(ActivityQuery::new()).await.unwrap();
    assert_eq!((page.from_block, page.to_block), (4950, 5000));
}

#[tokio::test]
async fn inverted_range_returns_empty_page() {
    let feed = feed(faucet_chain());

    let page = feed
        .recent_activity(ActivityQuery::new().from_block(200).to_block(100))
        .await
        .unwrap();

    assert!(page.events.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!((page.from_block, page.to_block), (200, 100));
    assert!(feed.client().log_queries().is_empty());
}

#[tokio::test]
async fn entry_without_amount_is_skipped() {
    let chain = MockChain::new()
        .with_head(100)
        .with_dispense_logs(vec![
            truncated_dispense_log(99, tx(7), R3, C1),
            dispense_log(98, tx(8), R1, units(3, 18), C1),
        ])
        .with_mint_logs(vec![mint_log(97, tx(9), R2, units(4, 18))]);

    let page = feed(chain)
        .recent_activity(ActivityQuery::new())
        .await
        .unwrap();

    assert_eq!(page.total, 2);
    assert!(page.events.iter().all(|event| event.tx_hash != tx(7)));
    assert_eq!(page.events[0].tx_hash, tx(8));
    assert_eq!(page.events[1].tx_hash, tx(9));
}

#[tokio::test]
async fn failing_mint_stream_keeps_dispenses() {
    let chain = faucet_chain().failing_stream(ActivityStream::Mint);

    let page = feed(chain)
        .recent_activity(ActivityQuery::new())
        .await
        .unwrap();

    assert_eq!(page.total, 1);
    assert_eq!(page.events[0].kind, ActivityKind::Dispense);
}

#[tokio::test]
async fn failing_dispense_stream_keeps_all_mints() {
    let chain = faucet_chain().failing_stream(ActivityStream::Dispense);

    let page = feed(chain)
        .recent_activity(ActivityQuery::new())
        .await
        .unwrap();

    // Without the dispense, its mint twin is no longer suppressed
    assert_eq!(page.total, 2);
    assert!(page
        .events
        .iter()
        .all(|event| event.kind == ActivityKind::Mint));
}

#[tokio::test]
async fn both_streams_failing_is_an_empty_success() {
    let chain = faucet_chain()
        .failing_stream(ActivityStream::Dispense)
        .failing_stream(ActivityStream::Mint);

    let page = feed(chain)
        .recent_activity(ActivityQuery::new())
        .await
        .unwrap();
    assert_eq!(page.total, 0);
    assert!(page.events.is_empty());
}

#[tokio::test]
async fn head_failure_is_fatal_only_when_a_bound_is_missing() {
    let open = feed(faucet_chain().without_head())
        .recent_activity(ActivityQuery::new().to_block(100))
        .await;
    assert!(matches!(open, Err(ActivityError::HeadUnavailable(_))));

    let feed = feed(faucet_chain().without_head());
    let bounded = feed
        .recent_activity(ActivityQuery::new().from_block(0).to_block(100))
        .await
        .unwrap();
    assert_eq!(bounded.total, 2);
    assert_eq!(feed.client().head_queries(), 0);
}

#[tokio::test]
async fn failed_block_lookup_only_blanks_that_record() {
    let chain = faucet_chain().failing_block(95);

    let page = feed(chain)
        .recent_activity(ActivityQuery::new())
        .await
        .unwrap();

    assert_eq!(page.events[0].timestamp, Some(1_700_000_100));
    assert_eq!(page.events[1].timestamp, None);
}

#[tokio::test]
async fn timestamps_are_only_fetched_for_the_returned_page() {
    let chain = MockChain::new().with_head(100).with_mint_logs(
        (0..20)
            .map(|i| mint_log(80 + i, tx(i), R2, units(1, 18)))
            .collect(),
    );
    let feed = feed(chain);

    let page = feed
        .recent_activity(ActivityQuery::new().limit(3))
        .await
        .unwrap();

    assert_eq!(page.total, 20);
    assert_eq!(page.events.len(), 3);
    let mut looked_up = feed.client().block_queries();
    looked_up.sort_unstable();
    assert_eq!(looked_up, vec![97, 98, 99]);
}

#[tokio::test]
async fn metadata_failure_yields_empty_page_not_error() {
    let chain = faucet_chain().without_metadata();

    let page = feed(chain)
        .recent_activity(ActivityQuery::new())
        .await
        .unwrap();
    assert_eq!(page.total, 0);
}

#[tokio::test]
async fn amounts_use_the_token_decimals() {
    let chain = MockChain::new()
        .with_head(10)
        .with_metadata(TokenMetadata::new(6, "USDC"))
        .with_mint_logs(vec![mint_log(5, tx(1), R1, U256::from(2_500_001u64))]);

    let page = feed(chain)
        .recent_activity(ActivityQuery::new())
        .await
        .unwrap();

    assert_eq!(page.events[0].amount, "2.500001");
    assert_eq!(page.events[0].raw_amount, U256::from(2_500_001u64));
    assert_eq!(page.events[0].symbol, "USDC");
}

#[tokio::test]
async fn repeated_requests_are_identical() {
    let feed = feed(faucet_chain());
    let query = ActivityQuery::new().from_block(0).to_block(100).limit(5);

    let first = feed.recent_activity(query).await.unwrap();
    let second = feed.recent_activity(query).await.unwrap();

    assert_eq!(first, second);
}

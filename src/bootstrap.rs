use std::sync::Arc;

use alloy_network::EthereumWallet;
use alloy_provider::ProviderBuilder;
use alloy_signer_local::PrivateKeySigner;
use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::api::{serve_api, SharedBackend};
use crate::{ActivityFeed, FaucetToken, FaucetscanConfig, ServiceConfig};

/// Install the global tracing subscriber
///
/// Honors `RUST_LOG`, defaulting to `info`.
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Main entry point for the application.
pub async fn run(config: ServiceConfig) -> anyhow::Result<()> {
    let listener = TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.port))?;

    let signer: PrivateKeySigner = config
        .private_key
        .trim()
        .parse()
        .context("PRIVATE_KEY is not a valid secp256k1 key")?;
    info!(faucet_account = %signer.address(), "Loaded faucet signer");

    let provider = ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer))
        .connect_http(config.rpc_url.clone());

    let faucetscan_config = FaucetscanConfig::default();
    let token = FaucetToken::new(config.contract_address, provider, &faucetscan_config);
    let backend: SharedBackend = Arc::new(ActivityFeed::new(token, faucetscan_config));

    info!(
        contract_address = %config.contract_address,
        rpc_url = %config.rpc_url,
        "Faucet backend ready"
    );

    serve_api(listener, backend).await
}
